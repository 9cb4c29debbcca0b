//! Input sanitizer (stage 1)
//!
//! Strips comments and stray markdown fencing and normalizes whitespace.
//! This stage is infallible: any string in, a cleaned string out.

use crate::patterns::{BLOCK_COMMENT, LINE_COMMENT, WHITESPACE_RUN};

/// Sanitize raw language-model output into cleaned text.
///
/// Order matters: comments are removed before fence stripping so a fence
/// buried in a comment disappears with the comment, and whitespace is
/// collapsed last so earlier replacements cannot reintroduce runs.
pub fn clean_input(raw: &str) -> String {
    let cleaned = BLOCK_COMMENT.replace_all(raw, " ");
    let cleaned = LINE_COMMENT.replace_all(&cleaned, " ");
    let cleaned = strip_edge_backticks(&cleaned);
    WHITESPACE_RUN.replace_all(&cleaned, " ").trim().to_string()
}

/// Strip a run of backticks at the very start and very end of the text.
///
/// Backticks anywhere else are left alone here; the validator judges them
/// later. A trailing run is still recognized when a single final newline
/// follows it, which is how fenced completions usually end.
fn strip_edge_backticks(text: &str) -> String {
    let stripped = text.trim_start_matches('`');

    let (body, tail) = match stripped.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (stripped, ""),
    };

    let body = body.trim_end_matches('`');
    format!("{body}{tail}")
}
