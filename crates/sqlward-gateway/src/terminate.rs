//! Termination resolver (stage 3)
//!
//! Decides where the candidate statement ends and guarantees exactly one
//! trailing `;`.

use crate::patterns::CLAUSE_BOUNDARY;
use sqlward_core::TerminationMode;

/// Resolve the statement boundary for an extracted candidate.
///
/// In [`TerminationMode::Semicolon`] the statement is everything up to and
/// including the first `;`, or the whole candidate when none exists. In
/// [`TerminationMode::ClauseBoundary`] a candidate without a `;` is instead
/// cut before the first trailing clause keyword.
///
/// Returns `None` only for an empty candidate. Extraction never produces
/// one, so this is a defensive branch rather than an expected path.
pub fn resolve_termination(candidate: &str, mode: TerminationMode) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    let statement = match candidate.find(';') {
        Some(idx) => format!("{};", candidate[..idx].trim_end()),
        None => match mode {
            TerminationMode::Semicolon => format!("{candidate};"),
            TerminationMode::ClauseBoundary => clause_boundary_cut(candidate),
        },
    };

    Some(statement)
}

/// Cut before the first trailing clause keyword, keeping the whole
/// candidate when none exists. Note this truncates legitimate trailing
/// clauses too (`UNION ALL`, `ORDER BY`, ...); that tradeoff is why
/// semicolon mode is the default.
fn clause_boundary_cut(candidate: &str) -> String {
    match CLAUSE_BOUNDARY.find(candidate) {
        Some(m) if m.start() > 0 => format!("{};", candidate[..m.start()].trim_end()),
        _ => format!("{candidate};"),
    }
}
