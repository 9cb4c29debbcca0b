//! Security validator (stage 4)
//!
//! Inspection only: a pass means the statement is returned unchanged.
//! Keyword matching always runs on text with quoted literals blanked so
//! literal data can never trip the blocklist.

use crate::patterns::{BLOCKLIST, QUOTED_OR_BACKTICK, QUOTED_SPAN};
use sqlward_core::{BacktickViolation, ErrorKind};

/// Validate a terminated statement against the security policy.
pub fn validate_statement(statement: &str) -> Result<(), ErrorKind> {
    let unquoted = blank_quoted_spans(statement);

    if let Some(pattern) = find_blocked_operation(&unquoted) {
        return Err(ErrorKind::BlockedOperation {
            pattern: pattern.to_string(),
        });
    }

    // Backtick hygiene runs on the un-blanked statement.
    if statement.starts_with('`') || statement.ends_with('`') {
        return Err(ErrorKind::InvalidBacktick {
            violation: BacktickViolation::FenceDelimited,
        });
    }

    if has_bare_backtick(statement) {
        return Err(ErrorKind::InvalidBacktick {
            violation: BacktickViolation::BareBacktick,
        });
    }

    Ok(())
}

/// Replace `'...'` and `"..."` spans with empty strings
pub(crate) fn blank_quoted_spans(sql: &str) -> String {
    QUOTED_SPAN.replace_all(sql, "").into_owned()
}

/// First blocked operation matching the quote-blanked text, in declaration
/// order. Also used to classify extraction failures.
pub(crate) fn find_blocked_operation(unquoted: &str) -> Option<&'static str> {
    BLOCKLIST
        .iter()
        .find(|blocked| blocked.regex.is_match(unquoted))
        .map(|blocked| blocked.name)
}

/// Scan left-to-right treating quoted spans as opaque; any backtick match
/// outside a span is a bare backtick.
fn has_bare_backtick(text: &str) -> bool {
    QUOTED_OR_BACKTICK
        .find_iter(text)
        .any(|m| m.as_str() == "`")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocked_pattern(statement: &str) -> Option<&'static str> {
        find_blocked_operation(&blank_quoted_spans(statement))
    }

    #[test]
    fn plain_select_passes() {
        assert!(validate_statement("SELECT id, name FROM users WHERE active = true;").is_ok());
    }

    #[test]
    fn blocked_operations_reported_by_name() {
        assert_eq!(blocked_pattern("INSERT INTO t VALUES (1);"), Some("INSERT INTO"));
        assert_eq!(blocked_pattern("SELECT 1; DROP TABLE users;"), Some("DROP"));
        assert_eq!(blocked_pattern("GRANT SELECT ON cte TO hacker;"), Some("GRANT"));
    }

    #[test]
    fn blocklist_is_case_insensitive() {
        assert_eq!(blocked_pattern("UpDaTe inventory SET stock = 100;"), Some("UPDATE"));
    }

    #[test]
    fn literals_never_trip_the_blocklist() {
        assert!(validate_statement("SELECT 'DROP TABLE users' AS threat FROM logs;").is_ok());
        assert!(validate_statement("SELECT \"UPDATE me\" FROM notes;").is_ok());
    }

    #[test]
    fn conservative_matching_rejects_embedded_words() {
        // No word boundaries: an identifier embedding a blocked word is
        // rejected too. False positives are acceptable here.
        assert_eq!(
            blocked_pattern("SELECT last_update FROM stats;"),
            Some("UPDATE")
        );
    }

    #[test]
    fn select_into_is_blocked() {
        assert_eq!(
            blocked_pattern("SELECT id INTO archive FROM users;"),
            Some("INTO")
        );
    }

    #[test]
    fn fence_delimited_backticks_rejected() {
        assert_eq!(
            validate_statement("`SELECT 1;"),
            Err(ErrorKind::InvalidBacktick {
                violation: BacktickViolation::FenceDelimited
            })
        );
    }

    #[test]
    fn bare_backtick_in_body_rejected() {
        assert_eq!(
            validate_statement("SELECT `id` FROM users;"),
            Err(ErrorKind::InvalidBacktick {
                violation: BacktickViolation::BareBacktick
            })
        );
    }

    #[test]
    fn quoted_backticks_are_opaque() {
        assert!(validate_statement("SELECT '`test`' AS marker FROM table;").is_ok());
        assert!(validate_statement("SELECT \"`col`\" FROM t;").is_ok());
    }

    #[test]
    fn mixed_quoting_still_catches_bare_backtick() {
        assert_eq!(
            validate_statement("SELECT 'valid' `\"invalid;"),
            Err(ErrorKind::InvalidBacktick {
                violation: BacktickViolation::BareBacktick
            })
        );
    }
}
