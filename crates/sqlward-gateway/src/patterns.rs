//! Compiled pattern tables shared by the pipeline stages
//!
//! All regexes are compiled once into immutable lazy statics; nothing here
//! holds mutable state.

use once_cell::sync::Lazy;
use regex::Regex;

/// `/* ... */` block comments, possibly spanning lines. Non-greedy: only
/// the first paired close is matched per open, so nested comment markers
/// leave artifacts. That behavior is pinned by tests, not corrected.
pub(crate) static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// `-- ...` line comments, up to end of line
pub(crate) static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)--.*$").unwrap());

/// Any run of whitespace (spaces, tabs, newlines)
pub(crate) static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// First query-start construct: a CTE prefix that eventually reaches
/// `SELECT`, or a bare whole-word `SELECT`
pub(crate) static QUERY_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)WITH\s+.*?\bSELECT\b|\bSELECT\b").unwrap());

/// Trailing clause keywords used by the clause-boundary termination rule.
/// `UNION ALL` is listed before `UNION` so the longer form wins.
pub(crate) static CLAUSE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:UNION\s+ALL|UNION|EXCEPT|INTERSECT|LIMIT|OFFSET|FETCH|FOR|ORDER\s+BY|GROUP\s+BY|HAVING|WINDOW)\b",
    )
    .unwrap()
});

/// Quoted literal spans, single- or double-quoted
pub(crate) static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"'[^']*'|"[^"]*""#).unwrap());

/// Quoted spans or a lone backtick. Alternation order makes quoted spans
/// win, so a backtick only matches when it sits outside every span.
pub(crate) static QUOTED_OR_BACKTICK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'|`"#).unwrap());

/// A disallowed operation and the name reported when it matches
pub(crate) struct BlockedPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Blocked operation table, scanned in declaration order against text with
/// quoted literals blanked out.
///
/// Matching is deliberately conservative: the patterns require trailing
/// whitespace rather than word boundaries, so an identifier embedding a
/// blocked word is rejected too. A false positive is acceptable here; a
/// false negative is not.
pub(crate) static BLOCKLIST: Lazy<Vec<BlockedPattern>> = Lazy::new(|| {
    [
        ("INSERT INTO", r"(?i)INSERT\s+INTO"),
        ("UPDATE", r"(?i)UPDATE\s+"),
        ("DELETE FROM", r"(?i)DELETE\s+FROM"),
        ("CREATE", r"(?i)CREATE\s+"),
        ("DROP", r"(?i)DROP\s+"),
        ("ALTER", r"(?i)ALTER\s+"),
        ("TRUNCATE", r"(?i)TRUNCATE\s+"),
        ("GRANT", r"(?i)GRANT\s+"),
        ("REVOKE", r"(?i)REVOKE\s+"),
        ("COMMIT", r"(?i)COMMIT\s+"),
        ("ROLLBACK", r"(?i)ROLLBACK\s+"),
        ("SAVEPOINT", r"(?i)SAVEPOINT\s+"),
        ("WITH RETURNING", r"(?i)WITH\s+RETURNING"),
        ("INTO", r"(?i)INTO\s+"),
    ]
    .into_iter()
    .map(|(name, pattern)| BlockedPattern {
        name,
        regex: Regex::new(pattern).unwrap(),
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocklist_order_and_size() {
        assert_eq!(BLOCKLIST.len(), 14);
        assert_eq!(BLOCKLIST[0].name, "INSERT INTO");
        assert_eq!(BLOCKLIST[13].name, "INTO");
    }

    #[test]
    fn query_start_prefers_leftmost_cte() {
        let m = QUERY_START
            .find("WITH cte AS (SELECT 1) SELECT * FROM cte")
            .unwrap();
        assert_eq!(m.start(), 0);
    }

    #[test]
    fn clause_boundary_prefers_union_all() {
        let m = CLAUSE_BOUNDARY.find("a UNION ALL b").unwrap();
        assert_eq!(m.as_str(), "UNION ALL");
    }

    #[test]
    fn quoted_or_backtick_skips_quoted_spans() {
        let hits: Vec<&str> = QUOTED_OR_BACKTICK
            .find_iter(r#"'`quoted`' and ` bare"#)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(hits, vec!["'`quoted`'", "`"]);
    }
}
