//! Candidate extractor (stage 2)
//!
//! Finds the first query-start construct in the cleaned text and discards
//! everything before it, narration included.

use crate::patterns::QUERY_START;

/// Extract the candidate statement: the suffix of the cleaned text starting
/// at the first `WITH ... SELECT` or bare `SELECT`, case-insensitively.
///
/// Returns `None` when no query-start keyword exists anywhere, including
/// for empty input. Only the first match is used; this stage has no notion
/// of multiple independent statements.
pub fn extract_candidate(cleaned: &str) -> Option<String> {
    QUERY_START
        .find(cleaned)
        .map(|m| cleaned[m.start()..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_prefix_discarded() {
        assert_eq!(
            extract_candidate("Here is the query: SELECT * FROM my_table; and more").as_deref(),
            Some("SELECT * FROM my_table; and more")
        );
    }

    #[test]
    fn cte_extracted_from_its_with_keyword() {
        assert_eq!(
            extract_candidate("Analysis: WITH recent AS (SELECT 1) SELECT * FROM recent")
                .as_deref(),
            Some("WITH recent AS (SELECT 1) SELECT * FROM recent")
        );
    }

    #[test]
    fn case_insensitive_match() {
        assert_eq!(
            extract_candidate("result: select * from api_logs").as_deref(),
            Some("select * from api_logs")
        );
    }

    #[test]
    fn select_must_be_a_whole_word() {
        assert!(extract_candidate("use preselection or selections here").is_none());
    }

    #[test]
    fn with_but_no_select_is_not_a_candidate() {
        assert!(extract_candidate("WITH great power comes great responsibility").is_none());
    }

    #[test]
    fn no_query_start_anywhere() {
        assert!(extract_candidate("This text does not contain a valid SQL query.").is_none());
        assert!(extract_candidate("").is_none());
    }
}
