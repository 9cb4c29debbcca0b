//! SQL extraction and security validation
//!
//! This crate handles:
//! - Sanitizing raw language-model output (comments, fences, whitespace)
//! - Extracting the first query-like candidate from noisy text
//! - Resolving statement termination to exactly one trailing `;`
//! - Rejecting disallowed operations and illegal backticks
//! - Assembling the forensic trace carried by every rejection
//!
//! The whole pipeline is a pure, synchronous transformation over a single
//! string: no I/O, no shared state, safe to call from any number of
//! threads. Rejections are logged at `warn` via `tracing`; callers decide
//! what end users see.

mod patterns;
pub mod extract;
pub mod sanitize;
pub mod terminate;
pub mod validate;

use tracing::{debug, warn};

use sqlward_core::{ErrorKind, GatewayConfig, GatewayError, PipelineTrace, ValidatedStatement};

/// The extraction and validation gateway
///
/// Holds only immutable configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct SqlGateway {
    config: GatewayConfig,
}

impl SqlGateway {
    /// Create a gateway with the given configuration
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// The configuration this gateway was built with
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Extract, normalize, and validate exactly one read-only SQL statement
    /// from raw language-model output.
    ///
    /// Either returns a fully validated statement or a terminal
    /// [`GatewayError`] carrying the forensic trace. There is no partial
    /// recovery and no fallback SQL.
    pub fn extract(&self, raw: &str) -> Result<ValidatedStatement, GatewayError> {
        let cleaned = sanitize::clean_input(raw);
        debug!(cleaned = %cleaned, "sanitized input");

        let Some(candidate) = extract::extract_candidate(&cleaned) else {
            let kind = classify_extraction_failure(&cleaned);
            warn!(code = kind.code(), "no SQL candidate extracted");
            return Err(GatewayError::new(
                kind,
                PipelineTrace::new(raw).with_cleaned_text(cleaned),
            ));
        };
        debug!(candidate = %candidate, "extracted candidate");

        let Some(statement) = terminate::resolve_termination(&candidate, self.config.termination)
        else {
            warn!(code = ErrorKind::NoSelectStatement.code(), "empty candidate");
            return Err(GatewayError::new(
                ErrorKind::NoSelectStatement,
                PipelineTrace::new(raw)
                    .with_cleaned_text(cleaned)
                    .with_candidate(candidate),
            ));
        };

        if let Err(kind) = validate::validate_statement(&statement) {
            warn!(code = kind.code(), "statement rejected");
            return Err(GatewayError::new(
                kind,
                PipelineTrace::new(raw)
                    .with_cleaned_text(cleaned)
                    .with_candidate(candidate),
            ));
        }

        debug!(statement = %statement, "statement validated");
        Ok(ValidatedStatement::new(statement))
    }
}

/// Extract and validate with the default configuration.
///
/// Convenience wrapper over [`SqlGateway::extract`].
pub fn extract_sql(raw: &str) -> Result<ValidatedStatement, GatewayError> {
    SqlGateway::default().extract(raw)
}

/// Classify a failed extraction before reporting it.
///
/// A cleaned text with no query start but a blocked operation (outside
/// quoted literals) is reported as that blocked operation, so a bare
/// `INSERT INTO ...` is rejected for what it is rather than for lacking a
/// `SELECT`. Pure prose stays `NoStatementFound`.
fn classify_extraction_failure(cleaned: &str) -> ErrorKind {
    let unquoted = validate::blank_quoted_spans(cleaned);
    match validate::find_blocked_operation(&unquoted) {
        Some(pattern) => ErrorKind::BlockedOperation {
            pattern: pattern.to_string(),
        },
        None => ErrorKind::NoStatementFound,
    }
}
