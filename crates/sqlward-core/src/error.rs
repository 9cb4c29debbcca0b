//! Error kinds and the pipeline trace
//!
//! IMPORTANT: Error codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for a pipeline stage that never ran.
pub const NOT_AVAILABLE: &str = "N/A";

/// Which backtick rule a statement violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacktickViolation {
    /// The statement itself starts or ends with a backtick
    FenceDelimited,

    /// A backtick appears outside any `'...'` or `"..."` span
    BareBacktick,
}

/// Rejection code registry (v1)
///
/// These codes are STABLE and VERSIONED.
/// Do NOT rename or remove codes - only add new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// No query-start keyword (`WITH ... SELECT` or `SELECT`) anywhere in
    /// the cleaned text, and no blocked operation either
    #[error("no valid SQL statement found")]
    NoStatementFound,

    /// Termination was handed an empty candidate. Extraction guarantees a
    /// non-empty candidate, so this is defensive rather than expected.
    #[error("no valid SELECT statement found")]
    NoSelectStatement,

    /// A disallowed operation matched outside quoted literals
    #[error("blocked SQL operation detected: {pattern}")]
    BlockedOperation { pattern: String },

    /// Illegal backtick placement (fence-style delimiting or a bare
    /// backtick in the statement body)
    #[error("invalid backticks in SQL")]
    InvalidBacktick { violation: BacktickViolation },
}

impl ErrorKind {
    /// Get the rejection code as a stable string identifier
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoStatementFound => "NO_STATEMENT_FOUND",
            Self::NoSelectStatement => "NO_SELECT_STATEMENT",
            Self::BlockedOperation { .. } => "BLOCKED_OPERATION",
            Self::InvalidBacktick { .. } => "INVALID_BACKTICK",
        }
    }
}

/// Snapshot of every intermediate stage output produced before a failure
///
/// A stage that never ran is `None` and renders as the explicit
/// [`NOT_AVAILABLE`] marker, never silently omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineTrace {
    /// Original untrusted input, exactly as received
    pub raw_input: String,

    /// Sanitizer output, if the sanitizer ran
    pub cleaned_text: Option<String>,

    /// Extractor output, if extraction succeeded
    pub candidate: Option<String>,
}

impl PipelineTrace {
    /// Create a trace holding only the raw input
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            cleaned_text: None,
            candidate: None,
        }
    }

    /// Record the sanitizer output
    pub fn with_cleaned_text(mut self, cleaned_text: impl Into<String>) -> Self {
        self.cleaned_text = Some(cleaned_text.into());
        self
    }

    /// Record the extracted candidate
    pub fn with_candidate(mut self, candidate: impl Into<String>) -> Self {
        self.candidate = Some(candidate.into());
        self
    }

    /// Cleaned text, or the explicit not-available marker
    pub fn cleaned_text_or_na(&self) -> &str {
        self.cleaned_text.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Extracted candidate, or the explicit not-available marker
    pub fn candidate_or_na(&self) -> &str {
        self.candidate.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// A terminal gateway rejection: the error kind plus the full forensic trace
///
/// `Display` renders the four-line forensic layout for logs and operator
/// tooling. End users should only ever see [`GatewayError::public_message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayError {
    /// Stable rejection kind
    pub kind: ErrorKind,

    /// How far the pipeline got before failing
    pub trace: PipelineTrace,
}

impl GatewayError {
    /// Create a new gateway error
    pub fn new(kind: ErrorKind, trace: PipelineTrace) -> Self {
        Self { kind, trace }
    }

    /// Stable string code for the underlying kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Generic rejection message safe to show end users
    ///
    /// The detailed trace belongs in logs and operator tooling only.
    pub fn public_message(&self) -> &'static str {
        "The generated SQL was rejected by the security gateway."
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SQL Extraction Failed: {}\nOriginal Input: {}\nCleaned Text: {}\nExtracted SQL: {}",
            self.kind,
            self.trace.raw_input,
            self.trace.cleaned_text_or_na(),
            self.trace.candidate_or_na(),
        )
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
