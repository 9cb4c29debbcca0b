//! The validated statement boundary type

use serde::{Deserialize, Serialize};

/// A single read-only SQL statement that passed the security validator
///
/// This is the only type the gateway ever hands to callers. Invariant:
/// the text ends with exactly one `;` and contains no blocked operation
/// or illegal backtick outside quoted literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatedStatement(String);

impl ValidatedStatement {
    /// Wrap statement text that has passed validation.
    ///
    /// Only the gateway pipeline should construct these; downstream
    /// executors treat possession of the type as proof of validation.
    pub fn new(statement: impl Into<String>) -> Self {
        Self(statement.into())
    }

    /// The statement text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the statement text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ValidatedStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ValidatedStatement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
