//! SQLWard Core
//!
//! Core vocabulary with stable, versioned types: rejection codes, the
//! pipeline trace carried by every error, the validated-statement boundary
//! type, and gateway configuration.
//! Never rename rejection codes - they are part of the public API.

pub mod config;
pub mod error;
pub mod statement;

pub use config::{ConfigError, GatewayConfig, TerminationMode};
pub use error::{BacktickViolation, ErrorKind, GatewayError, PipelineTrace, NOT_AVAILABLE};
pub use statement::ValidatedStatement;
