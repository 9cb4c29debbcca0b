//! Configuration schema (sqlward.toml)

use serde::{Deserialize, Serialize};

/// Statement termination strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminationMode {
    /// Cut at the first `;`, or keep the whole candidate when none exists.
    /// In this mode the clause-boundary fallback can never fire.
    Semicolon,

    /// When no `;` exists, cut before the first trailing clause keyword
    /// (`UNION [ALL]`, `EXCEPT`, `INTERSECT`, `LIMIT`, `OFFSET`, `FETCH`,
    /// `FOR`, `ORDER BY`, `GROUP BY`, `HAVING`, `WINDOW`). Note this
    /// truncates legitimate trailing clauses as well.
    ClauseBoundary,
}

impl Default for TerminationMode {
    fn default() -> Self {
        Self::Semicolon
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Statement termination strategy
    #[serde(default)]
    pub termination: TerminationMode,
}

impl GatewayConfig {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.termination, TerminationMode::Semicolon);
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = GatewayConfig {
            termination: TerminationMode::ClauseBoundary,
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: GatewayConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn termination_mode_kebab_case() {
        let config = GatewayConfig::from_toml("termination = \"clause-boundary\"").unwrap();
        assert_eq!(config.termination, TerminationMode::ClauseBoundary);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = GatewayConfig::from_toml("").unwrap();
        assert_eq!(config, GatewayConfig::default());
    }
}
