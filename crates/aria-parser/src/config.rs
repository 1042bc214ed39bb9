//! Parser configuration.
//!
//! Limits can be set in code or loaded from TOML, either as a standalone
//! document or from the `[parser]` table of a project manifest:
//!
//! ```toml
//! [parser]
//! max_nesting_depth = 64
//! max_diagnostics = 50
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum nesting of blocks and expressions
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Default number of diagnostics after which parsing stops
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 256;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("Failed to parse parser configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid parser configuration: {0}")]
    ValidationError(String),
}

/// Limits applied during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest allowed nesting of blocks and expressions; deeper input
    /// produces a `LimitExceeded` diagnostic instead of recursing further
    pub max_nesting_depth: usize,

    /// Parsing stops once this many diagnostics have been recorded
    pub max_diagnostics: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}

#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    parser: ParserConfig,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_max_diagnostics(mut self, count: usize) -> Self {
        self.max_diagnostics = count;
        self
    }

    /// Parse a standalone configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the `[parser]` table of a manifest; other tables are ignored.
    pub fn from_manifest_str(content: &str) -> Result<Self, ConfigError> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.parser.validate()?;
        Ok(manifest.parser)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_nesting_depth must be at least 1".to_string(),
            ));
        }
        if self.max_diagnostics == 0 {
            return Err(ConfigError::ValidationError(
                "max_diagnostics must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
