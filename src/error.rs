//! Error types.
//!
//! Decomposition itself never fails. Errors only come from building
//! configuration and loading recipe data, and are represented by the
//! `ConfigError` enum.

use thiserror::Error;

/// Errors raised while loading configuration or recipe data.
///
/// # Examples
///
/// ```rust
/// use bomcalc::DecomposerConfig;
///
/// let config = DecomposerConfig {
///     base_item_patterns: vec!["minecraft:(stick".to_string()],
///     blacklist: Vec::new(),
/// };
/// let err = config.compile().unwrap_err();
/// assert!(err.to_string().contains("minecraft:(stick"));
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An identity pattern is not a valid regular expression.
    #[error("Invalid item pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// JSON input could not be parsed.
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
