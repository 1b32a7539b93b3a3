//! Checker configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid checker configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Knobs shared by every checker in one validation pass.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Deepest context depth at which object checkers still describe their
    /// fields. Probing a child checker adds one level, so the default of 0
    /// describes the fields of the object being checked but not their fields
    /// in turn.
    pub expectation_depth: i32,

    /// Code fence language of hover signatures.
    pub hover_language: String,

    /// Line placed between a hover signature and its documentation.
    pub hover_separator: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            expectation_depth: 0,
            hover_language: "typescript".to_string(),
            hover_separator: "******".to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = CheckerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = CheckerConfig::from_json_str(r#"{"expectationDepth": 2}"#).unwrap();
        assert_eq!(config.expectation_depth, 2);
        assert_eq!(config.hover_language, "typescript");
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = CheckerConfig::from_json_str(r#"{"hoverLanguage": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid checker configuration"));
    }
}
