//! Error types for lva-engine
//!
//! Provides unified error handling across the crate. Each variant maps to a
//! stable error code consumed at the service boundary.

use thiserror::Error;

/// Main error type for analysis operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input is not syntactically valid ECMAScript
    #[error("parse error: {0}")]
    Parse(String),

    /// The input exceeds the configured size boundary
    #[error("input too large: {length} characters exceeds the limit of {limit}")]
    InputTooLarge { length: usize, limit: usize },

    /// An internal invariant was violated
    #[error("analysis failure: {0}")]
    Analysis(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        AnalysisError::Parse(msg.into())
    }

    /// Create an internal analysis failure
    pub fn internal(msg: impl Into<String>) -> Self {
        AnalysisError::Analysis(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        AnalysisError::Config(msg.into())
    }

    /// Stable error code for callers; internal details stay in the message
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::Parse(_) => "PARSE_ERROR",
            AnalysisError::InputTooLarge { .. } => "INPUT_TOO_LARGE",
            AnalysisError::Analysis(_) => "ANALYSIS_FAILURE",
            AnalysisError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AnalysisError::parse("x").code(), "PARSE_ERROR");
        assert_eq!(
            AnalysisError::InputTooLarge {
                length: 10,
                limit: 5
            }
            .code(),
            "INPUT_TOO_LARGE"
        );
        assert_eq!(AnalysisError::internal("x").code(), "ANALYSIS_FAILURE");
        assert_eq!(AnalysisError::config("x").code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_input_too_large_display() {
        let err = AnalysisError::InputTooLarge {
            length: 60_000,
            limit: 50_000,
        };
        assert_eq!(
            err.to_string(),
            "input too large: 60000 characters exceeds the limit of 50000"
        );
    }
}
