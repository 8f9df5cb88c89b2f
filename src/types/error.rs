//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (StitchError) for the entire application
//! - Structured variants with context for better diagnostics
//! - External library errors converted via `#[from]` at the boundary
//! - No panic/unwrap - all errors are recoverable

use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

/// Top-level error type covering every stage of the pipeline
#[derive(Debug, Error)]
pub enum StitchError {
    /// Filesystem read/write failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failures
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failures
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Invalid include/exclude glob pattern
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Template file failed to compile
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Sentinel region pattern failed to compile
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Source file could not be parsed
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Project has not been set up yet
    #[error("Not initialized: run 'docstitch init' first")]
    NotInitialized,

    /// One or more READMEs diverge from generated output
    #[error("{0} README(s) out of date; run 'docstitch generate'")]
    Stale(usize),
}

impl StitchError {
    /// Build a parse error with source location context
    pub fn parse(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Build a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<handlebars::TemplateError> for StitchError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(err))
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, StitchError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = StitchError::parse("unexpected token", "src/index.ts");
        assert_eq!(
            err.to_string(),
            "Parse error in src/index.ts: unexpected token"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = StitchError::config("packages.root must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: packages.root must not be empty"
        );
    }

    #[test]
    fn test_stale_error_display() {
        let err = StitchError::Stale(3);
        assert_eq!(
            err.to_string(),
            "3 README(s) out of date; run 'docstitch generate'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StitchError = io.into();
        assert!(matches!(err, StitchError::Io(_)));
    }

    #[test]
    fn test_not_initialized_mentions_init() {
        assert!(StitchError::NotInitialized.to_string().contains("init"));
    }
}
