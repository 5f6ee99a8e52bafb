//! Error types for pagekit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pager Errors
    // ============================================================================
    #[error("Missing required pager configuration: {field}")]
    ConfigurationMissing { field: String },

    #[error("Item count is not set for page {page}")]
    ItemCountUnset { page: u64 },

    #[error("Page {page} is out of range (page count: {page_count})")]
    PageOutOfRange { page: u64, page_count: u64 },

    // ============================================================================
    // URL Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid rewrite pattern '{pattern}': {message}")]
    InvalidRewritePattern { pattern: String, message: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing pager configuration error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::ConfigurationMissing {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(page: u64, page_count: u64) -> Self {
        Self::PageOutOfRange { page, page_count }
    }

    /// Create an invalid rewrite pattern error
    pub fn rewrite_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRewritePattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Check if this error comes from reading pager state that was never set
    pub fn is_missing_configuration(&self) -> bool {
        matches!(
            self,
            Error::ConfigurationMissing { .. } | Error::ItemCountUnset { .. }
        )
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;
