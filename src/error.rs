// src/error.rs

//! Unified error handling for the extractor.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The API answered with an error other than the end-of-pagination signal
    #[error("API returned an error on page {page} - something is missing? {payload}")]
    Api { page: u32, payload: Value },

    /// Extraction was asked to continue after it already failed
    #[error("Extraction already failed on page {page}")]
    Aborted { page: u32 },

    /// The scraping proxy rejected the request itself
    #[error("Proxy error: {0}")]
    Proxy(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an API error carrying the original error payload.
    pub fn api(page: u32, payload: Value) -> Self {
        Self::Api { page, payload }
    }

    /// Create an error for a request made after a failed page.
    pub fn aborted(page: u32) -> Self {
        Self::Aborted { page }
    }

    /// Create a proxy error.
    pub fn proxy(message: impl Into<String>) -> Self {
        Self::Proxy(message.into())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The error payload, if this error came from the API.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
