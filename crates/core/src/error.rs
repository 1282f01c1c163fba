//! Error types for the promptpack domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all promptpack operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Context (aggregation / tokenization) errors ---
    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Errors raised while resolving, tagging, or counting context files.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot enumerate directory {path}: {source}")]
    DirAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is neither a file nor a directory: {path}")]
    UnknownPath { path: PathBuf },

    #[error("Tokenizer initialization failed: {0}")]
    Tokenizer(String),
}

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn context_error_carries_path() {
        let err = Error::Context(ContextError::UnknownPath {
            path: PathBuf::from("/no/such/thing"),
        });
        assert!(err.to_string().contains("/no/such/thing"));
    }

    #[test]
    fn file_access_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ContextError::FileAccess {
            path: PathBuf::from("secret.txt"),
            source: io,
        };
        assert!(err.to_string().contains("secret.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
