//! Error types for pixquest.
//!
//! This module defines the centralized error type [`PixquestError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for pixquest operations.
///
/// This enum consolidates all error conditions that can occur while driving a
/// search session, from configuration loading to HTTP transport failures. Most
/// variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// Domain outcomes are not errors: an empty query or a query with zero matches
/// is handled inside the session state machine and surfaced to the user as a
/// notice, never as a `PixquestError`.
///
/// # Examples
///
/// ```
/// use pixquest::PixquestError;
///
/// fn require_api_key(key: &str) -> Result<(), PixquestError> {
///     if key.is_empty() {
///         return Err(PixquestError::Config("Missing API key".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(require_api_key("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum PixquestError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport or protocol failure while talking to the search API.
    ///
    /// Covers connection errors, timeouts, non-success status codes, and
    /// response body decoding failures.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The configured API base URL could not be parsed.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

/// A specialized `Result` type for pixquest operations.
///
/// This is a type alias for `std::result::Result<T, PixquestError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use pixquest::domain::Result;
///
/// fn prepare_session() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PixquestError>;
