//! Error types for the askbar widget.
//!
//! The widget state machine itself never fails: every handler is a total
//! function over its state. [`AskbarError`] covers the ambient concerns around
//! it, namely theme loading, configuration parsing and trace file I/O.

use thiserror::Error;

/// The main error type for askbar operations outside the state machine.
///
/// # Examples
///
/// ```
/// use askbar::AskbarError;
///
/// let err = AskbarError::Config("search_delay_ms: expected milliseconds".to_string());
/// assert_eq!(err.to_string(), "Configuration error: search_delay_ms: expected milliseconds");
/// ```
#[derive(Debug, Error)]
pub enum AskbarError {
    /// A theme could not be read or parsed.
    ///
    /// The string describes the file or the TOML problem.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is malformed.
    ///
    /// The string names the key and what was expected.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for askbar operations.
pub type Result<T> = std::result::Result<T, AskbarError>;
