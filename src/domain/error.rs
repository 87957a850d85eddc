//! Error types for the zhelf plugin.
//!
//! This module defines the centralized error type [`ZhelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! User input problems (an empty title, a non-numeric page count) are not errors in
//! this sense: they are ordinary values of [`FieldError`](crate::domain::draft::FieldError)
//! that the form renders inline. `ZhelfError` covers infrastructure fallibility only.

use thiserror::Error;

/// The main error type for zhelf plugin operations.
///
/// This enum consolidates the error conditions that can occur during plugin
/// execution: theme loading, filesystem I/O for the log file, and configuration
/// parsing. Most variants wrap underlying errors from external crates using
/// `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum ZhelfError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme loading or parsing failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML content cannot be
    /// parsed. The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are malformed. The string
    /// describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zhelf operations.
///
/// This is a type alias for `std::result::Result<T, ZhelfError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZhelfError>;
