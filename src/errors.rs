/*!
 * Error types for the rendergate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Note that an access denial is not an error: the streaming proxy reports
 * denials as a `PlayOutcome::Denied` value so callers can react to the
 * suggested fallback quality without unwinding.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur in the streaming access layer
#[derive(Error, Debug)]
pub enum StreamingError {
    /// Error when a subscription tier string is not recognized
    #[error("Unknown subscription tier: {0}")]
    UnknownTier(String),

    /// Error when a quality label is not recognized
    #[error("Unknown quality label: {0}")]
    UnknownQuality(String),
}

/// Errors that can occur during typography processing
#[derive(Error, Debug)]
pub enum TypographyError {}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(String),

    /// Error from the streaming access layer
    #[error("Streaming error: {0}")]
    Streaming(#[from] StreamingError),

    /// Error from typography processing
    #[error("Typography error: {0}")]
    Typography(#[from] TypographyError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
