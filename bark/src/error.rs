//! # Bark Error Types
//!
//! Centralized error definitions for the bark crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use std::fmt;
use thiserror::Error;

/// Unified error type for bark operations.
///
/// Logging itself never fails; errors only come out of option loading,
/// subscriber installation, and the explicit constructors below.
#[derive(Error, Debug)]
pub enum BarkError {
    #[error("{message}")]
    Message { message: String },

    #[error("Failed to load options: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

impl BarkError {
    /// Text carried by a `Message` error, or the display text otherwise.
    pub fn message(&self) -> String {
        match self {
            BarkError::Message { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Creates a new error with the provided message.
pub fn new_error(message: impl Into<String>) -> BarkError {
    BarkError::Message {
        message: message.into(),
    }
}

/// Creates a new error from format arguments. See also [`new_error!`](crate::new_error!).
pub fn new_error_fmt(args: fmt::Arguments<'_>) -> BarkError {
    BarkError::Message {
        message: args.to_string(),
    }
}
