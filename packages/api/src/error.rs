//! Error type for the backend facade.

use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong between a UI call site and the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Backend URL missing or blank, or a reference used with the wrong call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The facade was used before the backend client was initialized.
    #[error("Backend client used before initialization")]
    NotInitialized,

    /// The request never produced a backend answer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend ran the function and reported an error.
    #[error("Backend error: {message}")]
    Backend {
        message: String,
        data: Option<Value>,
    },

    /// Arguments could not be encoded or the result did not match the expected type.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Check if this error means the client was never set up.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::NotInitialized)
    }
}
