//! Error types and handling for the `WanderMate` application

use thiserror::Error;

/// Main error type for the `WanderMate` application
#[derive(Error, Debug)]
pub enum WanderMateError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Destination could not be resolved to coordinates
    #[error("Geocoding error: {message}")]
    Geocoding { message: String },

    /// Exchange-rate lookup errors
    #[error("Currency conversion error: {message}")]
    Currency { message: String },

    /// Travel-tips completion errors
    #[error("Travel tips error: {message}")]
    Tips { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WanderMateError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new geocoding error
    pub fn geocoding<S: Into<String>>(message: S) -> Self {
        Self::Geocoding {
            message: message.into(),
        }
    }

    /// Create a new currency error
    pub fn currency<S: Into<String>>(message: S) -> Self {
        Self::Currency {
            message: message.into(),
        }
    }

    /// Create a new tips error
    pub fn tips<S: Into<String>>(message: S) -> Self {
        Self::Tips {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WanderMateError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            WanderMateError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WanderMateError::Geocoding { .. } => {
                "Could not locate the destination on the map.".to_string()
            }
            WanderMateError::Currency { .. } => {
                "Currency conversion failed. Using default 1:1 rate.".to_string()
            }
            WanderMateError::Tips { .. } => {
                "Travel tips are unavailable right now. Please check your API key or network connection."
                    .to_string()
            }
            WanderMateError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
