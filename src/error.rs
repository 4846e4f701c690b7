//! Error types
//!
//! Transport/server failures from the API, field validation failures from
//! forms, and configuration failures at startup.

use thiserror::Error;

/// Failure talking to the organization API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown to the user: the server's own message when it sent one,
    /// otherwise the caller's fallback for the operation.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// A single field rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All rule violations found in one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message recorded for `field`
    pub fn message_for(&self, field: &str) -> Option<String> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.clone())
    }
}

/// Embedded configuration could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}
