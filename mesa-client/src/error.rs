//! Client error types

use shared::error::AppError;
use shared::soap::SoapError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a structured error
    #[error("API error {}: {}", .0.code, .0.message)]
    Api(AppError),

    /// Server answered with a SOAP fault
    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },

    /// SOAP envelope could not be decoded
    #[error("SOAP error: {0}")]
    Soap(#[from] SoapError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the request failed before a connection was established
    ///
    /// Only then is it certain the server never saw the request.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }

    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
