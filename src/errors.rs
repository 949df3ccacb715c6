//! Error handling for the casino25 API client
//!
//! Validation errors are raised before anything reaches the transport.
//! Transport errors keep their original source so callers see exactly what
//! reqwest or the remote server reported.

use crate::param_validator::ParamType;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum Casino25Error {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Required parameter \"{field}\" is not specified")]
    MissingParameter { field: String },

    #[error("Specified parameter \"{field}\" must be {expected}")]
    InvalidType { field: String, expected: ParamType },

    #[error("Specified parameter \"{field}\" must take one of these values ({})", .allowed.join(", "))]
    InvalidValue { field: String, allowed: Vec<String> },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    #[error("Network operation failed: {operation}")]
    Network {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed {method} response")]
    MalformedResponse {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected response: {message}")]
    InvalidResponse { message: String },
}

/// Type alias for Result with Casino25Error
pub type Casino25Result<T> = Result<T, Casino25Error>;

impl Casino25Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter(field: impl Into<String>) -> Self {
        Self::MissingParameter {
            field: field.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(field: impl Into<String>, expected: ParamType) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, allowed: &[&str]) -> Self {
        Self::InvalidValue {
            field: field.into(),
            allowed: allowed.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Create an invalid parameters error
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(operation: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            operation: operation.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Create an error for a response body that is not a JSON-RPC envelope
    pub fn malformed_response(method: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedResponse {
            method: method.into(),
            source,
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// True for errors raised by parameter validation, before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::InvalidType { .. }
                | Self::InvalidValue { .. }
                | Self::InvalidParams { .. }
        )
    }

    /// True for errors raised by the transport or the remote server.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. }
                | Self::Rpc { .. }
                | Self::MalformedResponse { .. }
                | Self::InvalidResponse { .. }
        )
    }

    /// Name of the parameter a validation error refers to.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { field }
            | Self::InvalidType { field, .. }
            | Self::InvalidValue { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for Casino25Error {
    fn from(err: serde_json::Error) -> Self {
        Casino25Error::serialization("json_operation", err)
    }
}

/// Convert from reqwest errors
impl From<reqwest::Error> for Casino25Error {
    fn from(err: reqwest::Error) -> Self {
        Casino25Error::network("http_request", err)
    }
}
