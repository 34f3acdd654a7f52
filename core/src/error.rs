//! Error types for the deals API client.
//!
//! # Design
//! The client reproduces the page script it stands in for, which never
//! interprets HTTP status codes: every response body is parsed as-is, so the
//! only failures the parse methods can produce are shape failures. An error
//! envelope served with a 4xx (for example the `{"detail": ...}` body the API
//! sends for an empty user list) surfaces as `DeserializationError`, halting
//! that flow just as the script's unhandled rejection did. Transport failures
//! stay with the caller that executes the request.

use std::fmt;

/// Errors returned by `DealsClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
