//! Error taxonomy for remote list views.
//!
//! Three failure classes, none fatal:
//! - [`FetchError`]: a read failed; the view shows an error panel with
//!   the underlying message and a user-initiated retry.
//! - [`MutationError`]: a write failed; surfaced as a toast, local
//!   state unchanged.
//! - [`ValidationError`]: the payload failed its schema check; surfaced
//!   inline per field, the mutation is never dispatched.
//!
//! An empty result set is not an error anywhere in this crate: a 404 on
//! a list endpoint deserializes to zero items.
//!
//! Errors carry stringified sources rather than the underlying
//! `reqwest::Error` so they stay `Clone` and can live inside messages
//! and view state.

use thiserror::Error;

/// A failed read from the remote collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },
}

/// A failed write to the remote collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MutationError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the write.
    #[error("server returned {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },
}

/// A single rejected field of a draft payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The payload field that failed validation.
    pub field: &'static str,
    /// Human-readable message for inline display.
    pub message: String,
}

/// Schema rejection of a draft payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed for {} field(s)", errors.len())]
pub struct ValidationError {
    /// The rejected fields, in declaration order.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Builds a validation error from `(field, message)` pairs.
    pub fn new(errors: Vec<(&'static str, String)>) -> Self {
        Self {
            errors: errors
                .into_iter()
                .map(|(field, message)| FieldError { field, message })
                .collect(),
        }
    }

    /// The message for one field, if that field was rejected.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
