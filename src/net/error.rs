//! Failure taxonomy for remote calls.
//!
//! ERROR HANDLING
//! ==============
//! None of these are fatal. The catalog loader folds every `NetworkError` into
//! its retry state machine, the chat session turns them into a fallback
//! assistant turn, and the product page shows a generic message. `Display`
//! output is meant for logs, not for users.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ProductId;

/// Transport-level failure of a single remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The request did not complete within the configured budget.
    #[error("request timed out")]
    Timeout,
    /// The backend could not be reached (refused, DNS, CORS, offline).
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// The backend answered with a non-success status.
    #[error("unexpected http status {0}")]
    HttpStatus(u16),
    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The request could not be built, so nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl NetworkError {
    /// Map a response status to `Ok` for 2xx and `HttpStatus` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::HttpStatus`] for any status outside `200..300`.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) { Ok(()) } else { Err(Self::HttpStatus(status)) }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

/// Failure of a single-product lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductLookupError {
    #[error("product {0} not found")]
    NotFound(ProductId),
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl ProductLookupError {
    /// Classify a lookup response status; 404 means the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for 404 and `Network(HttpStatus)` for other non-2xx codes.
    pub fn check_status(id: &ProductId, status: u16) -> Result<(), Self> {
        if status == 404 {
            return Err(Self::NotFound(id.clone()));
        }
        NetworkError::check_status(status).map_err(Self::from)
    }
}
