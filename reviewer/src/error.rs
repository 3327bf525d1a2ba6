//! Reviewer Error Types
//!
//! This module defines the [`ReviewError`] enum, which covers every failure that can happen
//! below the feedback pipeline boundary: talking to the generative backend and handing
//! finished entries to a store.
//!
//! None of these errors reach callers of [`AiFeedback::generate_feedback`](crate::feedback::ai_feedback::AiFeedback::generate_feedback);
//! the pipeline converts them into its fallback record.
//!
//! # Example
//!
//! ```rust
//! use reviewer::error::ReviewError;
//!
//! fn require_key(key: &str) -> Result<&str, ReviewError> {
//!     if key.is_empty() {
//!         return Err(ReviewError::MissingApiKey);
//!     }
//!     Ok(key)
//! }
//!
//! assert!(require_key("").is_err());
//! ```

use thiserror::Error;

/// Represents all error types that can occur in the reviewer system.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// No API key is configured for the generative backend.
    #[error("generative backend API key is not configured")]
    MissingApiKey,
    /// The request could not be sent or the body could not be read.
    ///
    /// Built through `From`, which strips the request URL from the error.
    #[error("backend request failed: {0}")]
    Http(reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("backend returned status {status}: {body}")]
    Api { status: u16, body: String },
    /// The backend body is not the expected response shape.
    #[error("error decoding backend response: {0}")]
    Decode(String),
    /// The backend answered without any candidate text.
    #[error("backend returned no candidate text")]
    EmptyResponse,
    /// A feedback store rejected an entry.
    #[error("feedback store error: {0}")]
    Store(String),
}

impl From<reqwest::Error> for ReviewError {
    fn from(err: reqwest::Error) -> Self {
        ReviewError::Http(err.without_url())
    }
}
