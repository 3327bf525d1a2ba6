//! Feedback Store Trait
//!
//! Persistence is owned by the caller. The background worker hands finished
//! [`FeedbackEntry`] values to whatever implements [`FeedbackStore`].

use crate::error::ReviewError;
use crate::traits::feedback::FeedbackEntry;
use async_trait::async_trait;

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persists one entry verbatim.
    async fn save(&self, entry: FeedbackEntry) -> Result<(), ReviewError>;
}
