//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used to implement
//! pluggable reviewer strategies.
//!
//! Each strategy turns a lesson note into a [`FeedbackRecord`] and identifies who produced it, so that an
//! AI-generated review and a human-authored one can be stored side by side.
//!

use crate::types::{FeedbackRecord, LessonNoteView};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distinguishes AI-generated from human-authored feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewerType {
    Ai,
    Human,
}

/// A feedback record bound to the lesson note it reviews, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub lesson_note_id: i64,
    pub reviewer: String,
    pub reviewer_type: ReviewerType,
    #[serde(flatten)]
    pub record: FeedbackRecord,
    pub created_at: DateTime<Utc>,
}

impl FeedbackEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(
        lesson_note_id: i64,
        reviewer: impl Into<String>,
        reviewer_type: ReviewerType,
        record: FeedbackRecord,
    ) -> Self {
        Self {
            lesson_note_id,
            reviewer: reviewer.into(),
            reviewer_type,
            record,
            created_at: Utc::now(),
        }
    }
}

/// A trait for pluggable reviewer strategies.
///
/// Implement this trait to define how a lesson note is reviewed (e.g., by a generative model or from a
/// human reviewer's draft).
///
/// `assemble_feedback` is infallible: every strategy must hand back a record that satisfies the
/// [`FeedbackRecord`] invariants, recovering from its own failures internally.
#[async_trait]
pub trait Feedback: Send + Sync {
    /// Label stored as the entry's reviewer.
    fn reviewer(&self) -> &str;

    fn reviewer_type(&self) -> ReviewerType;

    async fn assemble_feedback(&self, note: &LessonNoteView) -> FeedbackRecord;
}
