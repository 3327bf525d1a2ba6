//! # Review Worker
//!
//! Runs a reviewer strategy for one lesson note and hands the resulting [`FeedbackEntry`] to a
//! [`FeedbackStore`]. [`spawn_review`] does this on a background tokio task so a request handler
//! can return before the review finishes.

use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::traits::store::FeedbackStore;
use crate::types::LessonNoteView;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Reviews a lesson note and binds the record to it.
pub async fn review_lesson_note<F>(
    feedback: &F,
    lesson_note_id: i64,
    note: &LessonNoteView,
) -> FeedbackEntry
where
    F: Feedback + ?Sized,
{
    let record = feedback.assemble_feedback(note).await;
    FeedbackEntry::new(
        lesson_note_id,
        feedback.reviewer(),
        feedback.reviewer_type(),
        record,
    )
}

/// Reviews and stores in the background.
///
/// A store failure is logged and dropped; it never takes the task down with a panic.
pub fn spawn_review(
    feedback: Arc<dyn Feedback>,
    store: Arc<dyn FeedbackStore>,
    lesson_note_id: i64,
    note: LessonNoteView,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let entry = review_lesson_note(feedback.as_ref(), lesson_note_id, &note).await;
        let score = entry.record.score;
        match store.save(entry).await {
            Ok(()) => tracing::info!(lesson_note_id, score, "feedback stored"),
            Err(e) => tracing::error!(
                lesson_note_id,
                error = %e,
                "background feedback generation failed to store entry"
            ),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewError;
    use crate::feedback::manual_feedback::ManualFeedback;
    use crate::traits::feedback::ReviewerType;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        entries: Mutex<Vec<FeedbackEntry>>,
    }

    #[async_trait]
    impl FeedbackStore for MemoryStore {
        async fn save(&self, entry: FeedbackEntry) -> Result<(), ReviewError> {
            self.entries.lock().await.push(entry);
            Ok(())
        }
    }

    struct RejectingStore;

    #[async_trait]
    impl FeedbackStore for RejectingStore {
        async fn save(&self, _entry: FeedbackEntry) -> Result<(), ReviewError> {
            Err(ReviewError::Store("database is locked".to_string()))
        }
    }

    fn note() -> LessonNoteView {
        LessonNoteView::new("English", "Grade 4", "Term 1", "Mrs. Diaz", "Adjectives")
    }

    #[tokio::test]
    async fn test_review_binds_entry_to_lesson_note() {
        let feedback = ManualFeedback::new("Principal", json!({"score": 88}));
        let entry = review_lesson_note(&feedback, 12, &note()).await;
        assert_eq!(entry.lesson_note_id, 12);
        assert_eq!(entry.reviewer, "Principal");
        assert_eq!(entry.reviewer_type, ReviewerType::Human);
        assert_eq!(entry.record.score, 88);
    }

    #[tokio::test]
    async fn test_spawned_review_is_stored() {
        let store = Arc::new(MemoryStore::default());
        let feedback: Arc<dyn Feedback> =
            Arc::new(ManualFeedback::new("Principal", json!({"score": 64})));

        spawn_review(feedback, store.clone(), 3, note()).await.unwrap();

        let entries = store.entries.lock().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].lesson_note_id, 3);
        assert_eq!(entries[0].record.score, 64);
    }

    #[tokio::test]
    async fn test_store_failure_does_not_panic_the_task() {
        let feedback: Arc<dyn Feedback> = Arc::new(ManualFeedback::new("Principal", json!({})));
        let handle = spawn_review(feedback, Arc::new(RejectingStore), 4, note());
        assert!(handle.await.is_ok());
    }
}
