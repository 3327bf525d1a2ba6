//! Manual feedback strategy: a human reviewer's draft, held to the same record rules as AI feedback.
//!
//! The draft uses the same keys as the model's JSON response and goes through the same
//! normalization, so a stored human review always has a clamped score and bounded lists.

use crate::normalize::normalize;
use crate::traits::feedback::{Feedback, ReviewerType};
use crate::types::{FeedbackRecord, LessonNoteView};
use async_trait::async_trait;
use serde_json::{Map, Value};

pub struct ManualFeedback {
    reviewer: String,
    draft: Map<String, Value>,
}

impl ManualFeedback {
    /// A non-object draft is treated as empty and yields the normalization defaults.
    pub fn new(reviewer: impl Into<String>, draft: Value) -> Self {
        let draft = match draft {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        Self {
            reviewer: reviewer.into(),
            draft,
        }
    }
}

#[async_trait]
impl Feedback for ManualFeedback {
    fn reviewer(&self) -> &str {
        &self.reviewer
    }

    fn reviewer_type(&self) -> ReviewerType {
        ReviewerType::Human
    }

    async fn assemble_feedback(&self, _note: &LessonNoteView) -> FeedbackRecord {
        normalize(&self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DEFAULT_FEEDBACK_TEXT;
    use serde_json::json;

    fn note() -> LessonNoteView {
        LessonNoteView::new("History", "Grade 9", "Term 3", "Mr. Lee", "The Silk Road")
    }

    #[tokio::test]
    async fn test_draft_is_normalized() {
        let feedback = ManualFeedback::new(
            "Head of Department",
            json!({
                "feedback_text": "Well sourced lesson.",
                "score": 130,
                "strengths": "Primary sources\nMap work",
                "suggestions": ["Shorter lecture segment"],
                "areas_for_improvement": ["Exit ticket"],
                "overall_assessment": "Strong"
            }),
        );

        let record = feedback.assemble_feedback(&note()).await;
        assert_eq!(feedback.reviewer(), "Head of Department");
        assert_eq!(feedback.reviewer_type(), ReviewerType::Human);
        assert_eq!(record.score, 100);
        assert_eq!(record.strengths, vec!["Primary sources", "Map work"]);
        assert_eq!(record.overall_assessment, "Strong");
    }

    #[tokio::test]
    async fn test_non_object_draft_yields_defaults() {
        let feedback = ManualFeedback::new("Reviewer", json!("looks fine"));
        let record = feedback.assemble_feedback(&note()).await;
        assert_eq!(record.feedback_text, DEFAULT_FEEDBACK_TEXT);
        assert_eq!(record.score, 70);
    }
}
