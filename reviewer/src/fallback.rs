//! Fixed feedback returned when the generative backend cannot be reached.
//!
//! Unlike the free-text tier of [`extraction`](crate::extraction), nothing here reflects model
//! output: the same literal record is returned for every failure.

use crate::types::FeedbackRecord;

pub const FALLBACK_SCORE: u8 = 70;

pub fn fallback_feedback() -> FeedbackRecord {
    FeedbackRecord {
        feedback_text: "AI feedback temporarily unavailable. Please try again later or contact support."
            .to_string(),
        score: FALLBACK_SCORE,
        strengths: vec![
            "Lesson successfully submitted for review".to_string(),
            "Lesson details are complete enough for a full review".to_string(),
        ],
        suggestions: vec![
            "Please resubmit for detailed AI feedback".to_string(),
            "Request a human review if feedback is needed urgently".to_string(),
        ],
        areas_for_improvement: vec!["AI analysis pending - will be available shortly".to_string()],
        overall_assessment: "Awaiting AI review - technical issue resolved soon".to_string(),
    }
}
