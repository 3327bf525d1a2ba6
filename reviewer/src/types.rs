//! # Types Module
//!
//! This module defines the core data structures used throughout the reviewer system:
//! the read-only lesson note handed in by callers and the structured feedback record
//! handed back.

use serde::{Deserialize, Serialize};

/// Largest accepted score.
pub const MAX_SCORE: u8 = 100;
/// Smallest accepted score.
pub const MIN_SCORE: u8 = 1;
/// Maximum number of items kept in each feedback list.
pub const MAX_LIST_ITEMS: usize = 5;

/// The teacher that authored a lesson note. Only the display name is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherView {
    pub name: String,
}

/// A lesson note as seen by the reviewer.
///
/// Field names mirror the stored lesson note so that a serialized note can be
/// deserialized straight into this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonNoteView {
    pub subject: String,
    pub grade_level: String,
    pub term: String,
    pub teacher: TeacherView,
    pub content: String,
}

impl LessonNoteView {
    pub fn new(
        subject: impl Into<String>,
        grade_level: impl Into<String>,
        term: impl Into<String>,
        teacher_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            grade_level: grade_level.into(),
            term: term.into(),
            teacher: TeacherView {
                name: teacher_name.into(),
            },
            content: content.into(),
        }
    }
}

/// Structured review of a single lesson note.
///
/// Records leaving the reviewer always satisfy:
/// - `score` lies in `MIN_SCORE..=MAX_SCORE`.
/// - every list holds between one and `MAX_LIST_ITEMS` trimmed, non-empty entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub feedback_text: String,
    pub score: u8,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub overall_assessment: String,
}

/// Clamps any integer into the accepted score range.
pub fn clamp_score(score: i64) -> u8 {
    score.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(150), 100);
        assert_eq!(clamp_score(0), 1);
        assert_eq!(clamp_score(-20), 1);
        assert_eq!(clamp_score(42), 42);
        assert_eq!(clamp_score(i64::MAX), 100);
    }

    #[test]
    fn test_lesson_note_deserializes_nested_teacher() {
        let note: LessonNoteView = serde_json::from_str(
            r#"{"subject":"Mathematics","grade_level":"Grade 5","term":"Term 1",
                "teacher":{"name":"Test Teacher"},"content":"Fractions"}"#,
        )
        .unwrap();
        assert_eq!(
            note,
            LessonNoteView::new("Mathematics", "Grade 5", "Term 1", "Test Teacher", "Fractions")
        );
    }
}
