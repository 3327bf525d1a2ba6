//! # Prompt Builder
//!
//! Renders a [`LessonNoteView`] into the review request sent to the generative backend.
//! The template asks for a six-key JSON object inside a fenced block, which is the
//! shape the first extraction tier looks for.

use crate::types::LessonNoteView;

/// Weighted evaluation criteria listed in the prompt. The weights are guidance for
/// the model only; nothing in this crate computes with them.
pub const EVALUATION_CRITERIA: [(&str, u8); 6] = [
    ("Learning objectives clarity and alignment", 20),
    ("Content accuracy and age-appropriateness", 25),
    ("Teaching methodology and pedagogy", 20),
    ("Assessment methods and strategies", 15),
    ("Student engagement and interaction", 10),
    ("Differentiation and inclusivity", 10),
];

/// Builds the review prompt for a lesson note.
///
/// Pure and infallible: the note fields are embedded verbatim.
pub fn build_prompt(note: &LessonNoteView) -> String {
    let criteria = EVALUATION_CRITERIA
        .iter()
        .map(|(label, weight)| format!("- {label} ({weight}%)"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an experienced educational reviewer specializing in lesson plan evaluation.
Please review this lesson note and provide detailed feedback.

**Lesson Details:**
- Subject: {subject}
- Grade Level: {grade_level}
- Term: {term}
- Teacher: {teacher}

**Lesson Content:**
{content}

**Please provide your response in JSON format with the following structure:**

```json
{{
    "feedback_text": "Detailed constructive feedback paragraph explaining strengths and areas for improvement",
    "score": 85,
    "strengths": ["specific strength 1", "specific strength 2", "specific strength 3"],
    "suggestions": ["actionable suggestion 1", "actionable suggestion 2", "actionable suggestion 3"],
    "areas_for_improvement": ["specific area 1", "specific area 2"],
    "overall_assessment": "Brief overall assessment of the lesson plan"
}}
```

**Evaluation Criteria:**
{criteria}

**Guidelines:**
- Score should be between 1-100
- Be constructive and specific in your feedback
- Provide actionable suggestions
- Consider the grade level and subject context
- Focus on educational best practices

Please ensure your response is in valid JSON format.
"#,
        subject = note.subject,
        grade_level = note.grade_level,
        term = note.term,
        teacher = note.teacher.name,
        content = note.content,
    )
}
