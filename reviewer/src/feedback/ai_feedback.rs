//! # AI Feedback Strategy
//!
//! This module provides an implementation of the [`Feedback`] trait that reviews lesson notes with a
//! generative text model.
//!
//! ## Overview
//!
//! - [`AiFeedback::generate_feedback`] renders the review prompt, issues exactly one backend call and
//!   converts the reply into a [`FeedbackRecord`] through the extraction chain.
//! - If the backend call fails for any reason, the fixed [`fallback_feedback`] record is returned.
//! - Extraction and normalization cannot fail, so every call yields a valid record.
//!
//! ## Environment
//!
//! - [`AiFeedback::from_config`] builds a Gemini-backed reviewer from `GEMINI_*` settings.

use crate::backends::gemini::GeminiBackend;
use crate::error::ReviewError;
use crate::extraction::extract_feedback;
use crate::fallback::fallback_feedback;
use crate::prompt::build_prompt;
use crate::traits::backend::{GenerationSettings, GenerativeBackend};
use crate::traits::feedback::{Feedback, ReviewerType};
use crate::types::{FeedbackRecord, LessonNoteView};
use async_trait::async_trait;

/// Reviewer label stored on AI-generated feedback entries.
pub const AI_REVIEWER: &str = "AI Assistant";

/// AI feedback strategy: generates feedback using a generative text backend.
pub struct AiFeedback<B> {
    backend: B,
    generation: GenerationSettings,
}

impl<B: GenerativeBackend> AiFeedback<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            generation: GenerationSettings::default(),
        }
    }

    /// Overrides the sampling parameters sent with every request.
    pub fn with_generation(mut self, generation: GenerationSettings) -> Self {
        self.generation = generation;
        self
    }

    /// Reviews a lesson note. Never fails.
    pub async fn generate_feedback(&self, note: &LessonNoteView) -> FeedbackRecord {
        let prompt = build_prompt(note);
        tracing::debug!(
            subject = %note.subject,
            grade_level = %note.grade_level,
            prompt_chars = prompt.len(),
            "requesting AI feedback"
        );

        match self.backend.generate(&prompt, &self.generation).await {
            Ok(response_text) => {
                let record = extract_feedback(&response_text);
                tracing::info!(
                    subject = %note.subject,
                    score = record.score,
                    "AI feedback generated"
                );
                record
            }
            Err(e) => {
                tracing::warn!(
                    subject = %note.subject,
                    error = %e,
                    "AI feedback unavailable, using fallback feedback"
                );
                fallback_feedback()
            }
        }
    }
}

impl AiFeedback<GeminiBackend> {
    /// Gemini-backed reviewer configured from the environment.
    pub fn from_config() -> Result<Self, ReviewError> {
        Ok(Self::new(GeminiBackend::from_config()?))
    }
}

#[async_trait]
impl<B: GenerativeBackend> Feedback for AiFeedback<B> {
    fn reviewer(&self) -> &str {
        AI_REVIEWER
    }

    fn reviewer_type(&self) -> ReviewerType {
        ReviewerType::Ai
    }

    async fn assemble_feedback(&self, note: &LessonNoteView) -> FeedbackRecord {
        self.generate_feedback(note).await
    }
}
