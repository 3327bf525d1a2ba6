//! # Reviewer Library
//!
//! This crate produces structured review feedback for teachers' lesson notes, either from a
//! generative text model or from a human reviewer's draft.
//!
//! ## Key Concepts
//! - **AiFeedback**: The review pipeline. Renders a prompt, makes one backend call and turns the
//!   reply into a [`FeedbackRecord`](types::FeedbackRecord). It always returns a valid record.
//! - **Extraction**: An ordered chain (fenced JSON, bare JSON, free text) that finds feedback in
//!   unreliable model output.
//! - **Normalization**: One pass that coerces, clamps and caps every field, whatever the source.
//! - **Fallback**: A fixed record returned when the backend cannot be reached.
//! - **Worker**: Runs a review in the background and hands the entry to a store.
//!
//! ## Example
//!
//! ```rust,no_run
//! use reviewer::feedback::ai_feedback::AiFeedback;
//! use reviewer::types::LessonNoteView;
//!
//! # async fn run() -> Result<(), reviewer::error::ReviewError> {
//! let reviewer = AiFeedback::from_config()?;
//! let note = LessonNoteView::new("Mathematics", "Grade 5", "Term 1", "Test Teacher", "Fractions");
//! let record = reviewer.generate_feedback(&note).await;
//! assert!((1..=100).contains(&record.score));
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod error;
pub mod extraction;
pub mod fallback;
pub mod feedback;
pub mod normalize;
pub mod prompt;
pub mod traits;
pub mod types;
pub mod worker;
