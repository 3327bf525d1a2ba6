//! # Reviewer Strategies Module
//!
//! This module provides pluggable reviewer strategies.
//! Each strategy implements the [`Feedback`](crate::traits::feedback::Feedback) trait and produces a
//! normalized [`FeedbackRecord`](crate::types::FeedbackRecord) for a lesson note.
//!
//! ## Available Strategies
//!
//! - [`ai_feedback`]: Uses a generative text model to review the lesson note.
//! - [`manual_feedback`]: Wraps a human reviewer's draft.

pub mod ai_feedback;
pub mod manual_feedback;
