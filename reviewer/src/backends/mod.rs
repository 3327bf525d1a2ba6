//! # Generative Backends
//!
//! Concrete [`GenerativeBackend`](crate::traits::backend::GenerativeBackend) implementations.
//!
//! - [`gemini`]: Google's Gemini `generateContent` API.

pub mod gemini;
