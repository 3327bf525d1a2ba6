//! Generative Backend Trait
//!
//! This module defines the [`GenerativeBackend`] trait, the single point where the reviewer
//! talks to a text-generation service, together with the sampling parameters sent on each call.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use reviewer::error::ReviewError;
//! use reviewer::traits::backend::{GenerationSettings, GenerativeBackend};
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl GenerativeBackend for Echo {
//!     async fn generate(
//!         &self,
//!         prompt: &str,
//!         _settings: &GenerationSettings,
//!     ) -> Result<String, ReviewError> {
//!         Ok(prompt.to_string())
//!     }
//! }
//! ```

use crate::error::ReviewError;
use async_trait::async_trait;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1500;

/// Sampling parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling threshold.
    pub top_p: f32,
    /// Number of top candidates considered at each step.
    pub top_k: u32,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// A text-generation service.
///
/// Implementations issue at most one remote request per call and never retry.
/// Any failure is reported as a [`ReviewError`]; the caller decides how to recover.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Sends `prompt` with `settings` and returns the raw generated text.
    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, ReviewError>;
}
