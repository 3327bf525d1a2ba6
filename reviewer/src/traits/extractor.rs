//! Extractor Trait
//!
//! An [`Extractor`] looks for one shape of structured data inside raw model output.
//! Extractors are tried in order by [`crate::extraction::extract_candidate`]; the
//! [`Extraction`] they return tells the chain whether to stop or keep looking.

use serde_json::{Map, Value};

/// Outcome of one extraction attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The shape this extractor looks for is not present. Try the next extractor.
    NoMatch,
    /// The shape is present and parsed into an object.
    Parsed(Map<String, Value>),
    /// The shape is present but does not parse into an object. Stop looking for
    /// structured data and fall back to free text.
    Malformed,
}

/// A single tier in the structured-data extraction chain.
pub trait Extractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Inspects `text` for this extractor's shape.
    fn extract(&self, text: &str) -> Extraction;
}
