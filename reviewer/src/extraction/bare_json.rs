//! Second extraction tier: the first brace-delimited span anywhere in the text.
//!
//! The span ends at the first closing brace after the opening one, so an object
//! with nested objects is cut short and reported as malformed.

use super::parse_object;
use crate::traits::extractor::{Extraction, Extractor};
use regex::Regex;
use std::sync::LazyLock;

static BARE_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*?\}").expect("bare json pattern is valid"));

#[derive(Debug, Default, Clone, Copy)]
pub struct BareJsonExtractor;

impl Extractor for BareJsonExtractor {
    fn name(&self) -> &'static str {
        "bare_json"
    }

    fn extract(&self, text: &str) -> Extraction {
        match BARE_JSON.find(text) {
            Some(span) => parse_object(span.as_str()),
            None => Extraction::NoMatch,
        }
    }
}
