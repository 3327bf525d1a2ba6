//! # Response Extraction
//!
//! Turns raw model output into a [`FeedbackRecord`]. The structured extractors are tried in
//! order and the first one that recognises its shape decides the outcome:
//!
//! 1. [`fenced_json`]: an object inside a ```` ```json ```` block.
//! 2. [`bare_json`]: the first brace-delimited span, only when no fenced block exists.
//! 3. [`free_text`]: heuristics over prose, used when neither tier yields an object.
//!
//! Whatever tier produced the candidate, [`normalize`](crate::normalize::normalize) runs last.
//! Nothing in this module can fail.

pub mod bare_json;
pub mod fenced_json;
pub mod free_text;

use crate::normalize::normalize;
use crate::traits::extractor::{Extraction, Extractor};
use crate::types::FeedbackRecord;
use bare_json::BareJsonExtractor;
use fenced_json::FencedJsonExtractor;
use serde_json::{Map, Value};

/// Structured extractors, highest priority first.
pub static STRUCTURED_EXTRACTORS: &[&dyn Extractor] = &[&FencedJsonExtractor, &BareJsonExtractor];

/// What the extraction chain found in a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// A JSON object produced by one of the structured extractors.
    Structured(Map<String, Value>),
    /// No usable JSON; the raw response is kept for free-text parsing.
    RawText(String),
}

impl Candidate {
    /// Resolves the candidate into loosely typed feedback fields.
    pub fn into_fields(self) -> Map<String, Value> {
        match self {
            Candidate::Structured(fields) => fields,
            Candidate::RawText(text) => free_text::parse(&text),
        }
    }
}

/// Runs `extractors` in order over `text`.
///
/// A malformed match stops the chain; later extractors are not consulted.
pub fn extract_with(extractors: &[&dyn Extractor], text: &str) -> Candidate {
    for extractor in extractors {
        match extractor.extract(text) {
            Extraction::NoMatch => continue,
            Extraction::Parsed(fields) => {
                tracing::debug!(extractor = extractor.name(), "structured feedback found");
                return Candidate::Structured(fields);
            }
            Extraction::Malformed => {
                tracing::debug!(
                    extractor = extractor.name(),
                    "malformed structured feedback, parsing as free text"
                );
                return Candidate::RawText(text.to_string());
            }
        }
    }
    tracing::debug!("no structured feedback found, parsing as free text");
    Candidate::RawText(text.to_string())
}

/// Runs the default extractor chain.
pub fn extract_candidate(text: &str) -> Candidate {
    extract_with(STRUCTURED_EXTRACTORS, text)
}

/// Converts raw model output into a normalized feedback record.
pub fn extract_feedback(text: &str) -> FeedbackRecord {
    normalize(&extract_candidate(text).into_fields())
}

/// Parses `span` as a JSON object. Anything else, including other JSON values, is malformed.
fn parse_object(span: &str) -> Extraction {
    match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(fields)) => Extraction::Parsed(fields),
        _ => Extraction::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DEFAULT_SUGGESTIONS;
    use serde_json::json;

    #[test]
    fn test_fenced_block_wins_over_earlier_bare_object() {
        let text = "Draft {\"score\": 10}\n```json\n{\"score\": 90}\n```";
        match extract_candidate(text) {
            Candidate::Structured(fields) => assert_eq!(fields["score"], json!(90)),
            other => panic!("expected structured candidate, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_fence_skips_bare_tier() {
        let text = "```json\n{\"score\": }\n```\n{\"score\": 90}";
        assert_eq!(
            extract_candidate(text),
            Candidate::RawText(text.to_string())
        );
    }

    #[test]
    fn test_plain_prose_is_raw_text() {
        let text = "Score: 42\nStrengths:\n- Clear";
        assert_eq!(
            extract_candidate(text),
            Candidate::RawText(text.to_string())
        );
    }

    #[test]
    fn test_extract_feedback_clamps_score_and_fills_empty_lists() {
        let text = "```json\n{\"feedback_text\":\"Good job\",\"score\":150,\"strengths\":[\"A\",\"B\"],\"suggestions\":[],\"areas_for_improvement\":[\"X\"],\"overall_assessment\":\"Nice\"}\n```";
        let record = extract_feedback(text);
        assert_eq!(record.feedback_text, "Good job");
        assert_eq!(record.score, 100);
        assert_eq!(record.strengths, vec!["A", "B"]);
        assert_eq!(record.suggestions, DEFAULT_SUGGESTIONS.to_vec());
        assert_eq!(record.areas_for_improvement, vec!["X"]);
        assert_eq!(record.overall_assessment, "Nice");
    }

    #[test]
    fn test_custom_chain_order_is_respected() {
        let text = "Draft {\"score\": 10}\n```json\n{\"score\": 90}\n```";
        let bare_first: &[&dyn Extractor] = &[&BareJsonExtractor, &FencedJsonExtractor];
        match extract_with(bare_first, text) {
            Candidate::Structured(fields) => assert_eq!(fields["score"], json!(10)),
            other => panic!("expected structured candidate, got {other:?}"),
        }
    }
}
