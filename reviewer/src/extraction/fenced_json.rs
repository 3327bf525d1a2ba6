//! First extraction tier: a JSON object inside a ```` ```json ```` fenced block.

use super::parse_object;
use crate::traits::extractor::{Extraction, Extractor};
use regex::Regex;
use std::sync::LazyLock;

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("fenced json pattern is valid")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct FencedJsonExtractor;

impl Extractor for FencedJsonExtractor {
    fn name(&self) -> &'static str {
        "fenced_json"
    }

    fn extract(&self, text: &str) -> Extraction {
        match FENCED_JSON.captures(text).and_then(|c| c.get(1)) {
            Some(body) => parse_object(body.as_str()),
            None => Extraction::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_fenced_object_with_surrounding_prose() {
        let text = "Here is my review:\n```json\n{\"score\": 88, \"strengths\": [\"Clear\"]}\n```\nThanks!";
        match FencedJsonExtractor.extract(text) {
            Extraction::Parsed(map) => {
                assert_eq!(map["score"], json!(88));
                assert_eq!(map["strengths"], json!(["Clear"]));
            }
            other => panic!("expected parsed object, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_object_inside_fence_is_kept_whole() {
        let text = "```json\n{\"score\": 60, \"meta\": {\"model\": \"x\"}}\n```";
        match FencedJsonExtractor.extract(text) {
            Extraction::Parsed(map) => assert_eq!(map["meta"]["model"], json!("x")),
            other => panic!("expected parsed object, got {other:?}"),
        }
    }

    #[test]
    fn test_unlabelled_fence_does_not_match() {
        let text = "```\n{\"score\": 88}\n```";
        assert_eq!(FencedJsonExtractor.extract(text), Extraction::NoMatch);
    }

    #[test]
    fn test_broken_json_in_fence_is_malformed() {
        let text = "```json\n{\"score\": 88,, }\n```";
        assert_eq!(FencedJsonExtractor.extract(text), Extraction::Malformed);
    }
}
