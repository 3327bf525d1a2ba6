//! Last extraction tier: heuristics over plain prose.
//!
//! Used when the model output carries no parseable JSON object. The result is shaped
//! like the structured response so it goes through the same normalization.
//!
//! - The score is the first integer following the word "score".
//! - Each list comes from the bulleted or numbered lines under its heading
//!   ("Strengths", "Suggestions", "Areas for Improvement"), up to the next heading.
//! - `feedback_text` is the head of the raw response.

use crate::types::{MAX_LIST_ITEMS, clamp_score};
use regex::Regex;
use serde_json::{Map, Value, json};
use std::sync::LazyLock;

pub const DEFAULT_FREE_TEXT_SCORE: i64 = 75;
/// Number of characters of the raw response kept as `feedback_text`.
pub const FEEDBACK_TEXT_LIMIT: usize = 500;
pub const DEFAULT_STRENGTH: &str = "Lesson structure is clear";
pub const DEFAULT_SUGGESTION: &str = "Consider adding more interactive elements";
pub const DEFAULT_AREA_FOR_IMPROVEMENT: &str = "Assessment methods could be enhanced";
pub const DEFAULT_FREE_TEXT_ASSESSMENT: &str = "Good lesson plan with room for improvement";

static SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)score[:\s]+(\d+)").expect("score pattern is valid"));

/// A label at line start, after optional markdown `#`s and an optional `**` bold opener.
/// A single `*` is a bullet, not decoration.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:#+[ \t]*)?(?:\*\*[ \t]*)?(strengths|suggestions|areas[ _]for[ _]improvement)\b[^\n]*$",
    )
    .expect("heading pattern is valid")
});

/// The marker must be followed by whitespace, so rules, bold text and decimals are not items.
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[•*-]|\d+\.)\s+(.*)$").expect("list item pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Strengths,
    Suggestions,
    AreasForImprovement,
}

impl Section {
    fn from_label(label: &str) -> Self {
        let label = label.to_ascii_lowercase();
        if label.starts_with("strengths") {
            Section::Strengths
        } else if label.starts_with("suggestions") {
            Section::Suggestions
        } else {
            Section::AreasForImprovement
        }
    }

    fn key(self) -> &'static str {
        match self {
            Section::Strengths => "strengths",
            Section::Suggestions => "suggestions",
            Section::AreasForImprovement => "areas_for_improvement",
        }
    }

    fn default_item(self) -> &'static str {
        match self {
            Section::Strengths => DEFAULT_STRENGTH,
            Section::Suggestions => DEFAULT_SUGGESTION,
            Section::AreasForImprovement => DEFAULT_AREA_FOR_IMPROVEMENT,
        }
    }
}

/// Parses free text into a loosely structured feedback object.
pub fn parse(text: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("feedback_text".into(), json!(head(text, FEEDBACK_TEXT_LIMIT)));
    fields.insert("score".into(), json!(extract_score(text)));

    let sections = section_bodies(text);
    for section in [
        Section::Strengths,
        Section::Suggestions,
        Section::AreasForImprovement,
    ] {
        let items = sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, body)| list_items(body))
            .filter(|items| !items.is_empty())
            .unwrap_or_else(|| vec![section.default_item().to_string()]);
        fields.insert(section.key().into(), json!(items));
    }

    fields.insert(
        "overall_assessment".into(),
        json!(DEFAULT_FREE_TEXT_ASSESSMENT),
    );
    fields
}

fn head(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// First integer after "score", clamped; the default when absent.
fn extract_score(text: &str) -> u8 {
    let score = SCORE
        .captures(text)
        .and_then(|c| c.get(1))
        // Digits that overflow i64 are still "very large".
        .map(|digits| digits.as_str().parse::<i64>().unwrap_or(i64::MAX))
        .unwrap_or(DEFAULT_FREE_TEXT_SCORE);
    clamp_score(score)
}

/// Text under each heading, up to the next heading or the end of the input.
fn section_bodies(text: &str) -> Vec<(Section, &str)> {
    let headings: Vec<(Section, usize, usize)> = HEADING
        .captures_iter(text)
        .filter_map(|c| {
            let whole = c.get(0)?;
            let label = c.get(1)?;
            Some((Section::from_label(label.as_str()), whole.start(), whole.end()))
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(i, (section, _, end))| {
            let stop = headings
                .get(i + 1)
                .map(|(_, start, _)| *start)
                .unwrap_or(text.len());
            (*section, &text[*end..stop])
        })
        .collect()
}

/// Bulleted or numbered lines, markers stripped, capped at `MAX_LIST_ITEMS`.
fn list_items(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| {
            LIST_ITEM
                .captures(line.trim())
                .and_then(|c| c.get(1))
                .map(|item| item.as_str().trim().to_string())
        })
        .filter(|item| !item.is_empty())
        .take(MAX_LIST_ITEMS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(value: &Value) -> Vec<String> {
        serde_json::from_value(value.clone()).unwrap()
    }

    #[test]
    fn test_score_is_first_integer_after_label() {
        assert_eq!(extract_score("Overall SCORE: 42, later score 90"), 42);
        assert_eq!(extract_score("score 7"), 7);
        assert_eq!(extract_score("no number here"), 75);
        assert_eq!(extract_score("Score: 250"), 100);
        assert_eq!(extract_score("Score: 0"), 1);
        assert_eq!(extract_score("Score: 99999999999999999999999"), 100);
    }

    #[test]
    fn test_sections_read_bullets_until_next_heading() {
        let text = "\
Score: 80
Strengths:
- Clear objectives
• Good pacing
Suggestions:
1. Add group work
2. Use visuals
Areas for Improvement:
* Assessment rubric
";
        let fields = parse(text);
        assert_eq!(fields["score"], json!(80));
        assert_eq!(
            strings(&fields["strengths"]),
            vec!["Clear objectives", "Good pacing"]
        );
        assert_eq!(
            strings(&fields["suggestions"]),
            vec!["Add group work", "Use visuals"]
        );
        assert_eq!(
            strings(&fields["areas_for_improvement"]),
            vec!["Assessment rubric"]
        );
    }

    #[test]
    fn test_markdown_headings_are_recognised() {
        let text = "## Strengths\n- One\n**Areas_for_improvement:**\n- Two\n";
        let fields = parse(text);
        assert_eq!(strings(&fields["strengths"]), vec!["One"]);
        assert_eq!(strings(&fields["areas_for_improvement"]), vec!["Two"]);
        assert_eq!(strings(&fields["suggestions"]), vec![DEFAULT_SUGGESTION]);
    }

    #[test]
    fn test_bullets_starting_with_a_label_stay_in_their_section() {
        let text = "\
Strengths:
* Strengths-based grouping
* Clear goals
Suggestions:
* Suggestions box at the end
- Add visuals
";
        let fields = parse(text);
        assert_eq!(
            strings(&fields["strengths"]),
            vec!["Strengths-based grouping", "Clear goals"]
        );
        assert_eq!(
            strings(&fields["suggestions"]),
            vec!["Suggestions box at the end", "Add visuals"]
        );
    }

    #[test]
    fn test_bold_headings_are_recognised() {
        let text = "**Strengths:**\n- Warm-up quiz\n**Suggestions**\n- Shorter intro\n";
        let fields = parse(text);
        assert_eq!(strings(&fields["strengths"]), vec!["Warm-up quiz"]);
        assert_eq!(strings(&fields["suggestions"]), vec!["Shorter intro"]);
    }

    #[test]
    fn test_marker_needs_trailing_whitespace() {
        let text = "\
Strengths:
---
**Bold claim**
1.5 hours of practice
-Tight
- Real item
2. Another item
";
        let fields = parse(text);
        assert_eq!(
            strings(&fields["strengths"]),
            vec!["Real item", "Another item"]
        );
    }

    #[test]
    fn test_section_without_bullets_uses_default() {
        let text = "Strengths: the lesson flows well.\nIt is engaging.";
        let fields = parse(text);
        assert_eq!(strings(&fields["strengths"]), vec![DEFAULT_STRENGTH]);
    }

    #[test]
    fn test_sections_are_capped() {
        let bullets: String = (1..=8).map(|i| format!("- item {i}\n")).collect();
        let fields = parse(&format!("Strengths:\n{bullets}"));
        assert_eq!(
            strings(&fields["strengths"]),
            vec!["item 1", "item 2", "item 3", "item 4", "item 5"]
        );
    }

    #[test]
    fn test_feedback_text_is_truncated_by_characters() {
        let text = "é".repeat(600);
        let fields = parse(&text);
        let feedback = fields["feedback_text"].as_str().unwrap();
        assert_eq!(feedback.chars().count(), FEEDBACK_TEXT_LIMIT);
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let fields = parse("");
        assert_eq!(fields["feedback_text"], json!(""));
        assert_eq!(fields["score"], json!(75));
        assert_eq!(strings(&fields["strengths"]), vec![DEFAULT_STRENGTH]);
        assert_eq!(strings(&fields["suggestions"]), vec![DEFAULT_SUGGESTION]);
        assert_eq!(
            strings(&fields["areas_for_improvement"]),
            vec![DEFAULT_AREA_FOR_IMPROVEMENT]
        );
        assert_eq!(
            fields["overall_assessment"],
            json!(DEFAULT_FREE_TEXT_ASSESSMENT)
        );
    }
}
