//! # Normalization
//!
//! Coerces loosely typed feedback fields, whatever produced them, into a [`FeedbackRecord`]
//! that satisfies the record invariants. Missing or mistyped values are replaced with
//! defaults, scores are clamped and lists are trimmed and capped.
//!
//! Normalization is total and idempotent: normalizing the fields of an already normalized
//! record returns the same record.

use crate::types::{FeedbackRecord, MAX_LIST_ITEMS, clamp_score};
use serde_json::{Map, Value, json};

pub const DEFAULT_FEEDBACK_TEXT: &str = "No feedback provided";
pub const DEFAULT_SCORE: i64 = 70;
pub const DEFAULT_OVERALL_ASSESSMENT: &str = "Assessment not provided";
pub const DEFAULT_STRENGTHS: [&str; 1] = ["Lesson note was submitted with complete details"];
pub const DEFAULT_SUGGESTIONS: [&str; 2] = [
    "Add more interactive activities to engage students",
    "Include clear success criteria for each learning objective",
];
pub const DEFAULT_AREAS_FOR_IMPROVEMENT: [&str; 1] =
    ["Assessment strategies could be described in more detail"];

/// Builds a record from loosely typed fields.
///
/// Whitespace-only text counts as absent. An exactly empty `feedback_text` is kept: it is
/// what an empty model reply produces.
pub fn normalize(fields: &Map<String, Value>) -> FeedbackRecord {
    FeedbackRecord {
        feedback_text: coerce_text(fields.get("feedback_text"))
            .filter(|text| text.is_empty() || !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEEDBACK_TEXT.to_string()),
        score: clamp_score(coerce_score(fields.get("score")).unwrap_or(DEFAULT_SCORE)),
        strengths: or_defaults(coerce_list(fields.get("strengths")), &DEFAULT_STRENGTHS),
        suggestions: or_defaults(coerce_list(fields.get("suggestions")), &DEFAULT_SUGGESTIONS),
        areas_for_improvement: or_defaults(
            coerce_list(fields.get("areas_for_improvement")),
            &DEFAULT_AREAS_FOR_IMPROVEMENT,
        ),
        overall_assessment: coerce_text(fields.get("overall_assessment"))
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_OVERALL_ASSESSMENT.to_string()),
    }
}

/// Re-normalizes an existing record.
pub fn normalize_record(record: &FeedbackRecord) -> FeedbackRecord {
    normalize(&to_fields(record))
}

/// The record as loosely typed fields, keyed like the model's JSON response.
pub fn to_fields(record: &FeedbackRecord) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("feedback_text".into(), json!(record.feedback_text));
    fields.insert("score".into(), json!(record.score));
    fields.insert("strengths".into(), json!(record.strengths));
    fields.insert("suggestions".into(), json!(record.suggestions));
    fields.insert(
        "areas_for_improvement".into(),
        json!(record.areas_for_improvement),
    );
    fields.insert("overall_assessment".into(), json!(record.overall_assessment));
    fields
}

/// Strings pass through; other scalars and containers are rendered as text.
/// `None` for a missing key or an explicit null.
fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Integers, floats (truncated) and numeric strings. Booleans are not scores.
fn coerce_score(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().and_then(float_score)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_score))
        }
        _ => None,
    }
}

fn float_score(f: f64) -> Option<i64> {
    // `as` saturates at the i64 bounds.
    f.is_finite().then(|| f.trunc() as i64)
}

/// A sequence keeps its non-blank entries; a single string is split into lines.
/// Anything else is an empty list.
fn coerce_list(value: Option<&Value>) -> Vec<String> {
    let items: Vec<String> = match value {
        Some(Value::Array(entries)) => entries.iter().filter_map(list_entry).collect(),
        Some(Value::String(s)) => s.lines().map(str::to_string).collect(),
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .take(MAX_LIST_ITEMS)
        .collect()
}

fn list_entry(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn or_defaults(items: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if items.is_empty() {
        defaults.iter().map(|d| d.to_string()).collect()
    } else {
        items
    }
}
