//! Decoding of structured (JSON) model replies.
//!
//! Models are told to answer with bare JSON but routinely wrap it in a
//! fenced code block, pad arrays with blanks, or mistype scalar fields.
//! The decoders here strip the fences, coerce what they can, and fail
//! with [`AiError::MissingContent`] rather than returning a partially
//! parsed report.

use serde::Serialize;
use serde_json::Value;

use crate::client::AiError;

/// Remove ```json / ``` fence markers anywhere in the reply, then trim.
pub fn strip_code_fence(raw: &str) -> String {
    raw.trim().replace("```json", "").replace("```", "").trim().to_string()
}

/// Coerce a JSON field into a list of non-blank strings. Anything that
/// is not an array yields an empty list; scalar entries are coerced to
/// their string form, and only blank or non-scalar entries are dropped.
fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(coerce_scalar)
        .filter(|s| !s.is_empty())
        .collect()
}

/// A scalar JSON value as a trimmed string; arrays, objects, and null
/// yield `None`.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_object(reply: &str) -> Result<Value, AiError> {
    let cleaned = strip_code_fence(reply);
    serde_json::from_str::<Value>(&cleaned)
        .map_err(|e| AiError::MissingContent(format!("reply is not valid JSON: {e}")))
}

/// Per-dimension scores from a review reply.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewScoring {
    pub plot: Option<f64>,
    pub character: Option<f64>,
    pub style: Option<f64>,
}

/// Decoded review report.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewReport {
    pub strengths: Vec<String>,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub scoring: ReviewScoring,
}

/// Decode a review reply. Missing or mistyped arrays become empty lists;
/// only unparseable JSON is an error.
pub fn decode_review(reply: &str) -> Result<ReviewReport, AiError> {
    let parsed = parse_object(reply)?;

    let scoring = parsed
        .get("scoring")
        .map(|s| ReviewScoring {
            plot: s.get("plot").and_then(Value::as_f64),
            character: s.get("character").and_then(Value::as_f64),
            style: s.get("style").and_then(Value::as_f64),
        })
        .unwrap_or_default();

    Ok(ReviewReport {
        strengths: string_list(parsed.get("strengths")),
        issues: string_list(parsed.get("issues")),
        suggestions: string_list(parsed.get("suggestions")),
        scoring,
    })
}

/// One analyzed character from a deconstruction reply.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterInsight {
    pub name: String,
    pub insight: String,
}

/// Decoded deconstruction report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeconstructReport {
    pub summary: String,
    pub plot_beats: Vec<String>,
    pub characters: Vec<CharacterInsight>,
    pub themes: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Decode a deconstruction reply. The summary is the one field that must
/// be present and non-blank.
pub fn decode_deconstruct(reply: &str) -> Result<DeconstructReport, AiError> {
    let parsed = parse_object(reply)?;

    let summary = parsed
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AiError::MissingContent("deconstruction reply has no summary".into()))?
        .to_string();

    let characters = match parsed.get("characters") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let name = item.get("name")?.as_str()?.trim();
                let insight = item.get("insight").and_then(Value::as_str).unwrap_or("");
                if name.is_empty() {
                    return None;
                }
                Some(CharacterInsight {
                    name: name.to_string(),
                    insight: insight.trim().to_string(),
                })
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(DeconstructReport {
        summary,
        plot_beats: string_list(parsed.get("plotBeats")),
        characters,
        themes: string_list(parsed.get("themes")),
        suggestions: string_list(parsed.get("suggestions")),
    })
}

/// One name suggestion from a naming reply.
#[derive(Debug, Clone, Serialize)]
pub struct NameSuggestion {
    pub name: String,
    pub meaning: String,
}

/// Naming replies are capped at this many suggestions.
const MAX_SUGGESTIONS: usize = 5;

/// Decode a naming reply. Only the first five raw entries are considered;
/// entries without a usable name are then dropped, so an invalid entry
/// shrinks the result rather than pulling in a sixth suggestion.
pub fn decode_naming(reply: &str) -> Result<Vec<NameSuggestion>, AiError> {
    let parsed = parse_object(reply)?;

    let suggestions = match parsed.get("suggestions") {
        Some(Value::Array(items)) => items
            .iter()
            .take(MAX_SUGGESTIONS)
            .filter_map(|item| {
                let name = item.get("name")?.as_str()?.trim();
                let meaning = item.get("meaning").and_then(Value::as_str).unwrap_or("");
                if name.is_empty() {
                    return None;
                }
                Some(NameSuggestion {
                    name: name.to_string(),
                    meaning: meaning.trim().to_string(),
                })
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(suggestions)
}
