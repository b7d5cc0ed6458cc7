//! Best-effort coercion of free-text model output into the shapes the front-end expects.
//!
//! Two strategies, chosen by caller:
//! - `coerce_tag_list`: strict JSON array first, then every double-quoted substring.
//! - `extract_json_object`: greedy first-`{`-to-last-`}` span, strict-parsed as an object.
//!
//! Order matters: it decides which malformed outputs succeed and which fail.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::models::member::value_to_text;

/// Score substituted when the model omits or garbles `matchScore`.
pub const DEFAULT_MATCH_SCORE: i64 = 50;

/// Why a response could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// No strategy produced a usable value.
    Unparseable,
    /// No brace-delimited region in the text.
    NoJsonObject,
}

static QUOTED: OnceLock<Regex> = OnceLock::new();

fn quoted_pattern() -> &'static Regex {
    QUOTED.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("static pattern is valid"))
}

/// A strategy yields `Some` on success, `None` to defer to the next one.
type TagStrategy = fn(&str) -> Option<Vec<String>>;

const TAG_STRATEGIES: &[TagStrategy] = &[strict_array, quoted_substrings];

/// Coerces model output into a tag list.
pub fn coerce_tag_list(text: &str) -> Result<Vec<String>, CoerceError> {
    TAG_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
        .ok_or(CoerceError::Unparseable)
}

/// The whole text parses as a JSON array. An empty array is still a success.
fn strict_array(text: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Some(items.iter().map(array_item_text).collect()),
        _ => None,
    }
}

fn array_item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn quoted_substrings(text: &str) -> Option<Vec<String>> {
    let matches: Vec<String> = quoted_pattern()
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect();
    if matches.is_empty() {
        None
    } else {
        Some(matches)
    }
}

/// Extracts and strict-parses the span from the first `{` to the last `}`.
///
/// Greedy: stray braces in surrounding prose widen the span and usually make it fail to parse.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, CoerceError> {
    let start = text.find('{').ok_or(CoerceError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(CoerceError::NoJsonObject)?;
    if end < start {
        return Err(CoerceError::NoJsonObject);
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(CoerceError::Unparseable),
    }
}

/// `matchScore`: integers pass through, floats round, numeric strings parse; else the default.
pub fn score_field(object: &Map<String, Value>) -> i64 {
    match object.get("matchScore") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(DEFAULT_MATCH_SCORE),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
                .unwrap_or(DEFAULT_MATCH_SCORE)
        }
        _ => DEFAULT_MATCH_SCORE,
    }
}

/// `reasons`: an array, each element as text; anything else is empty.
pub fn reasons_field(object: &Map<String, Value>) -> Vec<String> {
    match object.get("reasons") {
        Some(Value::Array(items)) => items.iter().map(value_to_text).collect(),
        _ => Vec::new(),
    }
}

/// `potentialValue`: text, or empty when absent/null.
pub fn potential_value_field(object: &Map<String, Value>) -> String {
    object.get("potentialValue").map(value_to_text).unwrap_or_default()
}
