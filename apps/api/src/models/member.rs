use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A member profile as posted by the front-end.
///
/// Deserialization is lenient: absent or null text becomes empty,
/// non-string scalars are rendered as their JSON text, and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Member {
    /// Opaque; echoed back unchanged in match results.
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    pub nickname: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub introduction: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub resources: Vec<ProfileItem>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub needs: Vec<ProfileItem>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub tags: Vec<String>,
}

/// One resource offered or one need stated by a member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

/// Normalised result of a pairwise match analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub source_id: Value,
    pub target_id: Value,
    pub match_score: i64,
    pub reasons: Vec<String>,
    pub potential_value: String,
}

impl Member {
    /// Builds a member from a raw request value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Renders any JSON value as prompt/response text. Null is empty.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.unwrap_or_default().iter().map(value_to_text).collect())
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<ProfileItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ProfileItem>>::deserialize(deserializer)?.unwrap_or_default())
}
