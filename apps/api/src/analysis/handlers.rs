//! Axum route handlers for the member analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::matching::analyze_match;
use crate::analysis::tags::extract_tags;
use crate::errors::AppError;
use crate::models::member::{MatchResult, Member};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

// Members stay raw here so an empty or null member can be told apart from a
// present one before lenient deserialization fills in defaults.

#[derive(Debug, Deserialize)]
pub struct AnalyzeMemberRequest {
    #[serde(default)]
    pub member: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysisRequest {
    #[serde(default)]
    pub source_member: Option<Value>,
    #[serde(default)]
    pub target_member: Option<Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-member
///
/// Returns a bare JSON array of tag strings.
pub async fn handle_analyze_member(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeMemberRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Json(request) = payload?;
    let member = require_member(request.member)?;

    info!("Extracting tags for member {}", member.id);
    let tags = extract_tags(&member, state.llm.as_ref()).await?;
    info!("Extracted {} tags for member {}", tags.len(), member.id);

    Ok(Json(tags))
}

/// POST /api/match-analysis
///
/// Both members are checked before any upstream call is made.
pub async fn handle_match_analysis(
    State(state): State<AppState>,
    payload: Result<Json<MatchAnalysisRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(request) = payload?;
    if is_missing(&request.source_member) || is_missing(&request.target_member) {
        return Err(AppError::MissingData);
    }
    let source = require_member(request.source_member)?;
    let target = require_member(request.target_member)?;

    info!("Analyzing match {} -> {}", source.id, target.id);
    let result = analyze_match(&source, &target, state.llm.as_ref()).await?;
    info!(
        "Match {} -> {} scored {}",
        result.source_id, result.target_id, result.match_score
    );

    Ok(Json(result))
}

/// Absent, null and empty values all count as missing.
fn is_missing(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn require_member(value: Option<Value>) -> Result<Member, AppError> {
    if is_missing(&value) {
        return Err(AppError::MissingData);
    }
    match value {
        Some(value @ Value::Object(_)) => {
            Member::from_value(value).map_err(|e| AppError::InvalidData(e.to_string()))
        }
        _ => Err(AppError::InvalidData(
            "member must be a JSON object".to_string(),
        )),
    }
}
