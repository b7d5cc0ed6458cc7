//! Match analysis: two member profiles in, a normalised `MatchResult` out.
//!
//! The ids in the result always come from the request members, never from the model.

use tracing::{debug, warn};

use crate::analysis::coerce::{
    extract_json_object, potential_value_field, reasons_field, score_field, CoerceError,
};
use crate::analysis::prompts::build_match_prompt;
use crate::errors::{AppError, FAILED_TO_PARSE, NO_JSON_FOUND};
use crate::llm_client::{SamplingConfig, TextGenerator};
use crate::models::member::{Member, MatchResult};

pub async fn analyze_match(
    source: &Member,
    target: &Member,
    llm: &dyn TextGenerator,
) -> Result<MatchResult, AppError> {
    let prompt = build_match_prompt(source, target);
    let text = llm.generate(&prompt, &SamplingConfig::MATCH).await?;
    debug!("Match reply: {} chars", text.chars().count());

    let object = extract_json_object(&text).map_err(|e| {
        warn!("Match reply not usable: {e:?}");
        match e {
            CoerceError::NoJsonObject => AppError::ParseFailure(NO_JSON_FOUND.to_string()),
            CoerceError::Unparseable => AppError::ParseFailure(FAILED_TO_PARSE.to_string()),
        }
    })?;

    Ok(MatchResult {
        source_id: source.id.clone(),
        target_id: target.id.clone(),
        match_score: score_field(&object),
        reasons: reasons_field(&object),
        potential_value: potential_value_field(&object),
    })
}
