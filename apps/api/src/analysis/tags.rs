//! Tag extraction: one member profile in, a flat list of short capability tags out.

use tracing::{debug, warn};

use crate::analysis::coerce::coerce_tag_list;
use crate::analysis::prompts::build_tag_prompt;
use crate::errors::{AppError, FAILED_TO_PARSE};
use crate::llm_client::{SamplingConfig, TextGenerator};
use crate::models::member::Member;

/// Asks the model for 5–10 tags and coerces the reply. The count is requested, not enforced.
pub async fn extract_tags(member: &Member, llm: &dyn TextGenerator) -> Result<Vec<String>, AppError> {
    let prompt = build_tag_prompt(member);
    let text = llm.generate(&prompt, &SamplingConfig::TAGS).await?;
    debug!("Tag reply: {} chars", text.chars().count());

    coerce_tag_list(&text).map_err(|_| {
        warn!("Tag reply had neither a JSON array nor quoted strings");
        AppError::ParseFailure(FAILED_TO_PARSE.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeGenerator;
    use serde_json::json;

    fn sample_member() -> Member {
        Member::from_value(json!({
            "id": "m1",
            "nickname": "老王",
            "location": "深圳",
            "introduction": "AI 创业者",
            "resources": [{"content": "算力"}],
            "needs": [{"content": "融资"}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_valid_array_passes_through() {
        let llm = FakeGenerator::replying(r#"["AI", "创业", "产品"]"#);
        let tags = extract_tags(&sample_member(), &llm).await.unwrap();
        assert_eq!(tags, vec!["AI", "创业", "产品"]);
    }

    #[tokio::test]
    async fn test_uses_tag_sampling_and_profile_prompt() {
        let llm = FakeGenerator::replying(r#"["AI"]"#);
        extract_tags(&sample_member(), &llm).await.unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        let (prompt, sampling) = &calls[0];
        assert_eq!(*sampling, SamplingConfig::TAGS);
        assert!(prompt.contains("昵称: 老王"));
        assert!(prompt.contains("- 算力"));
        assert!(prompt.contains("- 融资"));
    }

    #[tokio::test]
    async fn test_quoted_fallback() {
        let llm = FakeGenerator::replying(r#"Tags: "AI" "创业" "产品""#);
        let tags = extract_tags(&sample_member(), &llm).await.unwrap();
        assert_eq!(tags, vec!["AI", "创业", "产品"]);
    }

    #[tokio::test]
    async fn test_unusable_reply_is_parse_failure() {
        let llm = FakeGenerator::replying("Sorry, no tags today.");
        let err = extract_tags(&sample_member(), &llm).await.unwrap_err();
        assert!(matches!(err, AppError::ParseFailure(ref m) if m == "Failed to parse response"));
    }

    #[tokio::test]
    async fn test_upstream_error_carries_message() {
        let llm = FakeGenerator::failing(429, "Resource has been exhausted");
        let err = extract_tags(&sample_member(), &llm).await.unwrap_err();
        match err {
            AppError::Upstream(msg) => assert!(msg.contains("Resource has been exhausted")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_each_request_calls_upstream() {
        let llm = FakeGenerator::replying(r#"["AI"]"#);
        let member = sample_member();
        extract_tags(&member, &llm).await.unwrap();
        extract_tags(&member, &llm).await.unwrap();
        assert_eq!(llm.calls().len(), 2);
    }
}
