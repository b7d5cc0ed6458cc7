// Prompt templates for member analysis.
// Both prompts are Chinese-language and carry a literal example for format priming.

use crate::models::member::{Member, ProfileItem};

/// Rendered when a member has no tags.
pub const NO_TAGS_PLACEHOLDER: &str = "无";

/// Tag extraction prompt. Replace: {profile}
pub const TAG_PROMPT_TEMPLATE: &str = r#"请分析以下成员信息，提取关键能力和特点标签：

{profile}

请提取5-10个关键能力和特点标签，每个标签不超过4个字，使用JSON数组格式返回。
示例: ["AI", "创业", "社群", "金融", "产品"]"#;

/// Pairwise match prompt. Replace: {source_profile}, {target_profile}
pub const MATCH_PROMPT_TEMPLATE: &str = r#"请分析以下两位成员的信息，找出他们之间可能的匹配点和协作机会：

成员A:
{source_profile}

成员B:
{target_profile}

请以JSON格式返回以下内容：
1. 匹配评分(0-100)
2. 匹配理由(数组形式，至少3条)
3. 潜在合作价值建议(一段话)

格式如下:
{
  "matchScore": 85,
  "reasons": ["理由1", "理由2", "理由3"],
  "potentialValue": "潜在合作价值建议"
}"#;

pub fn build_tag_prompt(member: &Member) -> String {
    TAG_PROMPT_TEMPLATE.replace("{profile}", &render_profile(member))
}

pub fn build_match_prompt(source: &Member, target: &Member) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{source_profile}", &render_profile_with_tags(source))
        .replace("{target_profile}", &render_profile_with_tags(target))
}

/// Profile block shared by both prompts. An empty list leaves a blank line.
fn render_profile(member: &Member) -> String {
    format!(
        "昵称: {}\n地点: {}\n自我介绍: {}\n资源:\n{}\n需求:\n{}",
        member.nickname,
        member.location,
        member.introduction,
        render_items(&member.resources),
        render_items(&member.needs),
    )
}

fn render_profile_with_tags(member: &Member) -> String {
    format!("{}\n标签: {}", render_profile(member), render_tags(&member.tags))
}

fn render_items(items: &[ProfileItem]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tags(tags: &[String]) -> String {
    let joined = tags.join(", ");
    if joined.is_empty() {
        NO_TAGS_PLACEHOLDER.to_string()
    } else {
        joined
    }
}
