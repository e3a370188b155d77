//! Master prompt — the free-form creative brief handed to a copywriter or LLM.
//!
//! Independent of the strategy pipeline: it reads the raw item only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::creative::prompts::{
    CREATIVE_MISSIONS, CREATIVE_SYSTEM, MARKET_CONTEXT, MASTER_PROMPT_TEMPLATE, SUCCESS_CASES,
};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::marketing::format::{money, won};
use crate::models::ItemRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn for_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

pub fn build_master_prompt(item: &ItemRecord, today: NaiveDate) -> String {
    let success_cases = SUCCESS_CASES
        .iter()
        .map(|case| format!("- {case}"))
        .collect::<Vec<_>>()
        .join("\n");

    let fields = [
        ("item_name", item.name.clone()),
        ("brand", item.brand.clone()),
        (
            "auction_price",
            money(item.auction_price_foreign.round() as i64),
        ),
        ("rank", item.rank.as_str().to_string()),
        ("domestic_price", won(item.domestic_price)),
        ("notes", item.notes.clone()),
        ("current_date", today.format("%Y-%m-%d").to_string()),
        ("season", Season::for_month(item.month).as_str().to_string()),
        ("market_context", MARKET_CONTEXT.to_string()),
        ("success_cases", success_cases),
        ("creative_missions", CREATIVE_MISSIONS.to_string()),
    ];

    fill_template(MASTER_PROMPT_TEMPLATE, &fields)
}

/// Replaces each `{key}` in one left-to-right pass. Inserted values are never
/// scanned again, and unknown keys are kept as written.
fn fill_template(template: &str, fields: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            fields
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Sends the master prompt to the LLM and returns the drafted posts.
pub async fn draft_copy(llm: &LlmClient, master_prompt: &str) -> Result<String, AppError> {
    let response = llm
        .call(master_prompt, CREATIVE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Creative draft failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("Creative draft returned no text".to_string()))?;

    info!("Drafted creative copy ({} chars)", text.len());
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    use super::*;
    use crate::test_support::spawn_stub;

    async fn llm_at(router: Router) -> LlmClient {
        let base = spawn_stub(router).await;
        LlmClient::new("test-key".to_string())
            .unwrap()
            .with_api_url(format!("{base}/v1/messages"))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_season_for_month() {
        assert_eq!(Season::for_month(12), Season::Winter);
        assert_eq!(Season::for_month(1), Season::Winter);
        assert_eq!(Season::for_month(4), Season::Spring);
        assert_eq!(Season::for_month(8), Season::Summer);
        assert_eq!(Season::for_month(9), Season::Autumn);
        assert_eq!(Season::for_month(11), Season::Autumn);
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_master_prompt(&ItemRecord::sample(), today());
        assert!(!prompt.contains('{'), "unfilled placeholder in:\n{prompt}");
        assert!(prompt.contains("Item: Trench Coat"));
        assert!(prompt.contains("Brand: Burberry"));
        assert!(prompt.contains("Auction price: 2,000"));
        assert!(prompt.contains("Grade: B"));
        assert!(prompt.contains("Domestic market price: 800,000 KRW"));
        assert!(prompt.contains("Today: 2026-10-19"));
        assert!(prompt.contains("Season: autumn"));
    }

    #[test]
    fn test_prompt_lists_success_cases_and_missions() {
        let prompt = build_master_prompt(&ItemRecord::sample(), today());
        for case in SUCCESS_CASES {
            assert!(prompt.contains(&format!("- {case}")));
        }
        assert!(prompt.contains("Mission 5:"));
    }

    #[test]
    fn test_placeholders_in_item_text_are_kept_verbatim() {
        let item = ItemRecord {
            name: "{season} Tote".to_string(),
            notes: "label reads {season} collection, {brand} stamp".to_string(),
            ..ItemRecord::sample()
        };
        let prompt = build_master_prompt(&item, today());
        assert!(prompt.contains("Item: {season} Tote"));
        assert!(prompt.contains("Notes: label reads {season} collection, {brand} stamp"));
        assert!(prompt.contains("Season: autumn"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_and_unclosed_braces() {
        let fields = [("a", "{b}".to_string()), ("b", "2".to_string())];
        assert_eq!(fill_template("{a}-{b}", &fields), "{b}-2");
        assert_eq!(fill_template("{x} {a", &fields), "{x} {a");
    }

    #[tokio::test]
    async fn test_draft_copy_returns_llm_text() {
        let llm = llm_at(Router::new().route(
            "/v1/messages",
            post(|| async {
                Json(json!({
                    "content": [{"type": "text", "text": "Thread 1/4: the coat that pays rent"}],
                    "usage": {"input_tokens": 900, "output_tokens": 12}
                }))
            }),
        ))
        .await;

        let draft = draft_copy(&llm, "brief").await.unwrap();
        assert_eq!(draft, "Thread 1/4: the coat that pays rent");
    }

    #[tokio::test]
    async fn test_draft_copy_without_text_is_llm_error() {
        let llm = llm_at(Router::new().route(
            "/v1/messages",
            post(|| async {
                Json(json!({
                    "content": [],
                    "usage": {"input_tokens": 900, "output_tokens": 0}
                }))
            }),
        ))
        .await;

        let err = draft_copy(&llm, "brief").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(ref msg) if msg.contains("no text")));
    }

    #[tokio::test]
    async fn test_draft_copy_api_failure_is_llm_error() {
        let llm = llm_at(Router::new().route(
            "/v1/messages",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": {"message": "prompt is too long"}})),
                )
            }),
        ))
        .await;

        let err = draft_copy(&llm, "brief").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(ref msg) if msg.contains("prompt is too long")));
    }
}
