use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::creative::master_prompt::{build_master_prompt, draft_copy};
use crate::creative::potential::{analyze_creative_potential, CreativePotential};
use crate::errors::AppError;
use crate::models::ItemRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreativeBriefResponse {
    pub master_prompt: String,
    pub potential: CreativePotential,
    /// LLM-drafted posts; `None` when no LLM is configured.
    pub draft: Option<String>,
}

/// POST /api/v1/items/creative
///
/// Builds the master prompt and creative-potential hints for an item, and
/// drafts copy from the prompt when an LLM client is available.
pub async fn handle_creative_brief(
    State(state): State<AppState>,
    Json(item): Json<ItemRecord>,
) -> Result<Json<CreativeBriefResponse>, AppError> {
    item.validate()?;

    let master_prompt = build_master_prompt(&item, Utc::now().date_naive());
    let potential = analyze_creative_potential(&item);

    let draft = match &state.llm {
        Some(llm) => Some(draft_copy(llm, &master_prompt).await?),
        None => None,
    };

    Ok(Json(CreativeBriefResponse {
        master_prompt,
        potential,
        draft,
    }))
}
