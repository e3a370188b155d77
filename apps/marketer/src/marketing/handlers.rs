//! Axum route handlers for the marketing pipeline.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::marketing::persona::{Persona, PersonaProfile};
use crate::marketing::pipeline::MarketingPackage;
use crate::marketing::strategy::{StrategyKind, StrategyResult};
use crate::models::ItemRecord;
use crate::pricing::{CostBreakdown, PriceAnalysis};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub cost: CostBreakdown,
    pub analysis: PriceAnalysis,
}

#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    pub cost: CostBreakdown,
    pub strategy: StrategyResult,
}

#[derive(Debug, Serialize)]
pub struct StrategySummary {
    pub name: &'static str,
    pub angle: &'static str,
    pub personas: &'static [Persona],
}

impl From<StrategyKind> for StrategySummary {
    fn from(kind: StrategyKind) -> Self {
        Self {
            name: kind.name(),
            angle: kind.angle(),
            personas: kind.personas(),
        }
    }
}

/// POST /api/v1/items/process
///
/// Full pipeline: price → classify → render per persona → decorate.
pub async fn handle_process(
    State(state): State<AppState>,
    Json(item): Json<ItemRecord>,
) -> Result<Json<MarketingPackage>, AppError> {
    let package = state.marketer.process_item(item)?;
    Ok(Json(package))
}

/// POST /api/v1/items/price
pub async fn handle_price(
    State(state): State<AppState>,
    Json(item): Json<ItemRecord>,
) -> Result<Json<PriceResponse>, AppError> {
    let (cost, analysis) = state.marketer.price(&item)?;
    Ok(Json(PriceResponse { cost, analysis }))
}

/// POST /api/v1/items/strategy
///
/// Classification only, without rendering any content.
pub async fn handle_strategy(
    State(state): State<AppState>,
    Json(item): Json<ItemRecord>,
) -> Result<Json<StrategyResponse>, AppError> {
    let (cost, strategy) = state.marketer.classify(&item)?;
    Ok(Json(StrategyResponse { cost, strategy }))
}

/// GET /api/v1/personas
pub async fn handle_list_personas() -> Json<Vec<PersonaProfile>> {
    Json(Persona::ALL.iter().map(|p| p.profile()).collect())
}

/// GET /api/v1/personas/:key
///
/// Unknown keys resolve to the generic profile rather than 404.
pub async fn handle_get_persona(Path(key): Path<String>) -> Json<PersonaProfile> {
    Json(PersonaProfile::for_key(&key))
}

/// GET /api/v1/strategies
pub async fn handle_list_strategies() -> Json<Vec<StrategySummary>> {
    Json(StrategyKind::ALL.into_iter().map(StrategySummary::from).collect())
}

/// GET /api/v1/strategies/:name
pub async fn handle_get_strategy(
    Path(name): Path<String>,
) -> Result<Json<StrategySummary>, AppError> {
    StrategyKind::from_name(&name)
        .map(|kind| Json(kind.into()))
        .ok_or_else(|| AppError::NotFound(format!("Strategy '{name}' not found")))
}
