pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::creative::handlers as creative;
use crate::marketing::handlers as marketing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Item pipeline
        .route("/api/v1/items/process", post(marketing::handle_process))
        .route("/api/v1/items/price", post(marketing::handle_price))
        .route("/api/v1/items/strategy", post(marketing::handle_strategy))
        .route("/api/v1/items/creative", post(creative::handle_creative_brief))
        // Catalogues
        .route("/api/v1/personas", get(marketing::handle_list_personas))
        .route(
            "/api/v1/personas/:key",
            get(marketing::handle_get_persona),
        )
        .route("/api/v1/strategies", get(marketing::handle_list_strategies))
        .route(
            "/api/v1/strategies/:name",
            get(marketing::handle_get_strategy),
        )
        .with_state(state)
}
