//! HTTP handlers for the query API.
//!
//! Handlers read a registration snapshot and delegate to the planner.

use axum::{extract::State, Json};

use super::dto::{HealthResponse, ItemCountsResponse};
use super::error::AppError;
use super::state::AppState;
use crate::program::Program;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

/// GET /v1/program
///
/// The current program, recomputed from the registrations.
pub async fn get_program(State(state): State<AppState>) -> HandlerResult<Program> {
    let program = state.planner.plan_from(state.repository.as_ref()).await?;
    Ok(Json(program))
}

/// GET /v1/program/catalog
///
/// The sample program listing every regulated item once.
pub async fn get_catalog_program(State(state): State<AppState>) -> HandlerResult<Program> {
    Ok(Json(state.planner.plan_catalog()?))
}

/// GET /v1/program/item-counts
pub async fn get_item_counts(State(state): State<AppState>) -> HandlerResult<ItemCountsResponse> {
    let items = state.repository.registered_items().await?;
    Ok(Json(ItemCountsResponse {
        counts: state.planner.item_counts(&items),
        total_items: items.len(),
    }))
}
