// src/handlers/reorder.rs
use axum::{extract::State, Json};
use crate::dtos::reorder::ReorderResponse;
use crate::error::AppError;
use crate::state::AppState;
use tracing::{error, instrument};

// GET /api/reorders - List all reorders, newest first
#[instrument(skip(state))]
pub async fn list_reorders(State(state): State<AppState>) -> Result<Json<Vec<ReorderResponse>>, AppError> {
    match state.inventory.list_reorders().await {
        Ok(reorders) => Ok(Json(reorders.into_iter().map(ReorderResponse::from).collect())),
        Err(e) => {
            error!(?e, "Failed to fetch reorders");
            Err(e.into())
        }
    }
}
