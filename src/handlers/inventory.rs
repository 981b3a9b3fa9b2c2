// src/handlers/inventory.rs
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use crate::dtos::inventory::InventoryResponse;
use crate::error::AppError;
use crate::state::AppState;
use tracing::{error, instrument};

// GET /api/inventory - List all inventory with store and product
#[instrument(skip(state))]
pub async fn list_inventory(State(state): State<AppState>) -> Result<Json<Vec<InventoryResponse>>, AppError> {
    match state.inventory.list_inventory().await {
        Ok(rows) => Ok(Json(rows.into_iter().map(InventoryResponse::from).collect())),
        Err(e) => {
            error!(?e, "Failed to fetch inventory");
            Err(e.into())
        }
    }
}

// GET /api/inventory/{id} - Get single inventory record
#[instrument(skip(state, id), fields(id))]
pub async fn get_inventory(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<InventoryResponse>, AppError> {
    let Path(id) = id.map_err(|_| AppError::validation("Inventory id must be an integer"))?;
    tracing::Span::current().record("id", id);

    let row = state
        .inventory
        .find_inventory(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory record {id} not found")))?;

    Ok(Json(InventoryResponse::from(row)))
}
