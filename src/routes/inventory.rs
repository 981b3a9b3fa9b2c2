use axum::{routing::get, Router};
use crate::handlers::inventory::{get_inventory, list_inventory};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(list_inventory))
        .route("/inventory/{id}", get(get_inventory))
}
