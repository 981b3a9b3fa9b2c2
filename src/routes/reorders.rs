use axum::{routing::get, Router};
use crate::handlers::reorder::list_reorders;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/reorders", get(list_reorders))
}
