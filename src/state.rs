// src/state.rs
use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::{InventoryRepository, PgInventoryRepository};

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<dyn InventoryRepository>,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgInventoryRepository::new(db_pool)))
    }

    pub fn with_repository(inventory: Arc<dyn InventoryRepository>) -> Self {
        Self { inventory }
    }
}
