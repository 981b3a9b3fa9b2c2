//! Read access to the inventory database.

mod postgres;

pub use postgres::PgInventoryRepository;

use async_trait::async_trait;

use crate::models::inventory::InventoryRow;
use crate::models::reorder::Reorder;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Every inventory row with its store and product, ordered by id.
    async fn list_inventory(&self) -> Result<Vec<InventoryRow>, sqlx::Error>;

    async fn find_inventory(&self, id: i64) -> Result<Option<InventoryRow>, sqlx::Error>;

    /// Every reorder, newest first.
    async fn list_reorders(&self) -> Result<Vec<Reorder>, sqlx::Error>;
}
