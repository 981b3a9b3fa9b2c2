use async_trait::async_trait;
use sqlx::PgPool;

use super::InventoryRepository;
use crate::models::inventory::InventoryRow;
use crate::models::reorder::Reorder;

const INVENTORY_SELECT: &str = r#"
    SELECT i.id, i.quantity, i.reorder_point, i.updated_at,
           s.id AS store_id, s.code AS store_code, s.name AS store_name, s.region AS store_region,
           p.id AS product_id, p.code AS product_code, p.name AS product_name,
           p.category AS product_category, p.price::FLOAT8 AS product_price
    FROM inventory i
    JOIN stores s ON i.store_id = s.id
    JOIN products p ON i.product_id = p.id"#;

#[derive(Clone)]
pub struct PgInventoryRepository {
    pool: PgPool,
}

impl PgInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn list_inventory(&self) -> Result<Vec<InventoryRow>, sqlx::Error> {
        sqlx::query_as::<_, InventoryRow>(&format!("{INVENTORY_SELECT} ORDER BY i.id"))
            .fetch_all(&self.pool)
            .await
    }

    async fn find_inventory(&self, id: i64) -> Result<Option<InventoryRow>, sqlx::Error> {
        sqlx::query_as::<_, InventoryRow>(&format!("{INVENTORY_SELECT} WHERE i.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_reorders(&self) -> Result<Vec<Reorder>, sqlx::Error> {
        sqlx::query_as::<_, Reorder>(
            "SELECT id, store_id, product_id, quantity, status, created_at
             FROM reorders ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
