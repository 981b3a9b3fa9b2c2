use sqlx::FromRow;
use chrono::{DateTime, Utc};

/// One inventory row joined with its store and product.
#[derive(Debug, Clone, FromRow)]
pub struct InventoryRow {
    pub id: i64,
    pub quantity: i32,
    pub reorder_point: i32,
    pub updated_at: DateTime<Utc>,
    pub store_id: i64,
    pub store_code: String,
    pub store_name: String,
    pub store_region: Option<String>,
    pub product_id: i64,
    pub product_code: String,
    pub product_name: String,
    pub product_category: Option<String>,
    pub product_price: f64,
}
