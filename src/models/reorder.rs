use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow)]
pub struct Reorder {
    pub id: i64,
    pub store_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
