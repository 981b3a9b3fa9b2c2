// src/dtos/reorder.rs
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResponse {
    pub id: i64,
    pub store_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub status: String,
    pub created_at: String,
}

impl From<crate::models::reorder::Reorder> for ReorderResponse {
    fn from(reorder: crate::models::reorder::Reorder) -> Self {
        Self {
            id: reorder.id,
            store_id: reorder.store_id,
            product_id: reorder.product_id,
            quantity: reorder.quantity,
            status: reorder.status,
            created_at: reorder.created_at.to_rfc3339(),
        }
    }
}
