// src/dtos/inventory.rs
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StoreSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub id: i64,
    pub store_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub reorder_point: i32,
    pub updated_at: String,
    pub store: StoreSummary,
    pub product: ProductSummary,
}

// Convert from the joined row to the nested response shape
impl From<crate::models::inventory::InventoryRow> for InventoryResponse {
    fn from(row: crate::models::inventory::InventoryRow) -> Self {
        Self {
            id: row.id,
            store_id: row.store_id,
            product_id: row.product_id,
            quantity: row.quantity,
            reorder_point: row.reorder_point,
            updated_at: row.updated_at.to_rfc3339(),
            store: StoreSummary {
                id: row.store_id,
                code: row.store_code,
                name: row.store_name,
                region: row.store_region,
            },
            product: ProductSummary {
                id: row.product_id,
                code: row.product_code,
                name: row.product_name,
                category: row.product_category,
                price: row.product_price,
            },
        }
    }
}
