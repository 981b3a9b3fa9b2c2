pub mod inventory;
pub mod reorders;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(inventory::routes())
        .merge(reorders::routes())
}

/// Full application: `/api` routes plus banner and health check.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_router())
        .route("/", get(|| async { "RetailAI inventory API" }))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::models::inventory::InventoryRow;
    use crate::models::reorder::Reorder;
    use crate::repositories::InventoryRepository;

    #[derive(Default)]
    struct FakeRepository {
        inventory: Vec<InventoryRow>,
        reorders: Vec<Reorder>,
        broken: bool,
    }

    #[async_trait]
    impl InventoryRepository for FakeRepository {
        async fn list_inventory(&self) -> Result<Vec<InventoryRow>, sqlx::Error> {
            if self.broken {
                return Err(sqlx::Error::PoolTimedOut);
            }
            Ok(self.inventory.clone())
        }

        async fn find_inventory(&self, id: i64) -> Result<Option<InventoryRow>, sqlx::Error> {
            Ok(self.inventory.iter().find(|row| row.id == id).cloned())
        }

        async fn list_reorders(&self) -> Result<Vec<Reorder>, sqlx::Error> {
            let mut reorders = self.reorders.clone();
            reorders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(reorders)
        }
    }

    fn inventory_row(id: i64) -> InventoryRow {
        InventoryRow {
            id,
            quantity: 40,
            reorder_point: 25,
            updated_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            store_id: 1,
            store_code: "S001".into(),
            store_name: "Downtown".into(),
            store_region: Some("North".into()),
            product_id: 3,
            product_code: "P0001".into(),
            product_name: "Rice 5kg".into(),
            product_category: Some("Groceries".into()),
            product_price: 9.99,
        }
    }

    fn reorder(id: i64, day: u32) -> Reorder {
        Reorder {
            id,
            store_id: 1,
            product_id: 3,
            quantity: 12,
            status: "PENDING".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn app_with(repo: FakeRepository) -> Router {
        app(AppState::with_repository(Arc::new(repo)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn lists_inventory_with_relations() {
        let repo = FakeRepository { inventory: vec![inventory_row(1), inventory_row(2)], ..Default::default() };
        let (status, body) = get_json(app_with(repo), "/api/inventory").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["store"]["code"], "S001");
        assert_eq!(body[0]["product"]["name"], "Rice 5kg");
        assert_eq!(body[0]["reorderPoint"], 25);
    }

    #[tokio::test]
    async fn gets_inventory_by_id() {
        let repo = FakeRepository { inventory: vec![inventory_row(7)], ..Default::default() };
        let (status, body) = get_json(app_with(repo), "/api/inventory/7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 7);
        assert_eq!(body["productId"], 3);
    }

    #[tokio::test]
    async fn missing_inventory_is_404() {
        let (status, body) = get_json(app_with(FakeRepository::default()), "/api/inventory/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["error"], "Inventory record 999 not found");
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let (status, body) = get_json(app_with(FakeRepository::default()), "/api/inventory/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "validation_error");
    }

    #[tokio::test]
    async fn database_failure_is_500_envelope() {
        let repo = FakeRepository { broken: true, ..Default::default() };
        let (status, body) = get_json(app_with(repo), "/api/inventory").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "database_error");
    }

    #[tokio::test]
    async fn reorders_are_newest_first() {
        let repo = FakeRepository { reorders: vec![reorder(1, 3), reorder(2, 9)], ..Default::default() };
        let (status, body) = get_json(app_with(repo), "/api/reorders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], 2);
        assert_eq!(body[1]["id"], 1);
    }

    #[tokio::test]
    async fn health_check_responds() {
        let response = app_with(FakeRepository::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
