//! HTTP client for the external forecasting service.
//!
//! One method per endpoint, no retries and no caching.

mod error;

pub use error::ForecastApiError;

use reqwest::{multipart, Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::ForecastApiConfig;
use crate::dtos::bulk::{BulkPredictionRequest, BulkPredictionResult};
use crate::dtos::forecast::{ForecastPoint, ForecastRequest, HistoryPoint, ProductList, StoreList};
use crate::dtos::prediction::{PredictionRequest, PredictionResult};
use crate::dtos::training::{TrainRequest, TrainingResult, TrainingStatus, UploadResult};
use crate::upload::SelectedFile;

#[derive(Debug, Clone)]
pub struct ForecastApiClient {
    client: Client,
    base_url: Url,
}

impl ForecastApiClient {
    pub fn new(config: &ForecastApiConfig) -> Result<Self, ForecastApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ForecastApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ForecastApiError::InvalidBaseUrl(config.base_url.clone()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    #[instrument(skip(self))]
    pub async fn get_history(&self, store: &str, product: &str) -> Result<Vec<HistoryPoint>, ForecastApiError> {
        self.send(self.client.get(self.url(&["history", store, product]))).await
    }

    #[instrument(skip(self))]
    pub async fn get_forecast(
        &self,
        store: &str,
        product: &str,
        months: u32,
    ) -> Result<Vec<ForecastPoint>, ForecastApiError> {
        let body = ForecastRequest { store_id: store, product_id: product, months };
        self.send(self.client.post(self.url(&["forecast"])).json(&body)).await
    }

    #[instrument(skip(self))]
    pub async fn get_stores(&self) -> Result<StoreList, ForecastApiError> {
        self.send(self.client.get(self.url(&["stores"]))).await
    }

    #[instrument(skip(self))]
    pub async fn get_products(&self, store: &str) -> Result<ProductList, ForecastApiError> {
        self.send(self.client.get(self.url(&["products", store]))).await
    }

    #[instrument(skip(self, payload), fields(store = %payload.store_id, product = %payload.product_id))]
    pub async fn predict_with_context(&self, payload: &PredictionRequest) -> Result<PredictionResult, ForecastApiError> {
        self.send(self.client.post(self.url(&["predict_with_context"])).json(payload)).await
    }

    #[instrument(skip(self))]
    pub async fn get_bulk_prediction(&self, store: &str, date: &str) -> Result<BulkPredictionResult, ForecastApiError> {
        let body = BulkPredictionRequest { store_id: store, prediction_date: date };
        self.send(self.client.post(self.url(&["bulk_predict"])).json(&body)).await
    }

    /// Posts the file as multipart form data under the `file` field.
    ///
    /// The service answers with `success: false` plus `error` for rejected
    /// data, so that body is returned as a result rather than an error.
    #[instrument(skip(self, file), fields(file = %file.file_name))]
    pub async fn upload_data(&self, file: &SelectedFile) -> Result<UploadResult, ForecastApiError> {
        let bytes = tokio::fs::read(&file.path).await?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(file.mime)?;
        let form = multipart::Form::new().part("file", part);
        self.send_raw(self.client.post(self.url(&["upload_data"])).multipart(form)).await
    }

    #[instrument(skip(self))]
    pub async fn train_model(&self, store: &str) -> Result<TrainingResult, ForecastApiError> {
        let body = TrainRequest { store_id: store };
        self.send_raw(self.client.post(self.url(&["train_model"])).json(&body)).await
    }

    #[instrument(skip(self))]
    pub async fn get_training_status(&self) -> Result<TrainingStatus, ForecastApiError> {
        self.send(self.client.get(self.url(&["training_status"]))).await
    }

    /// Sends a request and decodes the body, treating `{"error": ...}` as a failure.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ForecastApiError> {
        let value = self.fetch(request).await?;
        if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
            return Err(ForecastApiError::Service(msg.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    async fn send_raw<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ForecastApiError> {
        let value = self.fetch(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn fetch(&self, request: RequestBuilder) -> Result<serde_json::Value, ForecastApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "forecasting service responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForecastApiError::Status { status: status.as_u16(), body });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ForecastApiClient {
        ForecastApiClient::new(&ForecastApiConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn history_hits_store_product_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/history/S001/P0001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"date": "2024-01-07", "units_sold_7d": 10.0, "predicted": 8.0, "inventory_level": 120, "price": 33.5, "discount": 5.0}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let history = client_for(&server).await.get_history("S001", "P0001").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].units_sold_7d, 10.0);
        assert_eq!(history[0].price, Some(33.5));
    }

    #[tokio::test]
    async fn path_segments_are_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/history/S%2001%2Fx/P0001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/products/S%3F1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": ["P0001"]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert!(client.get_history("S 01/x", "P0001").await.unwrap().is_empty());
        assert_eq!(client.get_products("S?1").await.unwrap().products, vec!["P0001".to_string()]);
    }

    #[tokio::test]
    async fn base_url_path_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/stores"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stores": ["S001"]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ForecastApiClient::new(&ForecastApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        assert_eq!(client.get_stores().await.unwrap().stores, vec!["S001".to_string()]);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ForecastApiClient::new(&ForecastApiConfig {
            base_url: "not a url".into(),
            timeout: Duration::from_secs(5),
        })
        .unwrap_err();
        assert!(matches!(err, ForecastApiError::InvalidBaseUrl(_)));
    }

    #[tokio::test]
    async fn forecast_posts_months() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/forecast"))
            .and(body_json(json!({"store_id": "S002", "product_id": "P0003", "months": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"week": 1, "expected_demand": 12.5},
                {"week": 2, "expected_demand": 14.0}
            ])))
            .mount(&server)
            .await;

        let forecast = client_for(&server).await.get_forecast("S002", "P0003", 2).await.unwrap();
        assert_eq!(forecast, vec![
            ForecastPoint { week: 1, expected_demand: 12.5 },
            ForecastPoint { week: 2, expected_demand: 14.0 },
        ]);
    }

    #[tokio::test]
    async fn error_body_with_ok_status_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bulk_predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "No data found for store S999"})))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_bulk_prediction("S999", "2024-01-15").await.unwrap_err();
        assert!(matches!(err, ForecastApiError::Service(ref m) if m.contains("S999")));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stores"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_stores().await.unwrap_err();
        assert!(matches!(err, ForecastApiError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn unknown_status_fails_to_decode() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict_with_context"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": {
                    "stock_status": "SOLD_OUT",
                    "message": "",
                    "simple_explanation": "",
                    "current_stock": 0,
                    "predicted_sales_this_week": 1,
                    "action_needed": "MONITOR"
                },
                "stock_recommendation": {"recommended_order_quantity": 0, "shortage_units": 0, "surplus_units": 0, "safety_stock_needed": 0},
                "demand_estimates": {
                    "this_week": {"low": 0, "average": 0, "high": 0},
                    "this_month": {"low": 0, "average": 0, "high": 0}
                },
                "financial_impact": {"currency": "₹", "expected_revenue": 0, "potential_lost_revenue": 0}
            })))
            .mount(&server)
            .await;

        let payload = PredictionRequest::for_date(chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let err = client_for(&server).await.predict_with_context(&payload).await.unwrap_err();
        assert!(matches!(err, ForecastApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn training_failure_body_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/train_model"))
            .and(body_json(json!({"store_id": "all"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": "No data uploaded"})))
            .mount(&server)
            .await;

        let result = client_for(&server).await.train_model("all").await.unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("No data uploaded"));
    }

    #[tokio::test]
    async fn upload_sends_multipart_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload_data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Data uploaded",
                "stores": ["S001", "S002"],
                "records": 42,
                "date_range": {"start": "2024-01-01", "end": "2024-03-31"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("sales.csv");
        std::fs::write(&file_path, "Date,Store ID\n2024-01-01,S001\n").unwrap();
        let selected = crate::upload::validate(&file_path, None, 30).unwrap();

        let result = client_for(&server).await.upload_data(&selected).await.unwrap();
        assert!(result.success);
        assert_eq!(result.records, Some(42));

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("filename=\"sales.csv\""));
    }
}
