// src/dtos/bulk.rs
use serde::{Deserialize, Serialize};
use crate::dtos::prediction::DemandRange;
use crate::status::StockStatus;

#[derive(Debug, Serialize)]
pub struct BulkPredictionRequest<'a> {
    pub store_id: &'a str,
    pub prediction_date: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSummary {
    pub total_products: u32,
    pub critical_stock: u32,
    pub low_stock: u32,
    #[serde(default)]
    pub adequate_stock: u32,
    #[serde(default)]
    pub excess_stock: u32,
    pub total_order_value: f64,
    pub total_revenue_at_risk: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandBreakdown {
    pub daily_average: DemandRange,
    pub weekly: DemandRange,
    pub monthly: DemandRange,
    pub quarterly: DemandRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPerformance {
    pub date: String,
    pub predicted: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrediction {
    pub product_id: String,
    pub category: String,
    pub status: StockStatus,
    #[serde(default)]
    pub priority: Option<u8>,
    pub current_stock: f64,
    pub predicted_demand: f64,
    #[serde(default)]
    pub low_estimate: Option<f64>,
    #[serde(default)]
    pub high_estimate: Option<f64>,
    pub recommended_order: f64,
    #[serde(default)]
    pub shortage: Option<f64>,
    pub price: f64,
    pub confidence: String,
    pub potential_revenue: f64,
    pub lost_revenue_risk: f64,
    pub demand_breakdown: DemandBreakdown,
    #[serde(default)]
    pub last_4_weeks: Vec<WeekPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkPredictionResult {
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub prediction_date: Option<String>,
    pub summary: BulkSummary,
    #[serde(default)]
    pub predictions: Vec<ProductPrediction>,
}
