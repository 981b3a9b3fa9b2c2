// src/dtos/prediction.rs
use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::status::{ActionNeeded, StockStatus};

/// Body of `POST /predict_with_context`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub store_id: String,
    pub product_id: String,
    pub prediction_for_date: String,
    pub category: String,
    pub region: String,
    pub weather_condition: String,
    pub seasonality: String,
    pub inventory_level: i64,
    pub price: f64,
    pub discount: f64,
    pub competitor_pricing: f64,
    pub holiday_promotion: i64,
}

impl PredictionRequest {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            store_id: "S001".into(),
            product_id: "P0001".into(),
            prediction_for_date: date.format("%Y-%m-%d").to_string(),
            category: "Groceries".into(),
            region: "North".into(),
            weather_condition: "Sunny".into(),
            seasonality: "Summer".into(),
            inventory_level: 100,
            price: 50.0,
            discount: 10.0,
            competitor_pricing: 55.0,
            holiday_promotion: 0,
        }
    }
}

/// Low/average/high band for a demand horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRange {
    pub low: f64,
    pub average: f64,
    pub high: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub stock_status: StockStatus,
    pub message: String,
    pub simple_explanation: String,
    pub current_stock: f64,
    pub predicted_sales_this_week: f64,
    pub action_needed: ActionNeeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecommendation {
    pub recommended_order_quantity: f64,
    pub shortage_units: f64,
    pub surplus_units: f64,
    pub safety_stock_needed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandEstimates {
    pub this_week: DemandRange,
    pub this_month: DemandRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialImpact {
    pub currency: String,
    pub expected_revenue: f64,
    pub potential_lost_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub avg_error_percent: f64,
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub prediction_for_date: Option<String>,
    #[serde(default)]
    pub predicted_demand: Option<f64>,
    pub summary: PredictionSummary,
    pub stock_recommendation: StockRecommendation,
    pub demand_estimates: DemandEstimates,
    pub financial_impact: FinancialImpact,
    #[serde(default)]
    pub confidence_interval: Option<ConfidenceInterval>,
}
