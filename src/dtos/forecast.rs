// src/dtos/forecast.rs
use serde::{Deserialize, Serialize};

/// One historical week as returned by `/history/{store}/{product}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub units_sold_7d: f64,
    pub predicted: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub week: u32,
    pub expected_demand: f64,
}

#[derive(Debug, Serialize)]
pub struct ForecastRequest<'a> {
    pub store_id: &'a str,
    pub product_id: &'a str,
    pub months: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreList {
    #[serde(default)]
    pub stores: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<String>,
}
