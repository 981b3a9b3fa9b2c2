// src/dtos/training.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stores: Vec<String>,
    #[serde(default)]
    pub records: Option<u64>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResult {
    pub fn failed(msg: &str) -> Self {
        Self { error: Some(msg.to_string()), ..Self::default() }
    }
}

#[derive(Debug, Serialize)]
pub struct TrainRequest<'a> {
    pub store_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreTrainingResult {
    pub store_id: String,
    pub records: u64,
    pub accuracy: f64,
    pub mae: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<StoreTrainingResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TrainingResult {
    pub fn failed(msg: &str) -> Self {
        Self { error: Some(msg.to_string()), ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    pub store_id: String,
    pub trained_at: String,
    pub size_mb: f64,
    pub model_file: String,
}

impl TrainedModel {
    pub fn is_global(&self) -> bool {
        self.store_id == "GLOBAL"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatus {
    #[serde(default)]
    pub total_models: u32,
    #[serde(default)]
    pub models: Vec<TrainedModel>,
}
