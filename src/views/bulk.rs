use tracing::error;

use super::{ignore, Command, Outcome, View};
use crate::dtos::bulk::{BulkPredictionResult, ProductPrediction};

pub const BULK_ERROR: &str = "Failed to generate predictions. Please check if the API is running.";

#[derive(Debug, Clone)]
pub struct BulkPredictionView {
    pub stores: Vec<String>,
    pub selected_store: String,
    pub prediction_date: String,
    pub result: Option<BulkPredictionResult>,
    pub expanded_product: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BulkPredictionView {
    pub fn open(store: impl Into<String>, prediction_date: impl Into<String>) -> (Self, Vec<Command>) {
        let view = Self {
            stores: Vec::new(),
            selected_store: store.into(),
            prediction_date: prediction_date.into(),
            result: None,
            expanded_product: None,
            loading: false,
            error: None,
        };
        (view, vec![Command::LoadStores])
    }

    pub fn generate(&mut self) -> Vec<Command> {
        self.loading = true;
        self.error = None;
        self.expanded_product = None;
        vec![Command::BulkPredict {
            store: self.selected_store.clone(),
            date: self.prediction_date.clone(),
        }]
    }

    /// Expands a product's breakdown, or collapses it if it is already open.
    pub fn toggle_expand(&mut self, product_id: &str) {
        if self.expanded_product.as_deref() == Some(product_id) {
            self.expanded_product = None;
        } else {
            self.expanded_product = Some(product_id.to_string());
        }
    }

    pub fn expanded(&self) -> Option<&ProductPrediction> {
        let id = self.expanded_product.as_deref()?;
        self.result.as_ref()?.predictions.iter().find(|p| p.product_id == id)
    }
}

impl View for BulkPredictionView {
    fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Stores(Ok(list)) => self.stores = list.stores,
            Outcome::Stores(Err(e)) => error!(error = %e, "Failed to load stores"),
            Outcome::Bulk(result) => {
                self.loading = false;
                match result {
                    Ok(bulk) => self.result = Some(bulk),
                    Err(e) => {
                        error!(error = %e, "Failed to generate predictions");
                        self.error = Some(BULK_ERROR.to_string());
                    }
                }
            }
            other => ignore("bulk", &other),
        }
        Vec::new()
    }
}
