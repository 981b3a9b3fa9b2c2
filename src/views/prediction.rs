use tracing::error;

use super::{ignore, Command, Outcome, View};
use crate::dtos::prediction::{PredictionRequest, PredictionResult};

pub const PREDICT_ERROR: &str = "Failed to get prediction. Please check if the API is running.";

#[derive(Debug, Clone)]
pub struct PredictionView {
    pub request: PredictionRequest,
    pub result: Option<PredictionResult>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PredictionView {
    pub fn new(request: PredictionRequest) -> Self {
        Self { request, result: None, loading: false, error: None }
    }

    pub fn submit(&mut self) -> Vec<Command> {
        self.loading = true;
        self.error = None;
        vec![Command::Predict(self.request.clone())]
    }
}

impl View for PredictionView {
    fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Prediction(result) => {
                self.loading = false;
                match result {
                    Ok(prediction) => self.result = Some(prediction),
                    Err(e) => {
                        error!(error = %e, "Failed to get prediction");
                        self.error = Some(PREDICT_ERROR.to_string());
                    }
                }
            }
            other => ignore("prediction", &other),
        }
        Vec::new()
    }
}
