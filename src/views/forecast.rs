use tracing::error;

use super::{ignore, Command, Outcome, View};
use crate::analytics::{forecast_summary, ForecastSummary};
use crate::dtos::forecast::ForecastPoint;

/// Forecast horizons offered to the user, in months.
pub const PERIODS: [u32; 3] = [1, 3, 6];

#[derive(Debug, Clone)]
pub struct ForecastView {
    pub store: String,
    pub product: String,
    pub months: u32,
    pub forecast: Vec<ForecastPoint>,
    pub summary: ForecastSummary,
    pub loading: bool,
}

impl ForecastView {
    pub fn new(store: impl Into<String>, product: impl Into<String>, months: u32) -> Self {
        Self {
            store: store.into(),
            product: product.into(),
            months,
            forecast: Vec::new(),
            summary: forecast_summary(&[]),
            loading: false,
        }
    }

    pub fn generate(&mut self) -> Vec<Command> {
        self.loading = true;
        vec![Command::GenerateForecast {
            store: self.store.clone(),
            product: self.product.clone(),
            months: self.months,
        }]
    }
}

impl View for ForecastView {
    fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Forecast(result) => {
                self.loading = false;
                match result {
                    Ok(forecast) => {
                        self.summary = forecast_summary(&forecast);
                        self.forecast = forecast;
                    }
                    // The page keeps whatever it had; nothing is shown to the user.
                    Err(e) => error!(error = %e, "Failed to generate forecast"),
                }
            }
            other => ignore("forecast", &other),
        }
        Vec::new()
    }
}
