// src/cli.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use crate::dtos::prediction::PredictionRequest;
use crate::views::forecast::PERIODS;

#[derive(Debug, Parser)]
#[command(name = "retailai", version, about = "RetailAI demand forecasting backend and dashboard")]
pub struct Cli {
    /// Base URL of the forecasting service (overrides FORECAST_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the inventory/reorder HTTP backend
    Serve {
        /// Apply database migrations before serving
        #[arg(long)]
        migrate: bool,
    },
    /// Accuracy, error and forecast overview for one product
    Dashboard {
        #[arg(long, default_value = "S001")]
        store: String,
        #[arg(long, default_value = "P0001")]
        product: String,
        /// Reload this many more times if the data fails to load
        #[arg(long, default_value_t = 0)]
        retries: u32,
    },
    /// Weekly demand forecast
    Forecast {
        #[arg(long, default_value = "S001")]
        store: String,
        #[arg(long, default_value = "P0001")]
        product: String,
        #[arg(long, default_value_t = 3, value_parser = parse_months)]
        months: u32,
    },
    /// Stock recommendation for one product in context
    Predict(PredictArgs),
    /// Order recommendations for every product in a store
    Bulk {
        #[arg(long, default_value = "S001")]
        store: String,
        /// Prediction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Show the demand breakdown for this product
        #[arg(long)]
        expand: Option<String>,
    },
    /// Upload a CSV or Excel sales file
    Upload { file: PathBuf },
    /// Train models for a store, or "all"
    Train {
        #[arg(long, default_value = "all")]
        store: String,
    },
    /// List trained models
    TrainingStatus,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, default_value = "S001")]
    pub store: String,
    #[arg(long, default_value = "P0001")]
    pub product: String,
    /// Prediction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub weather: Option<String>,
    #[arg(long)]
    pub season: Option<String>,
    #[arg(long)]
    pub inventory_level: Option<i64>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub discount: Option<f64>,
    #[arg(long)]
    pub competitor_price: Option<f64>,
    #[arg(long)]
    pub holiday_promotion: bool,
}

fn parse_months(raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .ok()
        .filter(|m| PERIODS.contains(m))
        .ok_or_else(|| format!("months must be one of {PERIODS:?}"))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl PredictArgs {
    pub fn into_request(self) -> PredictionRequest {
        let mut req = PredictionRequest::for_date(self.date.unwrap_or_else(today));
        req.store_id = self.store;
        req.product_id = self.product;
        if let Some(v) = self.category { req.category = v; }
        if let Some(v) = self.region { req.region = v; }
        if let Some(v) = self.weather { req.weather_condition = v; }
        if let Some(v) = self.season { req.seasonality = v; }
        if let Some(v) = self.inventory_level { req.inventory_level = v; }
        if let Some(v) = self.price { req.price = v; }
        if let Some(v) = self.discount { req.discount = v; }
        if let Some(v) = self.competitor_price { req.competitor_pricing = v; }
        req.holiday_promotion = i64::from(self.holiday_promotion);
        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_months_are_restricted() {
        let cli = Cli::try_parse_from(["retailai", "forecast", "--months", "6"]).unwrap();
        assert!(matches!(cli.command, CliCommand::Forecast { months: 6, .. }));
        assert!(Cli::try_parse_from(["retailai", "forecast", "--months", "4"]).is_err());
    }

    #[test]
    fn predict_overrides_defaults() {
        let cli = Cli::try_parse_from([
            "retailai", "predict", "--date", "2024-03-01", "--inventory-level", "40", "--holiday-promotion",
        ])
        .unwrap();
        let CliCommand::Predict(args) = cli.command else { panic!("expected predict") };
        let req = args.into_request();
        assert_eq!(req.prediction_for_date, "2024-03-01");
        assert_eq!(req.inventory_level, 40);
        assert_eq!(req.holiday_promotion, 1);
        assert_eq!(req.category, "Groceries");
    }

    #[test]
    fn dashboard_retries_default_to_zero() {
        let cli = Cli::try_parse_from(["retailai", "dashboard"]).unwrap();
        assert!(matches!(cli.command, CliCommand::Dashboard { retries: 0, .. }));
        let cli = Cli::try_parse_from(["retailai", "dashboard", "--retries", "2"]).unwrap();
        assert!(matches!(cli.command, CliCommand::Dashboard { retries: 2, .. }));
    }

    #[test]
    fn api_url_is_global() {
        let cli = Cli::try_parse_from(["retailai", "training-status", "--api-url", "http://x:1"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://x:1"));
    }
}
