use tracing::{error, warn};

use super::{ignore, Command, Outcome, View};
use crate::analytics::{forecast_summary, history_stats, ForecastSummary, HistoryStats};
use crate::dtos::forecast::{ForecastPoint, HistoryPoint};

pub const FORECAST_MONTHS: u32 = 3;
pub const STORES_ERROR: &str = "Failed to load stores. Please check if the API is running.";
pub const LOAD_ERROR: &str = "Failed to load data. Please ensure the API server is running.";

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stores: Vec<String>,
    pub products: Vec<String>,
    pub selected_store: String,
    pub selected_product: String,
    pub history: Vec<HistoryPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub stats: HistoryStats,
    pub forecast_summary: ForecastSummary,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardView {
    pub fn open(store: impl Into<String>, product: impl Into<String>) -> (Self, Vec<Command>) {
        let mut view = Self {
            stores: Vec::new(),
            products: Vec::new(),
            selected_store: store.into(),
            selected_product: product.into(),
            history: Vec::new(),
            forecast: Vec::new(),
            stats: HistoryStats::default(),
            forecast_summary: forecast_summary(&[]),
            loading: true,
            error: None,
        };
        let commands = vec![
            Command::LoadStores,
            Command::LoadProducts { store: view.selected_store.clone() },
            view.load(),
        ];
        (view, commands)
    }

    pub fn select_store(&mut self, store: impl Into<String>) -> Vec<Command> {
        self.selected_store = store.into();
        vec![Command::LoadProducts { store: self.selected_store.clone() }, self.load()]
    }

    pub fn select_product(&mut self, product: impl Into<String>) -> Vec<Command> {
        self.selected_product = product.into();
        vec![self.load()]
    }

    pub fn retry(&mut self) -> Vec<Command> {
        vec![self.load()]
    }

    fn load(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        Command::LoadDashboard {
            store: self.selected_store.clone(),
            product: self.selected_product.clone(),
        }
    }

    /// Expected demand over the whole forecast window.
    pub fn total_demand(&self) -> f64 {
        self.forecast_summary.total_demand
    }
}

impl View for DashboardView {
    fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Stores(Ok(list)) => {
                self.stores = list.stores;
                // Fall back to the first listed store when the requested one is unknown.
                if let Some(first) = self.stores.first().filter(|_| !self.stores.contains(&self.selected_store)) {
                    warn!(requested = %self.selected_store, using = %first, "Store not found");
                    let first = first.clone();
                    return self.select_store(first);
                }
            }
            Outcome::Stores(Err(e)) => {
                error!(error = %e, "Failed to load stores");
                self.error = Some(STORES_ERROR.to_string());
            }
            Outcome::Products(Ok(list)) => {
                self.products = list.products;
                if let Some(first) = self.products.first().filter(|_| !self.products.contains(&self.selected_product)) {
                    warn!(requested = %self.selected_product, using = %first, "Product not sold in store");
                    let first = first.clone();
                    return self.select_product(first);
                }
            }
            Outcome::Products(Err(e)) => error!(error = %e, "Failed to load products"),
            Outcome::Dashboard(result) => {
                self.loading = false;
                match result {
                    Ok((history, forecast)) => {
                        if self.error.as_deref() == Some(LOAD_ERROR) {
                            self.error = None;
                        }
                        self.stats = history_stats(&history);
                        self.forecast_summary = forecast_summary(&forecast);
                        self.history = history;
                        self.forecast = forecast;
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to load data");
                        self.error = Some(LOAD_ERROR.to_string());
                    }
                }
            }
            other => ignore("dashboard", &other),
        }
        Vec::new()
    }
}
