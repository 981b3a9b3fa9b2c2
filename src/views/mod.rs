//! Per-page view state.
//!
//! A view is a plain record. User actions return [`Command`]s, the executor
//! turns each command into an [`Outcome`] by calling the forecasting service,
//! and the view folds the outcome back into its state. Views never touch the
//! network themselves.

pub mod bulk;
pub mod dashboard;
pub mod data_upload;
pub mod forecast;
pub mod prediction;

use std::collections::VecDeque;

use tracing::debug;

use crate::dtos::bulk::BulkPredictionResult;
use crate::dtos::forecast::{ForecastPoint, HistoryPoint, ProductList, StoreList};
use crate::dtos::prediction::{PredictionRequest, PredictionResult};
use crate::dtos::training::{TrainingResult, TrainingStatus, UploadResult};
use crate::forecast_api::{ForecastApiClient, ForecastApiError};
use crate::upload::SelectedFile;

type ApiResult<T> = Result<T, ForecastApiError>;

/// A fetch a view wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadStores,
    LoadProducts { store: String },
    LoadDashboard { store: String, product: String },
    GenerateForecast { store: String, product: String, months: u32 },
    Predict(PredictionRequest),
    BulkPredict { store: String, date: String },
    Upload(SelectedFile),
    Train { store: String },
    LoadTrainingStatus,
}

/// The result of running a [`Command`].
#[derive(Debug)]
pub enum Outcome {
    Stores(ApiResult<StoreList>),
    Products(ApiResult<ProductList>),
    Dashboard(ApiResult<(Vec<HistoryPoint>, Vec<ForecastPoint>)>),
    Forecast(ApiResult<Vec<ForecastPoint>>),
    Prediction(ApiResult<PredictionResult>),
    Bulk(ApiResult<BulkPredictionResult>),
    Upload(ApiResult<UploadResult>),
    Training(ApiResult<TrainingResult>),
    TrainingStatus(ApiResult<TrainingStatus>),
}

pub trait View {
    /// Folds an outcome into the view, returning any follow-up commands.
    fn apply(&mut self, outcome: Outcome) -> Vec<Command>;
}

/// Runs one command against the forecasting service.
pub async fn execute(client: &ForecastApiClient, command: Command) -> Outcome {
    match command {
        Command::LoadStores => Outcome::Stores(client.get_stores().await),
        Command::LoadProducts { store } => Outcome::Products(client.get_products(&store).await),
        Command::LoadDashboard { store, product } => {
            // Both halves must succeed before anything is shown.
            let loaded = tokio::try_join!(
                client.get_history(&store, &product),
                client.get_forecast(&store, &product, dashboard::FORECAST_MONTHS),
            );
            Outcome::Dashboard(loaded)
        }
        Command::GenerateForecast { store, product, months } => {
            Outcome::Forecast(client.get_forecast(&store, &product, months).await)
        }
        Command::Predict(request) => Outcome::Prediction(client.predict_with_context(&request).await),
        Command::BulkPredict { store, date } => Outcome::Bulk(client.get_bulk_prediction(&store, &date).await),
        Command::Upload(file) => Outcome::Upload(client.upload_data(&file).await),
        Command::Train { store } => Outcome::Training(client.train_model(&store).await),
        Command::LoadTrainingStatus => Outcome::TrainingStatus(client.get_training_status().await),
    }
}

/// Executes commands until the view stops asking for more.
pub async fn drive<V: View>(client: &ForecastApiClient, view: &mut V, commands: Vec<Command>) {
    let mut queue: VecDeque<Command> = commands.into();
    while let Some(command) = queue.pop_front() {
        debug!(?command, "executing view command");
        let outcome = execute(client, command).await;
        queue.extend(view.apply(outcome));
    }
}

/// Logs an outcome that does not belong to the receiving view.
pub(crate) fn ignore(view: &'static str, outcome: &Outcome) {
    debug!(view, ?outcome, "ignoring unrelated outcome");
}
