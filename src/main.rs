// src/main.rs
mod analytics;
mod cli;
mod config;
mod database;
mod dtos;
mod error;
mod forecast_api;
mod handlers;
mod models;
mod render;
mod repositories;
mod routes;
mod state;
mod status;
mod upload;
mod views;

use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliCommand};
use crate::config::{ForecastApiConfig, ServerConfig};
use crate::forecast_api::ForecastApiClient;
use crate::views::bulk::BulkPredictionView;
use crate::views::dashboard::DashboardView;
use crate::views::data_upload::DataUploadView;
use crate::views::forecast::ForecastView;
use crate::views::prediction::PredictionView;
use crate::views::drive;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        CliCommand::Serve { migrate } => serve(migrate).await,
        command => run_view(cli.api_url, command).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            tracing::error!("{msg}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(migrate: bool) -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;

    // Create database pool
    let db_pool = database::create_pool(&config)
        .await
        .map_err(|e| format!("Failed to create database pool: {e}"))?;
    if migrate {
        database::run_migrations(&db_pool)
            .await
            .map_err(|e| format!("Failed to run migrations: {e}"))?;
        tracing::info!("Migrations applied");
    }

    let app = routes::app(state::AppState::new(db_pool));

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Backend running on {}", addr);
                l
            }
            None => {
                return Err(format!("Failed to bind to any port starting at {} on {}", config.port, config.host));
            }
        }
    };

    axum::serve(listener, app).await.map_err(|e| format!("Server error: {e}"))
}

async fn run_view(api_url: Option<String>, command: CliCommand) -> Result<(), String> {
    let config = ForecastApiConfig::from_env()
        .map_err(|e| e.to_string())?
        .with_base_url(api_url);
    let client = ForecastApiClient::new(&config).map_err(|e| e.to_string())?;
    tracing::debug!(base_url = client.base_url(), "using forecasting service");

    let output = match command {
        CliCommand::Dashboard { store, product, retries } => {
            let (mut view, commands) = DashboardView::open(store, product);
            drive(&client, &mut view, commands).await;
            for attempt in 1..=retries {
                if view.error.is_none() {
                    break;
                }
                tracing::info!(attempt, "Retrying dashboard load");
                let commands = view.retry();
                drive(&client, &mut view, commands).await;
            }
            if view.error.is_some() {
                println!("{}", render::dashboard(&view).map_err(|e| e.to_string())?);
                return Err("dashboard failed to load".into());
            }
            render::dashboard(&view).map_err(|e| e.to_string())?
        }
        CliCommand::Forecast { store, product, months } => {
            let mut view = ForecastView::new(store, product, months);
            let commands = view.generate();
            drive(&client, &mut view, commands).await;
            render::forecast(&view).map_err(|e| e.to_string())?
        }
        CliCommand::Predict(args) => {
            let mut view = PredictionView::new(args.into_request());
            let commands = view.submit();
            drive(&client, &mut view, commands).await;
            render::prediction(&view).map_err(|e| e.to_string())?
        }
        CliCommand::Bulk { store, date, expand } => {
            let date = date.unwrap_or_else(cli::today).format("%Y-%m-%d").to_string();
            let (mut view, mut commands) = BulkPredictionView::open(store, date);
            commands.extend(view.generate());
            drive(&client, &mut view, commands).await;
            if let Some(product) = expand {
                view.toggle_expand(&product);
            }
            render::bulk(&view).map_err(|e| e.to_string())?
        }
        CliCommand::Upload { file } => {
            let (mut view, mut commands) = DataUploadView::open();
            view.select_path(&file).map_err(|e| e.to_string())?;
            commands.extend(view.upload().map_err(|e| e.to_string())?);
            drive(&client, &mut view, commands).await;
            render::data_upload(&view).map_err(|e| e.to_string())?
        }
        CliCommand::Train { store } => {
            let (mut view, mut commands) = DataUploadView::open();
            view.selected_store = store;
            commands.extend(view.train());
            drive(&client, &mut view, commands).await;
            render::data_upload(&view).map_err(|e| e.to_string())?
        }
        CliCommand::TrainingStatus => {
            let (mut view, commands) = DataUploadView::open();
            drive(&client, &mut view, commands).await;
            render::data_upload(&view).map_err(|e| e.to_string())?
        }
        CliCommand::Serve { .. } => return Err("serve is not a view command".into()),
    };

    println!("{output}");
    Ok(())
}
