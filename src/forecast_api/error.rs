use thiserror::Error;

/// Failures talking to the forecasting service.
///
/// Views never show these to the user; they are logged and replaced by the
/// view's generic message.
#[derive(Debug, Error)]
pub enum ForecastApiError {
    #[error("invalid forecasting service URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("forecasting service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("forecasting service error: {0}")]
    Service(String),

    #[error("invalid response from forecasting service: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("failed to read upload file: {0}")]
    File(#[from] std::io::Error),
}
