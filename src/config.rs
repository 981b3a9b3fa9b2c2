// src/config.rs
use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_FORECAST_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Settings for the inventory/reorder backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

/// Settings for talking to the external forecasting service.
#[derive(Debug, Clone)]
pub struct ForecastApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ForecastApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FORECAST_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "HOST", value: raw })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        Ok(Self { host, port, database_url, max_connections })
    }
}

impl ForecastApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("FORECAST_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_FORECAST_API_URL.to_string());
        let timeout_secs = parse_or(&lookup, "FORECAST_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?;

        Ok(Self { base_url, timeout: Duration::from_secs(timeout_secs) })
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn server_defaults_apply() {
        let cfg = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/retail")])).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn server_requires_database_url() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/retail"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn forecast_api_url_is_normalized() {
        let cfg = ForecastApiConfig::from_lookup(lookup(&[
            ("FORECAST_API_URL", "http://forecast:9000/"),
            ("FORECAST_API_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "http://forecast:9000");
        assert_eq!(cfg.timeout, Duration::from_secs(5));

        let overridden = cfg.with_base_url(Some("http://other:1/".into()));
        assert_eq!(overridden.base_url, "http://other:1");
    }

    #[test]
    fn forecast_api_defaults_to_local_service() {
        let cfg = ForecastApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.base_url, DEFAULT_FORECAST_API_URL);
    }
}
