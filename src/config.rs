use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub service_name: String,
    pub otel_exporter_endpoint: Option<String>,
    pub metrics_port: Option<u16>,
    /// Prefix for links placed on notifications
    pub action_url_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://coursedesk.db?mode=rwc".to_string());

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "coursedesk".to_string());

        let otel_exporter_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT");

        let metrics_port = lookup("METRICS_PORT")
            .map(|raw| raw.parse().map_err(|_| ConfigError::InvalidPort(raw)))
            .transpose()?;

        let action_url_base = lookup("ACTION_URL_BASE").unwrap_or_default();

        Ok(Config {
            database_url,
            service_name,
            otel_exporter_endpoint,
            metrics_port,
            action_url_base,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}
