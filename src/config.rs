use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Local, Offset};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Sensor backend
    pub sensor_api_base_url: String,
    pub sample_count: usize,
    pub fetch_timeout_seconds: u64,

    // Chart labels
    pub label_format: String,
    pub label_offset: FixedOffset,

    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Application metadata
    pub deployment: Deployment,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if `SENSOR_API_BASE_URL` is not set, or
    /// `ConfigError::Invalid` for values that do not parse or are out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sample_count = match lookup("SAMPLE_COUNT") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid("SAMPLE_COUNT", raw)),
            },
            None => 20,
        };

        let label_offset = match lookup("LABEL_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes: i32 = raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("LABEL_UTC_OFFSET_MINUTES", raw.clone()))?;
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or(ConfigError::Invalid("LABEL_UTC_OFFSET_MINUTES", raw))?
            }
            None => Local::now().offset().fix(),
        };

        let label_format = lookup("LABEL_FORMAT").unwrap_or_else(|| "%H:%M:%S".to_string());
        if StrftimeItems::new(&label_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid("LABEL_FORMAT", label_format));
        }

        Ok(Self {
            // Sensor backend
            sensor_api_base_url: lookup("SENSOR_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .ok_or(ConfigError::Missing("SENSOR_API_BASE_URL"))?,
            sample_count,
            fetch_timeout_seconds: lookup("FETCH_TIMEOUT_SECONDS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .unwrap_or(30),

            // Chart labels
            label_format,
            label_offset,

            // API settings
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: lookup("API_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            // Application metadata
            deployment: Deployment::from_str(
                &lookup("DEPLOYMENT").unwrap_or_else(|| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
