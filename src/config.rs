//! Application configuration loaded from environment variables.
//!
//! Read once at startup; a `.env` file is honoured for local development.

use std::env;
use std::time::Duration;

/// Which collaborator backs the leaderboard store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore,
    /// In-process store, useful for local demos. Data is lost on restart.
    Memory,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID
    pub gcp_project_id: String,
    /// Frontend URL (allowed CORS origin)
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Store backend selection
    pub store_backend: StoreBackend,
    /// Upper bound for every individual store call during a recompute pass
    pub store_timeout: Duration,
    /// Maximum number of users aggregated concurrently
    pub aggregation_concurrency: usize,
    /// Period of the background recompute loop; `None` disables it
    pub recompute_interval: Option<Duration>,
}

impl Config {
    /// Deterministic configuration for tests.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            store_backend: StoreBackend::Memory,
            store_timeout: Duration::from_secs(2),
            aggregation_concurrency: 4,
            recompute_interval: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "firestore".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "firestore" => StoreBackend::Firestore,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let store_timeout_secs = parse_var::<u64>("STORE_TIMEOUT_SECS")?.unwrap_or(10);
        if store_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "STORE_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        let aggregation_concurrency = parse_var::<usize>("AGGREGATION_CONCURRENCY")?.unwrap_or(16);
        if aggregation_concurrency == 0 {
            return Err(ConfigError::Invalid {
                name: "AGGREGATION_CONCURRENCY",
                value: "0".to_string(),
            });
        }

        let recompute_interval = parse_var::<u64>("RECOMPUTE_INTERVAL_SECS")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: parse_var::<u16>("PORT")?.unwrap_or(8080),
            store_backend,
            store_timeout: Duration::from_secs(store_timeout_secs),
            aggregation_concurrency,
            recompute_interval,
        })
    }
}

/// Parse an optional numeric environment variable.
fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                value: raw.clone(),
            }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
