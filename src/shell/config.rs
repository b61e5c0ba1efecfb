use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_STORE_DIR: &str = "./.ledger";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
    pub store_dir: PathBuf,
    pub bind_addr: SocketAddr,
    /// `*` allows any origin.
    pub cors_allow: Vec<String>,
}

impl AppConfig {
    /// Reads `PARKEASE_*` variables, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_ms = match read("PARKEASE_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "PARKEASE_REQUEST_TIMEOUT_MS",
                value: raw,
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        let bind_raw = read("PARKEASE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                key: "PARKEASE_BIND_ADDR",
                value: bind_raw.clone(),
            })?;

        let api_base_url =
            read("PARKEASE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "PARKEASE_API_BASE_URL",
                value: api_base_url,
            });
        }

        let cors_allow = read("PARKEASE_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            api_base_url,
            api_token: read("PARKEASE_API_TOKEN"),
            request_timeout: Duration::from_millis(timeout_ms),
            store_dir: PathBuf::from(
                read("PARKEASE_STORE_DIR").unwrap_or_else(|| DEFAULT_STORE_DIR.into()),
            ),
            bind_addr,
            cors_allow,
        })
    }
}
