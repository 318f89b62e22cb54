use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
#[error("invalid value for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub request_timeout: Duration,
    pub static_dir: PathBuf,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: try_load("PORTAL_API_BASE_URL", "http://localhost:3001")?,
            bind_addr: try_load("PORTAL_BIND_ADDR", "127.0.0.1:3000")?,
            max_workers: try_load("PORTAL_MAX_WORKERS", "8")?,
            request_timeout: Duration::from_secs(try_load("PORTAL_REQUEST_TIMEOUT_SECS", "10")?),
            static_dir: try_load("PORTAL_STATIC_DIR", "static")?,
            secure_cookies: try_load("PORTAL_SECURE_COOKIES", "false")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001".into(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            request_timeout: Duration::from_secs(10),
            static_dir: PathBuf::from("static"),
            secure_cookies: false,
        }
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError {
            key,
            reason: e.to_string(),
        }
    })
}
