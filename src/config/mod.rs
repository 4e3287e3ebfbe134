use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Which store backs the preview cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            other => Err(ConfigError::Invalid {
                key: "CACHE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub redis_url: String,
    pub cache_backend: CacheBackend,
    pub is_dev: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_port: u16 = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "SERVER_PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let cache_backend = match lookup("CACHE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => CacheBackend::Redis,
        };

        Ok(Config {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://redis:6379".to_string()),
            cache_backend,
            is_dev: lookup("APP_ENV").as_deref() != Some("production"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
