use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_results: usize,
    pub recommendations: usize,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T> {
    env_or(key, default)
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {key} value")))
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let path = env_or("CATALOG_PATH", "./data/recetas_dataset.csv").into();

        let host = env_or("HOST", "127.0.0.1");
        let port = parse_env("PORT", "3000")?;
        let max_request_body_size = parse_env("MAX_REQUEST_BODY_SIZE", "65536")?;

        let max_results = parse_env("MAX_RESULTS", "10")?;
        let recommendations = parse_env("RECOMMENDATIONS", "3")?;

        Ok(Settings {
            catalog: CatalogConfig { path },
            server: ServerConfig {
                host,
                port,
                max_request_body_size,
            },
            search: SearchConfig {
                max_results,
                recommendations,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.search.max_results == 0 {
            return Err(Error::Config("MAX_RESULTS must be non-zero".to_string()));
        }

        if self.search.recommendations == 0 {
            return Err(Error::Config(
                "RECOMMENDATIONS must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
