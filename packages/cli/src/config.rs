use listkeeper_config::constants::{
    CORS_ORIGIN, LISTKEEPER_API_URL, LISTKEEPER_DATABASE_PATH, LISTKEEPER_HOST,
    LISTKEEPER_MAX_CONNECTIONS, LISTKEEPER_PORT, PORT, STATIC_DIR,
};
use listkeeper_storage::db::DEFAULT_MAX_CONNECTIONS;
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_API_URL: &str = "http://localhost:4001";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid max connections value: {0}")]
    InvalidMaxConnections(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub max_connections: u32,
    pub cors_origin: String,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var(LISTKEEPER_PORT)
            .or_else(|_| env::var(PORT))
            .unwrap_or_else(|_| DEFAULT_PORT.to_string());

        let port = parse_port(&port_str)?;

        let host = env::var(LISTKEEPER_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let database_path = env::var(LISTKEEPER_DATABASE_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(listkeeper_core::default_database_path);

        let max_connections = match env::var(LISTKEEPER_MAX_CONNECTIONS) {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidMaxConnections(value))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let cors_origin =
            env::var(CORS_ORIGIN).unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        let static_dir = env::var(STATIC_DIR)
            .ok()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            host,
            port,
            database_path,
            max_connections,
            cors_origin,
            static_dir,
        })
    }

    /// Apply `serve` flags on top of the environment
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        database: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            if port == 0 {
                return Err(ConfigError::PortOutOfRange(port));
            }
            self.port = port;
        }
        if let Some(database) = database {
            self.database_path = database;
        }
        Ok(self)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    let port = value.trim().parse::<u16>()?;

    // Validate port is in valid range
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }

    Ok(port)
}

/// Resolve the API base URL for the client: flag, then environment, then default
pub fn api_url(flag: Option<String>) -> String {
    flag.or_else(|| env::var(LISTKEEPER_API_URL).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
