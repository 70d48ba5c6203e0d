//! Service configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    /// Reads `DATABASE_URL` (required), `HOST` (default 127.0.0.1) and
    /// `PORT` (default 8080). Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let host: IpAddr = match std::env::var("HOST") {
            Ok(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value: v,
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port: u16 = match std::env::var("PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: v,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            listen_addr: SocketAddr::new(host, port),
        })
    }
}
