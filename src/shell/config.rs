// Runtime configuration read from the environment.
//
// Variables
// - BIND_HOST      listen address, default 0.0.0.0
// - PORT           listen port, default 10000
// - DATABASE_PATH  SQLite file, default data/app.db
// - UTC_OFFSET     offset that defines "today", e.g. +09:00, default +00:00
// - ROSTER_PATH    optional JSON roster; the sample roster is used when unset

use chrono::FixedOffset;
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    pub utc_offset: FixedOffset,
    pub roster_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &'static str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let host = var("BIND_HOST", "0.0.0.0");
        let host: IpAddr = host.parse().map_err(invalid("BIND_HOST", &host))?;

        let port = var("PORT", "10000");
        let port: u16 = port.parse().map_err(invalid("PORT", &port))?;

        let offset = var("UTC_OFFSET", "+00:00");
        let utc_offset: FixedOffset = offset.parse().map_err(invalid("UTC_OFFSET", &offset))?;

        let roster_path = lookup("ROSTER_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            database_path: PathBuf::from(var("DATABASE_PATH", "data/app.db")),
            utc_offset,
            roster_path,
        })
    }
}

fn invalid<'a, E: Display>(
    name: &'static str,
    value: &'a str,
) -> impl FnOnce(E) -> ConfigError + 'a {
    move |e| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    }
}
