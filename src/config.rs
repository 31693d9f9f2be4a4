//! Runtime configuration, read from the environment at start-up.
//!
//! - `DOCTORS_URL`: the directory resource to fetch.
//! - `DIRECTORY_BIND`: listen address for the HTTP server.
//! - `RUST_LOG`: log filter, handled by `tracing-subscriber`.

use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_DOCTORS_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub doctors_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let doctors_url = var("DOCTORS_URL").unwrap_or_else(|| DEFAULT_DOCTORS_URL.to_string());
        let bind = var("DIRECTORY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid DIRECTORY_BIND address: {}", bind))?;

        Ok(Self {
            doctors_url,
            bind_addr,
        })
    }
}
