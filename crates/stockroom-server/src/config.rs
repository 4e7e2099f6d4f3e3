//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `stockroom.{toml,yaml,json}` file in the working directory, then
//! `STOCKROOM_*` environment variables.
//!
//! - `STOCKROOM_BIND_ADDRESS` - listen address (default: 127.0.0.1:3000)
//! - `STOCKROOM_DATABASE_PATH` - SQLite file (default: db.sqlite)
//! - `STOCKROOM_DEBUG` - expose internal error details and log at debug level (default: true)

use anyhow::{Context, Result};
use config::{Config, Environment, File, Source};
use serde::Deserialize;
use std::net::SocketAddr;

pub const ENV_PREFIX: &str = "STOCKROOM";
pub const CONFIG_FILE: &str = "stockroom";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_PATH: &str = "db.sqlite";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_path: String,
    pub debug: bool,
}

impl ServerConfig {
    /// Load from the config file and the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Layer `file` and then `env` over the defaults.
    pub fn load_from<F>(file: F, env: Environment) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .set_default("debug", true)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}
