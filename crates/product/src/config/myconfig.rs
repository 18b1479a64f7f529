use anyhow::{Context, Result};
use shared::config::{DatabaseConfig, parse_port};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub port: u16,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database =
            DatabaseConfig::from_lookup(&lookup).context("Invalid database configuration")?;
        let port = parse_port("PORT", lookup("PORT"), DEFAULT_PORT)?;

        Ok(Self { database, port })
    }
}
