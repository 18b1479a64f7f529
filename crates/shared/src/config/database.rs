use crate::config::parse_port;
use anyhow::{Context, Result};
use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::fmt;

pub type ConnectionPool = Pool<Postgres>;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub name: String,
    pub port: u16,
    pub max_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    /// Reads `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_NAME`, `DB_PORT` and
    /// `DB_MAX_CONN` through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = lookup("DB_USER").context("Missing environment variable: DB_USER")?;
        let host = lookup("DB_HOST").context("Missing environment variable: DB_HOST")?;
        let name = lookup("DB_NAME").context("Missing environment variable: DB_NAME")?;
        let password = lookup("DB_PASSWORD").unwrap_or_default();

        let port = parse_port("DB_PORT", lookup("DB_PORT"), DEFAULT_DB_PORT)?;

        let max_connections = match lookup("DB_MAX_CONN") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            user,
            password,
            host,
            name,
            port,
            max_connections,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds the pool without opening a connection; the first query connects.
    pub fn new_pool(config: &DatabaseConfig) -> ConnectionPool {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(config.connect_options())
    }
}
