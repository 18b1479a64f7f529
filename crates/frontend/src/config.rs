use anyhow::Result;
use shared::config::{env_flag, parse_port};

const DEFAULT_API_URL: &str = "http://ecommerce-backend:8080";
const DEFAULT_PORT: u16 = 80;
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Data Service base URL, without a trailing slash.
    pub api_url: String,
    pub static_dir: String,
    pub expose_config_endpoint: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let api_url = lookup("API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let expose_config_endpoint = env_flag(lookup("EXPOSE_CONFIG_ENDPOINT"));

        Ok(Self {
            port,
            api_url,
            static_dir,
            expose_config_endpoint,
        })
    }
}
