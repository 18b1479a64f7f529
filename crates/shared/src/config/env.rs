use anyhow::{Context, Result};

/// `true` and `1` enable a flag; anything else, or an absent variable, disables it.
pub fn env_flag(value: Option<String>) -> bool {
    value
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

pub fn parse_port(key: &str, value: Option<String>, default: u16) -> Result<u16> {
    match value {
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("{key} must be a valid u16 integer")),
        None => Ok(default),
    }
}
