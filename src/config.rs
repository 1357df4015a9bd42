//! Process configuration parsed from environment variables.
//!
//! All settings are optional. A `.env` file in the working directory is
//! loaded first when present.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4005;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub templates_dir: PathBuf,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 4005
    /// - `TEMPLATES_DIR`: default `templates/` under the crate root
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or("HOST", lookup("HOST"), DEFAULT_HOST)?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let templates_dir = lookup("TEMPLATES_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_templates_dir, PathBuf::from);

        Ok(Self { host, port, templates_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[must_use]
pub fn default_templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
