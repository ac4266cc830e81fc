//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while assembling server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// Leptos build options (`[package.metadata.leptos]` / `LEPTOS_*`) were unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with public assets (logo). `None` serves the Leptos site root.
    pub public_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `PUBLIC_DIR`: static asset directory, default the Leptos site root
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = non_blank(std::env::var("HOST").ok()).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let public_dir = non_blank(std::env::var("PUBLIC_DIR").ok()).map(PathBuf::from);
        Ok(Self { host, port, public_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => match value.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
            Ok(port) => Ok(port),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
