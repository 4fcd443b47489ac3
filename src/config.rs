//! Site configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENT_DIR: &str = "content/work";
pub const DEFAULT_ASSETS_DIR: &str = "public";
pub const DEFAULT_SITE_NAME: &str = "Techveda";
pub const DEFAULT_CONTENT_LOAD_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Directory holding one Markdown file per case study.
    pub content_dir: PathBuf,
    /// Static asset root; `images/` and `assets/` are served from here.
    pub assets_dir: PathBuf,
    pub site_name: String,
    pub content_load_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            site_name: DEFAULT_SITE_NAME.to_owned(),
            content_load_timeout_secs: DEFAULT_CONTENT_LOAD_TIMEOUT_SECS,
        }
    }
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_DIR`: default `content/work`
    /// - `ASSETS_DIR`: default `public`
    /// - `SITE_NAME`: default `Techveda`
    /// - `CONTENT_LOAD_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let content_dir = lookup("CONTENT_DIR").map_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR), PathBuf::from);
        let assets_dir = lookup("ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);
        let site_name = lookup("SITE_NAME")
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned());
        let content_load_timeout_secs = lookup("CONTENT_LOAD_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_CONTENT_LOAD_TIMEOUT_SECS);

        Ok(Self { port, content_dir, assets_dir, site_name, content_load_timeout_secs })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
