use anyhow::{Context, Result, bail};
use dirs::config_dir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shape of config.toml on disk
///
/// Example:
/// default_limit = 10
/// json = false
/// user_agent = "my-reader/1.0"
/// timeout_secs = 30
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub default_limit: Option<usize>,
    pub json: Option<bool>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolved config used by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` prints every item
    pub default_limit: Option<usize>,
    pub json: bool,
    pub user_agent: String,
    /// `None` waits as long as the server takes
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_limit: None,
            json: false,
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

fn default_user_agent() -> String {
    concat!("rss-reader/", env!("CARGO_PKG_VERSION")).to_string()
}

pub fn config_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rss-reader")
        .join("config.toml")
}

/// Load config from ~/.config/rss-reader/config.toml if it exists,
/// otherwise use the defaults (all items, text output, no timeout).
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let raw: RawConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

    resolve(raw)
}

pub fn resolve(raw: RawConfig) -> Result<Config> {
    if raw.default_limit == Some(0) {
        bail!("default_limit must be at least 1");
    }

    Ok(Config {
        default_limit: raw.default_limit,
        json: raw.json.unwrap_or(false),
        user_agent: raw.user_agent.unwrap_or_else(default_user_agent),
        timeout: raw.timeout_secs.map(Duration::from_secs),
    })
}
