use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE, DEFAULT_TABLE, ENV_KEY, ENV_TABLE, ENV_URL};

/// On-disk config; every field is optional so env vars can fill the gaps
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub table: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Resolved connection settings for the remote store
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    pub api_key: String,
    pub table: String,
    /// `None` means requests wait indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load from `path` (or the default location) and apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_path(),
        };
        let file = read_file(&path)?;
        Config::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file values with overrides from `env`
    pub fn resolve(file: Option<ConfigFile>, env: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let file = file.unwrap_or_default();
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let url = non_empty(env(ENV_URL)).or(non_empty(file.url));
        let api_key = non_empty(env(ENV_KEY)).or(non_empty(file.api_key));
        let table = non_empty(env(ENV_TABLE))
            .or(non_empty(file.table))
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        let Some(url) = url else {
            bail!("no store URL configured (set `url` in the config file or {})", ENV_URL);
        };
        let Some(api_key) = api_key else {
            bail!("no API key configured (set `api_key` in the config file or {})", ENV_KEY);
        };

        Ok(Config {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            table,
            request_timeout_secs: file.request_timeout_secs,
        })
    }
}

/// `~/.inventory-tui/config.yaml`
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// A missing file is not an error; a malformed one is
fn read_file(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, relying on environment");
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let file = serde_yaml::from_str(&content)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(Some(file))
}
