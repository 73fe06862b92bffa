use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::Options;

/// Name of the redirect middleware's table under `[middleware]`.
pub const REDIRECT_MIDDLEWARE: &str = "redirect";

/// Global configuration loaded from `~/.config/redir/config.toml`.
///
/// ```toml
/// [middleware.redirect]
/// baseurl = "https://cdn.example.com/blobs"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedirConfig {
    /// Options per middleware name, passed through untyped.
    #[serde(default)]
    pub middleware: BTreeMap<String, Options>,
}

impl RedirConfig {
    /// Options for middleware `name`; empty when the section is missing, so
    /// that validation reports the missing keys rather than a missing section.
    pub fn middleware_options(&self, name: &str) -> Options {
        self.middleware.get(name).cloned().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("redir")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RedirConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RedirConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<RedirConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: RedirConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
