use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scope::ScopeMatcher;

/// Global configuration loaded from `~/.config/linkscope/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkscopeConfig {
    /// Default scope regexes, tested against hostnames.
    #[serde(default)]
    pub scope_patterns: Vec<String>,
    /// Wrap each scope pattern as `^(?:...)$` so it must match the whole hostname.
    #[serde(default)]
    pub anchor_scope_patterns: bool,
    /// Raw `Cookie` header used when none is given on the command line.
    #[serde(default)]
    pub cookie: Option<String>,
}

impl LinkscopeConfig {
    /// Compiles the configured scope patterns.
    pub fn scope_matcher(&self) -> Result<ScopeMatcher> {
        let matcher = if self.anchor_scope_patterns {
            ScopeMatcher::anchored(&self.scope_patterns)?
        } else {
            ScopeMatcher::new(&self.scope_patterns)?
        };
        Ok(matcher)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscope")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkscopeConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LinkscopeConfig> {
    if !path.exists() {
        let default_cfg = LinkscopeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinkscopeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
