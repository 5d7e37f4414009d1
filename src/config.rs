use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::locale::Locale;
use crate::plot::PlotSettings;
use crate::DEFAULT_TOLERANCE;

/// Settings read from `~/.ratroots/config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub locale: Option<Locale>,
  pub tolerance: f64,
  pub plot: PlotSettings,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      locale: None,
      tolerance: DEFAULT_TOLERANCE,
      plot: PlotSettings::default(),
    }
  }
}

pub fn default_config_path() -> Option<PathBuf> {
  // ~/.ratroots/config.toml
  dirs_next::home_dir().map(|h| h.join(".ratroots").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
  if let Some(p) = cli_path {
    return Some(p.clone());
  }
  default_config_path()
}

impl Config {
  pub fn from_toml_str(text: &str) -> Result<Self> {
    let config: Config = toml::from_str(text).context("Parse config TOML")?;
    if !(config.tolerance.is_finite() && config.tolerance >= 0.0) {
      anyhow::bail!("tolerance must be a non-negative number");
    }
    Ok(config)
  }

  /// Load from `path`. A missing file yields the defaults.
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      tracing::debug!(path = %path.display(), "no config file, using defaults");
      return Ok(Self::default());
    }
    let text = std::fs::read_to_string(path)
      .with_context(|| format!("Read config {}", path.display()))?;
    Self::from_toml_str(&text)
      .with_context(|| format!("Load config {}", path.display()))
  }
}
