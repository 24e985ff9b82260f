//! User settings from `~/.quadratic/config.toml` (or `--config FILE`).
//!
//! ```toml
//! precision = 3
//! samples = 80
//! color = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places in the console report.
    pub precision: u32,
    /// Points sampled along the parabola for `--plot`.
    pub samples: usize,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { precision: 2, samples: 50, color: true }
    }
}

impl Config {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Missing file → defaults. An unreadable or malformed file is reported
    /// as a warning and defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(p) = path else {
            return Self::default();
        };
        if !p.exists() {
            crate::debug_log!("config {} not found, using defaults", p.display());
            return Self::default();
        }
        match Self::from_toml_file(p) {
            Ok(cfg) => {
                crate::debug_log!("config {} -> {:?}", p.display(), cfg);
                cfg
            }
            Err(e) => {
                eprintln!("(warn) {e:#}; using defaults");
                Self::default()
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.quadratic/config.toml
    dirs_next::home_dir().map(|h| h.join(".quadratic").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
