//! CLI defaults from `~/.quantinf/config.toml`.
//!
//! ```toml
//! [defaults]
//! base = 2.0
//! precision = 6
//! format = "table"
//! negativity_mask = [1, 0]
//! peres_mask = [0, 1]
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::core::measures::{DEFAULT_ENTROPY_BASE, NEGATIVITY_MASK, PERES_HORODECKI_MASK};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: Defaults,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Log base for the von Neumann family.
    pub base: f64,
    /// Decimal digits in table output.
    pub precision: usize,
    pub format: OutputFormat,
    pub negativity_mask: Vec<u8>,
    pub peres_mask: Vec<u8>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            base: DEFAULT_ENTROPY_BASE,
            precision: 6,
            format: OutputFormat::Table,
            negativity_mask: NEGATIVITY_MASK.to_vec(),
            peres_mask: PERES_HORODECKI_MASK.to_vec(),
        }
    }
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.quantinf/config.toml
    dirs_next::home_dir().map(|h| h.join(".quantinf").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load the config named on the command line, else the per-user file, else
/// built-in defaults. A file that exists but does not parse is an error.
pub fn load(cli_path: &Option<PathBuf>) -> Result<Config> {
    match resolve_config_path(cli_path) {
        Some(p) if p.exists() => Config::from_toml_file(&p),
        Some(p) => {
            if cli_path.is_some() {
                eprintln!("{} config path not found: {}", "warn:".yellow().bold(), p.display());
            }
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}
