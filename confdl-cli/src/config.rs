use anyhow::{Context, Result};
use confdl_core::{CategoryTable, TrackedConference, default_tracked};
use confdl_fetch::{DEFAULT_BASE_URL, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{confdl_home, ensure_confdl_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub categories: CategoryTable,
    #[serde(default = "default_tracked")]
    pub tracked: Vec<TrackedConference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Dataset root; documents live at `<base_url>/<sub>/<name>.<extension>`.
    pub base_url: String,
    pub extension: String,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceSection::default(),
            categories: CategoryTable::default(),
            tracked: default_tracked(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(confdl_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_confdl_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}
