use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$CONFDL_HOME`, else `~/.confdl`.
pub fn confdl_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("CONFDL_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".confdl"))
}

pub fn ensure_confdl_home() -> Result<PathBuf> {
    let dir = confdl_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
