//! Location of `config.toml`.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// File name looked up inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under `$HOME/.config`.
const APP_DIR_NAME: &str = "chardex";

/// Returns the path of `config.toml`.
///
/// `--dir` takes precedence; without it the file lives in
/// `$HOME/.config/chardex/`. The file itself may not exist yet.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and `HOME` is unset.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    let base = match dir {
        Some(d) => d.clone(),
        None => default_config_dir()?,
    };
    Ok(base.join(CONFIG_FILE_NAME))
}

/// `$HOME/.config/chardex`.
fn default_config_dir() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .context("cannot locate the chardex config directory: HOME is not set")?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}
