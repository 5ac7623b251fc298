use anyhow::Context;
use folio_core::config::{Config, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Locate the config file.
///
/// Priority:
/// 1. `--config` flag / `FOLIO_CONFIG` env var (passed in as `explicit`)
/// 2. `folio.yaml` in the current directory
/// 3. `.folio.yaml` in the home directory
///
/// `None` means no file exists and the built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    let local = std::env::current_dir()
        .map(|cwd| cwd.join(CONFIG_FILE))
        .ok()
        .filter(|p| p.is_file());
    if local.is_some() {
        return local;
    }

    home::home_dir()
        .map(|home| home.join(format!(".{CONFIG_FILE}")))
        .filter(|p| p.is_file())
}

/// Load the config the way every command sees it. An explicit path must
/// exist; discovered files and defaults are taken as found.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = resolve_config_path(explicit);
    let config = match &path {
        Some(p) => {
            Config::load(p).with_context(|| format!("failed to load config {}", p.display()))?
        }
        None => Config::default(),
    };
    tracing::debug!(path = ?path, "config resolved");
    Ok((config, path))
}

/// [`load`] followed by a hard check of error-level findings.
pub fn load_valid(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let (config, _) = load(explicit)?;
    config.ensure_valid()?;
    for warning in config.validate() {
        tracing::warn!("{}", warning.message);
    }
    Ok(config)
}
