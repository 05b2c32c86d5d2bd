//! Config file discovery and loading for `.tera-render.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.tera-render.toml` (project-local)
//! 2. `~/.config/tera-render.toml` (user-global)
//!
//! An explicit `--config` path replaces discovery.

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".tera-render.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "tera-render.toml";

/// A loaded config plus what happened while loading it.
///
/// Loading runs before the subscriber exists (the config carries the log filter), so
/// the outcome is kept and logged by [`LoadedConfig::report`] once logging is up.
#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub config: CliConfig,
    path: Option<PathBuf>,
    problem: Option<String>,
}

impl LoadedConfig {
    pub(crate) fn report(&self) {
        match (&self.path, &self.problem) {
            (Some(path), Some(problem)) => {
                tracing::warn!(?path, error = %problem, "Failed to load CLI config, using defaults");
            }
            (Some(path), None) => tracing::debug!(?path, "Loaded CLI config"),
            (None, _) => tracing::debug!("No CLI config found, using defaults"),
        }
    }
}

/// Load CLI config from `explicit`, else the first discovered location, else defaults.
pub(crate) fn load_cli_config(explicit: Option<&Path>) -> LoadedConfig {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(find_config_file) else {
        return LoadedConfig {
            config: CliConfig::default(),
            path: None,
            problem: None,
        };
    };

    let (config, problem) = match read_config(&path) {
        Ok(config) => (config, None),
        Err(problem) => (CliConfig::default(), Some(problem)),
    };
    LoadedConfig {
        config,
        path: Some(path),
        problem,
    }
}

fn read_config(path: &Path) -> Result<CliConfig, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    toml::from_str(&contents).map_err(|e| e.to_string())
}

/// Search for config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let global = home_dir()?.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
