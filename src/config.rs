mod types;

pub use types::{
    Config, DEFAULT_AUTOCOMPLETE_URL, DEFAULT_SEARCH_URL, RemoteConfig, SearchConfig,
    SuggestionConfig,
};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UrlbarError;

/// Loaded configuration plus a warning to surface when the file was unusable
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default config location: `~/.config/urlbar/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("urlbar").join("config.toml"))
}

/// Load the config from `path`, or from the default location when `None`
///
/// A missing file yields defaults. A file that cannot be read or parsed also
/// yields defaults, with the reason in `warning`.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} (using defaults)", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, UrlbarError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| UrlbarError::Config(e.message().to_string()))
}
