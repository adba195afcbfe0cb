//! Config loading for the host. Values missing from the file keep their defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pong_core::Config;
use tracing::{info, warn};

use crate::HostError;

pub const CONFIG_ENV_VAR: &str = "PONG_CONFIG";

/// The explicit path if given, else `$PONG_CONFIG`
pub fn config_path(explicit: Option<&str>) -> Option<PathBuf> {
    explicit
        .map(PathBuf::from)
        .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// Load a JSON config, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<Config, HostError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<Config, HostError> {
    let config: Config = serde_json::from_str(text)?;
    if config.win_score == 0 {
        warn!("win_score 0 raised to 1");
    }
    Ok(config.normalized())
}
