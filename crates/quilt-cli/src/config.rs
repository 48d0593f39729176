//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files from
//! an explicit path or the local project directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use quilt::{QuiltError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for QuiltError {
    fn from(err: ConfigError) -> Self {
        QuiltError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Find and load configuration.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (quilt/config.toml)
/// 3. Default config if none found
///
/// # Errors
///
/// Returns an error if an explicit path is provided but the file doesn't
/// exist, or if a config file exists but cannot be parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, QuiltError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("quilt/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, QuiltError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
