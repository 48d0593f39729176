//! Configuration types for Quilt generation.
//!
//! This module provides configuration structures that control where layout
//! sources are resolved from and how generated resources are emitted. All
//! types implement [`serde::Deserialize`] for loading from external
//! sources (the CLI loads them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining path and style settings.
//! - [`PathsConfig`] - Source and resource directory roots.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Path configuration section.
    #[serde(default)]
    paths: PathsConfig,

    /// Optional path to a JSON style/theme overlay document
    /// (`{styleName: {key: value}}`), resolved relative to the source
    /// directory when not absolute.
    #[serde(default)]
    style_file: Option<PathBuf>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(paths: PathsConfig, style_file: Option<PathBuf>) -> Self {
        Self { paths, style_file }
    }

    /// Returns the path configuration.
    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }

    /// Returns the configured style overlay document path, if any.
    pub fn style_file(&self) -> Option<&Path> {
        self.style_file.as_deref()
    }

    /// Replaces the resource directory, keeping the other settings.
    pub fn set_resource_dir(&mut self, dir: impl Into<PathBuf>) {
        self.paths.resource_dir = dir.into();
    }
}

/// Directory roots consumed read-only by the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Root directory for resolving relative layout paths.
    #[serde(default = "PathsConfig::default_source_dir")]
    source_dir: PathBuf,

    /// Directory holding the persisted resource tables
    /// (`strings.json`, `colors.json`).
    #[serde(default = "PathsConfig::default_resource_dir")]
    resource_dir: PathBuf,
}

impl PathsConfig {
    fn default_source_dir() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_resource_dir() -> PathBuf {
        PathBuf::from("resources")
    }

    /// Returns the layout source root.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns the resource table directory.
    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: Self::default_source_dir(),
            resource_dir: Self::default_resource_dir(),
        }
    }
}
