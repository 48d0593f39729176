//! Error types for Quilt generation.
//!
//! This module provides the main error type [`QuiltError`] which wraps the
//! error conditions that can occur while processing a batch of layout
//! files. Per-file errors are caught at the batch boundary and reported in
//! the batch summary; they never abort the rest of the batch.

use std::io;

use thiserror::Error;

/// The main error type for Quilt operations.
#[derive(Debug, Error)]
pub enum QuiltError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout document could not be parsed or lacks required structure
    /// (e.g. a node without a `type` tag). The offending file is skipped.
    #[error("malformed layout `{path}`: {message}")]
    MalformedLayout { path: String, message: String },

    /// A resource table could not be written back.
    #[error("resource table error: {0}")]
    Resources(String),
}

impl QuiltError {
    /// Creates a `MalformedLayout` error for the given source path.
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedLayout {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for malformed-input errors, which the batch driver
    /// counts as skipped rather than failed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedLayout { .. })
    }
}
