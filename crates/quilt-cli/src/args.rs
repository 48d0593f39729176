//! Command-line argument definitions for the Quilt CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control which layout files are compiled,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Quilt layout compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Layout files or directories to compile. Directories are scanned
    /// for .json layout files.
    #[arg(required = true, help = "Layout files or directories")]
    pub inputs: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Resource directory override (generated layouts, drawables, and
    /// resource tables land here)
    #[arg(long)]
    pub res_dir: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
