//! CLI logic for the Quilt layout compiler.
//!
//! Collects layout files from the command line, runs them through the
//! compiler as one batch, and reports per-file pass/fail/skip counts.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::PathBuf};

use log::{info, warn};

use quilt::{BatchReport, LayoutCompiler, QuiltError};

/// Run the Quilt CLI application.
///
/// Resolves the configured compiler, expands the input arguments into a
/// layout file list, and compiles them as one batch. A non-empty failed
/// count in the returned report is the caller's failure signal; it is not
/// an `Err`.
///
/// # Errors
///
/// Returns `QuiltError` for configuration loading errors and for a failed
/// resource table write at the end of the batch. Per-file compile errors
/// are counted in the report instead.
pub fn run(args: &Args) -> Result<BatchReport, QuiltError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(dir) = &args.res_dir {
        app_config.set_resource_dir(dir);
    }

    let files = collect_layout_files(&args.inputs)?;
    info!(files = files.len(); "Compiling layout batch");

    let compiler = LayoutCompiler::new(app_config);
    compiler.run_batch(&files)
}

/// Expands input arguments into an ordered layout file list. Directory
/// arguments are scanned (non-recursively) for `.json` files, sorted for
/// deterministic batch order.
fn collect_layout_files(inputs: &[String]) -> Result<Vec<PathBuf>, QuiltError> {
    let mut files = Vec::new();
    for input in inputs {
        let path = PathBuf::from(input);
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(&path)?
                .flatten()
                .map(|entry| entry.path())
                .filter(|p| {
                    p.is_file() && p.extension().and_then(|ext| ext.to_str()) == Some("json")
                })
                .collect();
            entries.sort();
            if entries.is_empty() {
                warn!(dir = input; "No .json layout files found in directory");
            }
            files.extend(entries);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}
