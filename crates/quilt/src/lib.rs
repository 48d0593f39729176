//! Quilt - a JSON layout compiler for Android resources.
//!
//! Translates declarative JSON UI documents into Android layout XML,
//! extracting string and color literals into shared resource tables and
//! synthesizing drawable resources for shaped, stateful, or interactive
//! backgrounds.

pub mod config;

mod classify;
mod drawable;
mod error;
mod export;
mod generate;
mod node;
mod resources;

pub use quilt_core::{attribute, color, component, dimension};

pub use drawable::DrawableSpec;
pub use error::QuiltError;
pub use export::{render_drawable, render_layout};
pub use generate::{DrawableArtifact, FileOutput, GeneratedNode};
pub use node::{LayoutDocument, LayoutNode, StyleSheet};
pub use resources::ResourceTable;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use config::AppConfig;

/// One compiled layout file: the rendered layout document plus its
/// drawable documents and bound variables.
#[derive(Debug, Clone)]
pub struct CompiledFile {
    pub name: String,
    pub layout_xml: String,
    /// Drawable resource documents as `(name, xml)` pairs.
    pub drawables: Vec<(String, String)>,
    pub variables: Vec<String>,
}

/// Per-file outcome counts for one batch invocation.
///
/// A malformed input file is skipped; a read or write failure marks the
/// file failed. Neither aborts the rest of the batch. A non-zero failed
/// count is the batch's failure signal to its caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchReport {
    /// Returns `true` when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Compiler for JSON layout documents.
///
/// # Examples
///
/// ```rust,no_run
/// use quilt::{LayoutCompiler, ResourceTable, config::AppConfig};
///
/// let source = r#"{"type": "Text", "text": "Hello World"}"#;
///
/// let compiler = LayoutCompiler::new(AppConfig::default());
/// let mut resources = ResourceTable::new();
/// let compiled = compiler
///     .compile(source, "home", &mut resources)
///     .expect("failed to compile");
///
/// println!("{}", compiled.layout_xml);
/// ```
pub struct LayoutCompiler {
    config: AppConfig,
    sheet: StyleSheet,
}

impl Default for LayoutCompiler {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl LayoutCompiler {
    /// Creates a compiler with the given configuration, loading the style
    /// sheet it names. A missing or malformed style sheet is non-fatal.
    pub fn new(config: AppConfig) -> Self {
        let sheet = match config.style_file() {
            Some(path) => match fs::read_to_string(path) {
                Ok(source) => StyleSheet::parse(&source),
                Err(err) => {
                    warn!(path:? = path, err:% = err; "Failed to read style sheet; ignoring");
                    StyleSheet::new()
                }
            },
            None => StyleSheet::new(),
        };
        Self { config, sheet }
    }

    /// Parses layout source text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::MalformedLayout`] for unparseable JSON or a
    /// structurally invalid tree.
    pub fn parse(&self, source: &str, path: &str) -> Result<LayoutDocument, QuiltError> {
        LayoutDocument::parse(source, path)
    }

    /// Compiles one layout source to its rendered XML documents.
    ///
    /// `name` is the file stem: it namespaces extracted string keys and
    /// generated drawable names. `resources` is the batch-wide table;
    /// extraction appends to it so later files in the same run reuse
    /// earlier keys.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::MalformedLayout`] for unparseable input.
    pub fn compile(
        &self,
        source: &str,
        name: &str,
        resources: &mut ResourceTable,
    ) -> Result<CompiledFile, QuiltError> {
        info!(name; "Compiling layout");

        let mut document = self.parse(source, name)?;
        generate::apply_styles(document.root_mut(), &self.sheet);

        let (strings, colors) = resources.tables_mut();
        resources::extract_document(&mut document, name, strings, colors);

        let output = generate::generate_document(&document, name, colors);
        debug!(
            name,
            drawables = output.drawables.len(),
            variables = output.variables.len();
            "Layout generated"
        );

        Ok(CompiledFile {
            name: output.name.clone(),
            layout_xml: export::render_layout(&output.root),
            drawables: output
                .drawables
                .iter()
                .map(|d| (d.name.clone(), export::render_drawable(&d.spec)))
                .collect(),
            variables: output.variables,
        })
    }

    /// Compiles a batch of layout files, writing layout and drawable XML
    /// under the configured resource directory and persisting the shared
    /// resource tables once at the end.
    ///
    /// Per-file errors never abort the batch; they are logged and counted
    /// in the returned report.
    ///
    /// # Errors
    ///
    /// Returns an error only when the resource tables cannot be persisted
    /// after the batch completes.
    pub fn run_batch(&self, files: &[PathBuf]) -> Result<BatchReport, QuiltError> {
        let resource_dir = self.config.paths().resource_dir();
        let mut resources = ResourceTable::load(resource_dir);
        let mut report = BatchReport::default();

        for path in files {
            match self.process_file(path, &mut resources) {
                Ok(()) => report.passed += 1,
                Err(err) if err.is_malformed() => {
                    warn!(path:? = path, err:% = err; "Skipping malformed layout");
                    report.skipped += 1;
                }
                Err(err) => {
                    warn!(path:? = path, err:% = err; "Layout failed");
                    report.failed += 1;
                }
            }
        }

        resources.persist(resource_dir)?;
        info!(
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped;
            "Batch finished"
        );
        Ok(report)
    }

    fn process_file(&self, path: &Path, resources: &mut ResourceTable) -> Result<(), QuiltError> {
        let source = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "layout".to_string());

        let compiled = self.compile(&source, &name, resources)?;

        let resource_dir = self.config.paths().resource_dir();
        let layout_dir = resource_dir.join("layout");
        fs::create_dir_all(&layout_dir)?;
        fs::write(
            layout_dir.join(format!("{name}.xml")),
            &compiled.layout_xml,
        )?;

        if !compiled.drawables.is_empty() {
            let drawable_dir = resource_dir.join("drawable");
            fs::create_dir_all(&drawable_dir)?;
            for (drawable_name, xml) in &compiled.drawables {
                fs::write(drawable_dir.join(format!("{drawable_name}.xml")), xml)?;
            }
        }
        Ok(())
    }
}
