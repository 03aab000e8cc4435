//! Correlation and windowing pipeline.
//!
//! Three passes over one [`FileTree`] followed by one pass over the records:
//!
//! 1. [`build_catalog`]: type declarations and per-type method lists
//! 2. [`collect`]: one [`FunctionRecord`] per declaration, bound by [`RecordId`]
//! 3. [`attach_bodies`]: body text through the bindings from step 2
//! 4. [`attach_windows`]: before/after neighbor bodies
//!
//! The pipeline never writes to a stream. Progress is reported through a
//! [`RecordObserver`].

mod bodies;
mod catalog;
mod collector;
mod record;
mod window;

use std::path::Path;

pub use bodies::attach_bodies;
pub use catalog::{build_catalog, SymbolCatalog};
pub use collector::{build_signature, collect, Binding, Collected};
pub use record::{FunctionRecord, RecordArena, RecordId, NOT_EXIST};
pub use window::{attach_windows, WindowConfig, DEFAULT_WINDOW_SIZE};

use crate::analysis::{get_analyzer, go_analyzer, FileTree, LanguageAnalyzer};
use crate::error::ExtractError;

/// Default prefix marking test functions whose bodies are not extracted.
pub const DEFAULT_TEST_PREFIX: &str = "Test";

/// Knobs for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Neighbor window bounds.
    pub window: WindowConfig,
    /// Functions whose name starts with this keep an empty body.
    pub test_prefix: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            test_prefix: DEFAULT_TEST_PREFIX.to_string(),
        }
    }
}

/// Per-run progress callbacks.
pub trait RecordObserver {
    /// Called once with the number of records about to be emitted.
    fn on_start(&mut self, _count: usize) {}

    /// Called for every finished record, in order.
    fn on_record(&mut self, _record: &FunctionRecord) {}

    /// Called after the last record.
    fn on_finish(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RecordObserver for NoopObserver {}

/// Split source text into lines the way line numbers count them.
pub fn split_lines(source: &str) -> Vec<String> {
    source.split('\n').map(str::to_string).collect()
}

/// Import literals for every record; the sentinel when the file has none.
fn import_package(tree: &FileTree) -> String {
    let imports = tree.import_list();
    if imports.is_empty() {
        NOT_EXIST.to_string()
    } else {
        imports
    }
}

/// Run the whole pipeline over an already lowered tree.
pub fn run(tree: &FileTree, lines: &[String], config: &ExtractConfig) -> Vec<FunctionRecord> {
    let catalog = build_catalog(tree, lines);
    let imports = import_package(tree);

    let Collected {
        mut records,
        bindings,
    } = collect(tree, &catalog, &imports);
    attach_bodies(&mut records, &bindings, lines, &config.test_prefix);
    attach_windows(records.as_mut_slice(), config.window);

    records.into_records()
}

/// Parse `source` as Go and run the pipeline on it.
pub fn extract_source(
    path: &Path,
    source: &str,
    config: &ExtractConfig,
) -> Result<Vec<FunctionRecord>, ExtractError> {
    let path_str = path.to_string_lossy().to_string();
    let analyzer = go_analyzer();
    let parsed = analyzer
        .parse(path, source.as_bytes())
        .map_err(|e| ExtractError::parse(&path_str, e))?;
    let tree = analyzer
        .extract_tree(&parsed)
        .map_err(|e| ExtractError::parse(&path_str, e))?;

    Ok(run(&tree, &split_lines(source), config))
}

/// Read, parse and extract one file, reporting each record to `observer`.
///
/// The file is read twice: once for the parser and once for line slicing.
pub fn extract_file(
    path: &Path,
    config: &ExtractConfig,
    observer: &mut dyn RecordObserver,
) -> Result<Vec<FunctionRecord>, ExtractError> {
    let path_str = path.to_string_lossy().to_string();
    let analyzer = go_analyzer();

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if get_analyzer(ext).is_none() {
        tracing::warn!(path = %path_str, "not a .go file, parsing as Go anyway");
    }

    let bytes = std::fs::read(path).map_err(|e| ExtractError::Parse {
        path: path_str.clone(),
        message: format!("{}: {}", path_str, e),
    })?;
    let parsed = analyzer
        .parse(path, &bytes)
        .map_err(|e| ExtractError::parse(&path_str, e))?;
    let tree = analyzer
        .extract_tree(&parsed)
        .map_err(|e| ExtractError::parse(&path_str, e))?;
    tracing::debug!(
        path = %path_str,
        language = analyzer.language_id(),
        package = tree.package.as_deref().unwrap_or(""),
        imports = tree.imports.len(),
        declarations = tree.declarations.len(),
        "parsed source"
    );

    let lines = read_source_lines(path)?;
    let records = run(&tree, &lines, config);

    observer.on_start(records.len());
    for record in &records {
        observer.on_record(record);
    }
    observer.on_finish();

    Ok(records)
}

/// Re-read the file as lines for literal slicing.
pub fn read_source_lines(path: &Path) -> Result<Vec<String>, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::SourceRead {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}
