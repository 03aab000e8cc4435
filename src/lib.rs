//! gofuncctx - per-function context records for Go source files.
//!
//! Parses one Go file and emits, for every function and method, a record
//! with its signature, the declarations of the types it touches and the
//! bodies of the functions around it. The records feed dataset builders
//! for code-understanding models.
//!
//! # Architecture
//!
//! - `analysis`: tree-sitter front end lowering Go source into a `FileTree`
//! - `extract`: catalog, collection, body and window passes over the tree
//! - `report`: JSON output and stderr diagnostics
//! - `cli`: argument handling and exit codes

pub mod analysis;
pub mod cli;
pub mod error;
pub mod extract;
pub mod report;

pub use analysis::{FileTree, GoAnalyzer, LanguageAnalyzer};
pub use error::ExtractError;
pub use extract::{
    extract_file, extract_source, ExtractConfig, FunctionRecord, RecordObserver, WindowConfig,
    NOT_EXIST,
};
