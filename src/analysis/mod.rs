//! Syntax front end.
//!
//! Parses a source file with tree-sitter and lowers it into a [`FileTree`]
//! of plain declaration values:
//! - Imports (path literals)
//! - Type specs (top-level and nested in function bodies)
//! - Function and method declarations with their field lists and body spans
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Source File     │────▶│ GoAnalyzer   │────▶│ FileTree      │
//! └─────────────────┘     │ (tree-sitter)│     │ (Imports,     │
//!                         └──────────────┘     │  Types, Funcs)│
//!                                              └───────────────┘
//!                                                      │
//!                                                      ▼
//!                                              ┌───────────────┐
//!                                              │ extract       │
//!                                              │ pipeline      │
//!                                              └───────────────┘
//! ```

mod facts;
mod languages;
mod traits;

pub use facts::{
    Declaration, Field, FieldList, FileTree, FuncDecl, Import, Span, TypeExpr, TypeSpec,
};
pub use languages::{get_analyzer, go_analyzer, GoAnalyzer};
pub use traits::{LanguageAnalyzer, ParsedFile};
