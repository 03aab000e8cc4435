//! Core traits for the syntax front end.

use std::path::Path;

use super::FileTree;

/// Holds a parsed tree-sitter tree and associated metadata.
///
/// The tree is lowered into a [`FileTree`] once; nothing downstream keeps it.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source code (kept for node text extraction).
    pub source: Vec<u8>,
    /// The file path (for error reporting).
    pub path: String,
}

impl ParsedFile {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}

/// Language-specific front end.
///
/// Note: tree_sitter::Parser is not Sync, so implementations create a
/// parser per call.
pub trait LanguageAnalyzer: Send + Sync {
    /// Returns the language identifier (e.g., "go").
    fn language_id(&self) -> &'static str;

    /// Returns file extensions this analyzer handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Parse a source file into a tree-sitter tree.
    ///
    /// Returns an error if the source does not parse cleanly; a tree with
    /// ERROR or MISSING nodes is rejected rather than partially lowered.
    fn parse(&self, path: &Path, source: &[u8]) -> anyhow::Result<ParsedFile>;

    /// Lower a parsed file into the declaration tree.
    fn extract_tree(&self, parsed: &ParsedFile) -> anyhow::Result<FileTree>;

    /// Check if this analyzer handles the given file extension.
    fn handles_extension(&self, ext: &str) -> bool {
        self.file_extensions().contains(&ext)
    }
}
