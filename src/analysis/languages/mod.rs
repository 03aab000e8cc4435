//! Language-specific front ends.

mod go;

pub use go::GoAnalyzer;

use super::LanguageAnalyzer;
use once_cell::sync::OnceCell;

/// Static storage for Go analyzer.
static GO_ANALYZER: OnceCell<GoAnalyzer> = OnceCell::new();

/// Get the shared Go analyzer, creating it on first use.
pub fn go_analyzer() -> &'static GoAnalyzer {
    GO_ANALYZER.get_or_init(GoAnalyzer::new)
}

/// Get an analyzer for the given file extension.
///
/// Returns None if no analyzer handles the extension.
pub fn get_analyzer(ext: &str) -> Option<&'static dyn LanguageAnalyzer> {
    let go = go_analyzer();
    if go.handles_extension(ext) {
        Some(go as &'static dyn LanguageAnalyzer)
    } else {
        None
    }
}
