//! Output for extraction results.
//!
//! Two channels:
//! - JSON: the record array on stdout, the only stable output
//! - Diagnostics: free-form per-record lines on stderr

use std::io::Write;

use crate::extract::{FunctionRecord, RecordObserver};

// =============================================================================
// JSON Format
// =============================================================================

/// Render records as a pretty-printed JSON array.
pub fn to_json(records: &[FunctionRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records as one JSON document.
///
/// The document is rendered in full before anything is written.
pub fn write_json<W: Write>(out: &mut W, records: &[FunctionRecord]) -> anyhow::Result<()> {
    let json = to_json(records)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Observer printing progress lines to a writer (stderr in the CLI).
///
/// Write failures are ignored; diagnostics never fail a run.
pub struct DiagnosticWriter<W: Write> {
    out: W,
}

impl<W: Write> DiagnosticWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl DiagnosticWriter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> RecordObserver for DiagnosticWriter<W> {
    fn on_start(&mut self, count: usize) {
        let _ = writeln!(self.out, "DEBUG: Number of functions found: {}", count);
    }

    fn on_record(&mut self, record: &FunctionRecord) {
        let _ = writeln!(
            self.out,
            "DEBUG: Function {} - ImportPackage: {}",
            record.name, record.import_package
        );
        let _ = writeln!(
            self.out,
            "DEBUG: Function {} - BeforeFuncs: {:?}",
            record.name, record.before_funcs
        );
        let _ = writeln!(
            self.out,
            "DEBUG: Function {} - AfterFuncs: {:?}",
            record.name, record.after_funcs
        );
    }

    fn on_finish(&mut self) {
        let _ = writeln!(self.out, "DEBUG: Finished processing functions");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::NOT_EXIST;

    fn record(name: &str) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            params: NOT_EXIST.to_string(),
            body: "{}".to_string(),
            start_line: 3,
            end_line: 3,
            signature: format!("func {}()", name),
            import_package: NOT_EXIST.to_string(),
            before_funcs: vec![NOT_EXIST.to_string()],
            after_funcs: vec![NOT_EXIST.to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_json_key_order() {
        let json = to_json(&[record("main")]).unwrap();
        let keys: Vec<usize> = [
            "\"name\"",
            "\"params\"",
            "\"body\"",
            "\"start_line\"",
            "\"end_line\"",
            "\"signature\"",
            "\"import_package\"",
            "\"before_funcs\"",
            "\"after_funcs\"",
        ]
        .iter()
        .map(|k| json.find(k).unwrap_or_else(|| panic!("missing {}", k)))
        .collect();

        assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys out of order:\n{}", json);
        assert!(!json.contains("\"receiver\""));
    }

    #[test]
    fn test_empty_record_list_is_empty_array() {
        let mut out = Vec::new();
        write_json(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_diagnostics_lines() {
        let mut diag = DiagnosticWriter::new(Vec::new());
        diag.on_start(1);
        diag.on_record(&record("main"));
        diag.on_finish();

        let text = String::from_utf8(diag.into_inner()).unwrap();
        assert!(text.starts_with("DEBUG: Number of functions found: 1\n"));
        assert!(text.contains("DEBUG: Function main - ImportPackage: not exist"));
        assert!(text.ends_with("DEBUG: Finished processing functions\n"));
    }
}
