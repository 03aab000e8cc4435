//! Literal body text for each bound record.

use super::collector::Binding;
use super::record::RecordArena;

/// Copy each declaration's body lines into the record it is bound to.
///
/// Declarations whose name starts with `test_prefix` keep an empty body.
pub fn attach_bodies(
    records: &mut RecordArena,
    bindings: &[Binding<'_>],
    lines: &[String],
    test_prefix: &str,
) {
    let mut attached = 0usize;

    for binding in bindings {
        if !test_prefix.is_empty() && binding.decl.name.starts_with(test_prefix) {
            continue;
        }
        let Some(body) = &binding.decl.body else {
            continue;
        };
        if let Some(text) = body.slice_lines(lines) {
            records.get_mut(binding.id).body = text;
            attached += 1;
        }
    }

    tracing::debug!(attached, total = records.len(), "attached function bodies");
}
