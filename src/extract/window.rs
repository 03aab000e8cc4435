//! Neighboring-body context windows.

use super::record::{FunctionRecord, NOT_EXIST};

/// Default number of neighbors kept on each side.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Bounds for the before/after context lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Maximum entries in each list.
    pub size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// Fill `before_funcs`/`after_funcs` for every record.
///
/// Neighbors are taken by position, so a record skipped for an empty body
/// or a shared name shrinks the window instead of being back-filled.
pub fn attach_windows(records: &mut [FunctionRecord], window: WindowConfig) {
    let size = window.size;

    for i in 0..records.len() {
        let name = records[i].name.as_str();
        let eligible = |r: &FunctionRecord| r.name != name && !r.body.is_empty();

        let before: Vec<String> = records[i.saturating_sub(size)..i]
            .iter()
            .filter(|r| eligible(*r))
            .map(|r| r.body.clone())
            .collect();

        let after_end = records.len().min(i.saturating_add(size).saturating_add(1));
        let mut after: Vec<String> = records[i + 1..after_end]
            .iter()
            .filter(|r| eligible(*r))
            .map(|r| r.body.clone())
            .collect();
        after.truncate(size);

        records[i].before_funcs = finalize(before);
        records[i].after_funcs = finalize(after);
    }

    tracing::debug!(records = records.len(), size, "attached context windows");
}

/// Drop empty entries; an empty list becomes the sentinel list.
fn finalize(mut bodies: Vec<String>) -> Vec<String> {
    bodies.retain(|b| !b.is_empty());
    if bodies.is_empty() {
        vec![NOT_EXIST.to_string()]
    } else {
        bodies
    }
}
