//! Per-function output records and the arena that owns them.

use serde::{Deserialize, Serialize};

/// Placeholder used when a field would otherwise be empty.
pub const NOT_EXIST: &str = "not exist";

/// One enriched function or method record.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    pub params: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub body: String,
    pub start_line: usize,
    pub end_line: usize,
    pub signature: String,
    pub import_package: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub before_funcs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub after_funcs: Vec<String>,
}

/// Stable index of a record, assigned when the declaration is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Records in declaration order, addressed by [`RecordId`].
#[derive(Debug, Clone, Default)]
pub struct RecordArena {
    records: Vec<FunctionRecord>,
}

impl RecordArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its id.
    pub fn push(&mut self, record: FunctionRecord) -> RecordId {
        let id = RecordId(self.records.len());
        self.records.push(record);
        id
    }

    pub fn get(&self, id: RecordId) -> &FunctionRecord {
        &self.records[id.0]
    }

    pub fn get_mut(&mut self, id: RecordId) -> &mut FunctionRecord {
        &mut self.records[id.0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[FunctionRecord] {
        &self.records
    }

    pub fn as_mut_slice(&mut self) -> &mut [FunctionRecord] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<FunctionRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_ids_follow_insertion_order() {
        let mut arena = RecordArena::new();
        let a = arena.push(FunctionRecord {
            name: "A".to_string(),
            ..Default::default()
        });
        let b = arena.push(FunctionRecord {
            name: "A".to_string(),
            start_line: 3,
            ..Default::default()
        });

        assert_ne!(a, b);
        assert_eq!(b.index(), 1);
        arena.get_mut(b).body = "{}".to_string();
        assert_eq!(arena.get(a).body, "");
        assert_eq!(arena.get(b).body, "{}");
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let record = FunctionRecord {
            name: "f".to_string(),
            params: NOT_EXIST.to_string(),
            start_line: 1,
            end_line: 1,
            signature: "func f()".to_string(),
            import_package: NOT_EXIST.to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("receiver"));
        assert!(!obj.contains_key("returns"));
        assert!(!obj.contains_key("doc"));
        assert!(!obj.contains_key("before_funcs"));
        assert_eq!(obj["params"], "not exist");
        assert_eq!(obj["body"], "");
    }
}
