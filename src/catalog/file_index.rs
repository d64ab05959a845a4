use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tenancy::tenant::TenantId;

/// Metadata for one named file.
///
/// Records are immutable once inserted; a copy creates a new record,
/// never an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub size: u64,
    pub owner: TenantId,
}

/// Global file index keyed by file name.
///
/// An explicit hash map: uniqueness is enforced by callers checking
/// [`FileIndex::contains`] before insert, with no inherited-key lookup
/// hazards possible.
#[derive(Debug, Default)]
pub struct FileIndex {
    files: HashMap<String, FileRecord>,
}

impl FileIndex {
    pub fn new() -> Self {
        FileIndex {
            files: HashMap::new(),
        }
    }

    /// Insert or overwrite a record. Side effect only; callers must have
    /// already validated quota and uniqueness.
    pub fn put(&mut self, name: String, record: FileRecord) {
        self.files.insert(name, record);
    }

    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.files.get(name)
    }

    /// Delete a record, returning it. No-op if absent.
    pub fn remove(&mut self, name: &str) -> Option<FileRecord> {
        self.files.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate all records. Order is not meaningful; callers sort.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FileRecord)> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(size: u64) -> FileRecord {
        FileRecord {
            size,
            owner: TenantId::new("admin"),
        }
    }

    #[test]
    fn test_put_get_remove() {
        let mut index = FileIndex::new();
        index.put("a.txt".to_string(), record(100));

        assert!(index.contains("a.txt"));
        assert_eq!(index.get("a.txt").unwrap().size, 100);
        assert_eq!(index.len(), 1);

        let removed = index.remove("a.txt").unwrap();
        assert_eq!(removed.size, 100);
        assert!(!index.contains("a.txt"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut index = FileIndex::new();
        assert!(index.remove("missing").is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let mut index = FileIndex::new();
        index.put("a.txt".to_string(), record(100));
        index.put("a.txt".to_string(), record(50));
        assert_eq!(index.get("a.txt").unwrap().size, 50);
        assert_eq!(index.len(), 1);
    }
}
