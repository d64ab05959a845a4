use std::cmp::Ordering;

use super::StorageLedger;

/// Shared ordering for search results and eviction candidates:
/// size descending, ties broken by name ascending.
pub(crate) fn size_desc_name_asc(a: &(String, u64), b: &(String, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

impl StorageLedger {
    /// Find every file whose name starts with `prefix` and ends with
    /// `suffix` (overlapping or empty affixes both match).
    ///
    /// Returns a freshly computed snapshot of `"name(size)"` entries, not
    /// a live view; the index is re-sorted on every call so the order is
    /// stable regardless of hash-map iteration order.
    pub fn find_file(&self, prefix: &str, suffix: &str) -> Vec<String> {
        let mut matches: Vec<(String, u64)> = self
            .files
            .iter()
            .filter(|(name, _)| name.starts_with(prefix) && name.ends_with(suffix))
            .map(|(name, record)| (name.clone(), record.size))
            .collect();

        matches.sort_unstable_by(size_desc_name_asc);

        matches
            .into_iter()
            .map(|(name, size)| format!("{}({})", name, size))
            .collect()
    }
}
