use super::search::size_desc_name_asc;
use super::StorageLedger;
use crate::core::capacity::Capacity;
use crate::core::errors::{LedgerError, Result};

impl StorageLedger {
    /// Change a tenant's capacity, evicting owned files if usage no
    /// longer fits. Returns the number of files evicted.
    ///
    /// Candidates are ordered size descending (largest-first minimizes
    /// the number of evictions) with ties broken by name ascending, the
    /// same ordering [`StorageLedger::find_file`] uses. Files are removed
    /// one at a time until `used <= capacity`.
    pub fn update_capacity(&mut self, tenant: &str, capacity: Capacity) -> Result<usize> {
        {
            let account = self
                .tenants
                .get_mut(tenant)
                .ok_or_else(|| LedgerError::TenantNotFound(tenant.to_string()))?;
            account.set_capacity(capacity);
            if account.fits() {
                return Ok(0);
            }
        }

        // Owned-set iteration order is meaningless; re-sort every time.
        let mut candidates: Vec<(String, u64)> = match self.tenants.get(tenant) {
            Some(account) => account
                .owned()
                .iter()
                .map(|name| {
                    let size = self.files.get(name).map_or(0, |record| record.size);
                    (name.clone(), size)
                })
                .collect(),
            None => return Ok(0),
        };
        candidates.sort_unstable_by(size_desc_name_asc);

        let mut evicted = 0usize;
        for (name, _) in candidates {
            match self.tenants.get(tenant) {
                Some(account) if !account.fits() => {
                    self.remove_entry(&name);
                    evicted += 1;
                }
                _ => break,
            }
        }

        tracing::info!(tenant, %capacity, evicted, "capacity reduced below usage");
        Ok(evicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorCode;

    fn ledger_with_tenant(capacity: u64, files: &[(&str, u64)]) -> StorageLedger {
        let mut ledger = StorageLedger::new();
        ledger
            .register_tenant("u1", Capacity::Bounded(capacity))
            .unwrap();
        for (name, size) in files {
            ledger.add_file_by("u1", name, *size).unwrap();
        }
        ledger
    }

    #[test]
    fn test_reduction_evicts_single_file() {
        let mut ledger = ledger_with_tenant(200, &[("f1", 150)]);

        assert_eq!(
            ledger.update_capacity("u1", Capacity::Bounded(100)).unwrap(),
            1
        );
        assert_eq!(ledger.get_file_size("f1"), None);
        assert_eq!(ledger.get_tenant("u1").unwrap().used(), 0);
        ledger.verify_invariants().unwrap();
    }

    #[test]
    fn test_largest_first_minimizes_evictions() {
        let mut ledger = ledger_with_tenant(200, &[("small", 30), ("mid", 40), ("big", 50)]);

        // used = 120; capacity 60 needs only "big" and "mid" gone
        assert_eq!(
            ledger.update_capacity("u1", Capacity::Bounded(60)).unwrap(),
            2
        );
        assert_eq!(ledger.get_file_size("big"), None);
        assert_eq!(ledger.get_file_size("mid"), None);
        assert_eq!(ledger.get_file_size("small"), Some(30));
        assert_eq!(ledger.get_tenant("u1").unwrap().used(), 30);
    }

    #[test]
    fn test_ties_evicted_in_name_order() {
        let mut ledger = ledger_with_tenant(300, &[("b", 100), ("a", 100), ("c", 100)]);

        // One eviction suffices; "a" goes first among equal sizes
        assert_eq!(
            ledger.update_capacity("u1", Capacity::Bounded(200)).unwrap(),
            1
        );
        assert_eq!(ledger.get_file_size("a"), None);
        assert_eq!(ledger.get_file_size("b"), Some(100));
        assert_eq!(ledger.get_file_size("c"), Some(100));
    }

    #[test]
    fn test_no_eviction_when_usage_fits() {
        let mut ledger = ledger_with_tenant(200, &[("f1", 80)]);

        assert_eq!(
            ledger.update_capacity("u1", Capacity::Bounded(80)).unwrap(),
            0
        );
        assert_eq!(ledger.get_tenant("u1").unwrap().capacity(), Capacity::Bounded(80));
        assert_eq!(ledger.get_file_size("f1"), Some(80));
    }

    #[test]
    fn test_raising_to_unlimited_never_evicts() {
        let mut ledger = ledger_with_tenant(200, &[("f1", 150)]);

        assert_eq!(
            ledger.update_capacity("u1", Capacity::Unlimited).unwrap(),
            0
        );
        assert!(ledger.get_tenant("u1").unwrap().capacity().is_unlimited());
    }

    #[test]
    fn test_reduction_to_zero_evicts_everything() {
        let mut ledger = ledger_with_tenant(100, &[("f1", 40), ("f2", 30), ("f3", 20)]);

        assert_eq!(
            ledger.update_capacity("u1", Capacity::Bounded(0)).unwrap(),
            3
        );
        assert_eq!(ledger.get_tenant("u1").unwrap().used(), 0);
        assert!(ledger.get_tenant("u1").unwrap().owned().is_empty());
        ledger.verify_invariants().unwrap();
    }

    #[test]
    fn test_unknown_tenant() {
        let mut ledger = StorageLedger::new();
        assert_eq!(
            ledger
                .update_capacity("ghost", Capacity::Bounded(10))
                .unwrap_err()
                .code(),
            ErrorCode::TenantNotFound
        );
    }
}
