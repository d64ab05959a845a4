use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::capacity::Capacity;

/// Unique tenant identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TenantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-tenant usage account.
///
/// `used` is always the exact sum of sizes of the files in `owned`; both
/// are mutated only by the engine, together with the file index.
#[derive(Debug, Clone)]
pub struct TenantAccount {
    capacity: Capacity,
    used: u64,
    owned: HashSet<String>,
}

impl TenantAccount {
    pub fn new(capacity: Capacity) -> Self {
        TenantAccount {
            capacity,
            used: 0,
            owned: HashSet::new(),
        }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: Capacity) {
        self.capacity = capacity;
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    /// Remaining headroom under the current capacity.
    pub fn remaining(&self) -> Capacity {
        self.capacity.remaining(self.used)
    }

    /// Whether an additional `size` units would still fit.
    pub fn has_room(&self, size: u64) -> bool {
        self.capacity.allows(self.used, size)
    }

    /// Whether current usage fits the current capacity.
    pub fn fits(&self) -> bool {
        self.capacity.fits(self.used)
    }

    /// Names of files owned by this tenant. Membership only; iteration
    /// order is never meaningful.
    pub fn owned(&self) -> &HashSet<String> {
        &self.owned
    }

    pub fn owns(&self, name: &str) -> bool {
        self.owned.contains(name)
    }

    /// Account for a newly recorded file.
    pub fn charge(&mut self, name: String, size: u64) {
        self.used += size;
        self.owned.insert(name);
    }

    /// Account for a removed file.
    ///
    /// Usage can never go negative when the cross-index invariants hold;
    /// a short release here is a bug, not drift to clamp away.
    pub fn release(&mut self, name: &str, size: u64) {
        debug_assert!(self.used >= size, "usage accounting drift");
        self.used -= size;
        self.owned.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_and_release() {
        let mut account = TenantAccount::new(Capacity::Bounded(1000));
        account.charge("f1".to_string(), 400);
        account.charge("f2".to_string(), 100);

        assert_eq!(account.used(), 500);
        assert!(account.owns("f1"));
        assert_eq!(account.owned().len(), 2);

        account.release("f1", 400);
        assert_eq!(account.used(), 100);
        assert!(!account.owns("f1"));
    }

    #[test]
    fn test_has_room_boundary() {
        let mut account = TenantAccount::new(Capacity::Bounded(200));
        account.charge("f1".to_string(), 150);

        assert!(account.has_room(50));
        assert!(!account.has_room(51));
        assert_eq!(account.remaining(), Capacity::Bounded(50));
    }

    #[test]
    fn test_unlimited_account() {
        let mut account = TenantAccount::new(Capacity::Unlimited);
        account.charge("f1".to_string(), u64::MAX / 2);
        assert!(account.has_room(u64::MAX / 2));
        assert!(account.fits());
        assert_eq!(account.remaining(), Capacity::Unlimited);
    }

    #[test]
    fn test_tenant_id_display_and_borrow() {
        let id = TenantId::new("u1");
        assert_eq!(id.to_string(), "u1");
        assert_eq!(id.as_str(), "u1");
    }
}
