use std::collections::HashMap;

use crate::core::capacity::Capacity;
use crate::core::errors::{LedgerError, Result};
use crate::core::validate;
use crate::tenancy::tenant::{TenantAccount, TenantId};

/// Registry of all tenant accounts.
///
/// Seeded at construction with one root tenant whose identifier is
/// reserved. Tenants are registered once and never removed.
#[derive(Debug)]
pub struct TenantRegistry {
    tenants: HashMap<TenantId, TenantAccount>,
    root: TenantId,
}

impl TenantRegistry {
    pub fn new(root: TenantId, root_capacity: Capacity) -> Self {
        let mut tenants = HashMap::new();
        tenants.insert(root.clone(), TenantAccount::new(root_capacity));
        TenantRegistry { tenants, root }
    }

    /// The reserved root tenant identifier.
    pub fn root_id(&self) -> &TenantId {
        &self.root
    }

    /// Register a new tenant with `used = 0` and an empty owned set.
    pub fn register(&mut self, id: &str, capacity: Capacity) -> Result<()> {
        validate::require_tenant_id(id)?;
        if id == self.root.as_str() {
            return Err(LedgerError::ReservedTenantId(id.to_string()));
        }
        if self.tenants.contains_key(id) {
            return Err(LedgerError::TenantAlreadyExists(id.to_string()));
        }

        self.tenants
            .insert(TenantId::new(id), TenantAccount::new(capacity));
        tracing::debug!(tenant = id, %capacity, "tenant registered");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TenantAccount> {
        self.tenants.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut TenantAccount> {
        self.tenants.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tenants.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    /// Iterate all accounts. Order is not meaningful.
    pub fn iter(&self) -> impl Iterator<Item = (&TenantId, &TenantAccount)> {
        self.tenants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorCode;

    fn registry() -> TenantRegistry {
        TenantRegistry::new(TenantId::new("admin"), Capacity::Unlimited)
    }

    #[test]
    fn test_root_seeded_unlimited() {
        let registry = registry();
        let root = registry.get("admin").unwrap();
        assert!(root.capacity().is_unlimited());
        assert_eq!(root.used(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_new_tenant() {
        let mut registry = registry();
        registry.register("u1", Capacity::Bounded(200)).unwrap();

        let account = registry.get("u1").unwrap();
        assert_eq!(account.capacity(), Capacity::Bounded(200));
        assert_eq!(account.used(), 0);
        assert!(account.owned().is_empty());
    }

    #[test]
    fn test_register_rejects_empty_reserved_duplicate() {
        let mut registry = registry();

        assert_eq!(
            registry.register("", Capacity::Bounded(10)).unwrap_err().code(),
            ErrorCode::InvalidName
        );
        assert_eq!(
            registry
                .register("admin", Capacity::Bounded(10))
                .unwrap_err()
                .code(),
            ErrorCode::ReservedTenantId
        );

        registry.register("u1", Capacity::Bounded(10)).unwrap();
        assert_eq!(
            registry
                .register("u1", Capacity::Bounded(20))
                .unwrap_err()
                .code(),
            ErrorCode::TenantAlreadyExists
        );
        // Failed re-registration leaves the original account untouched
        assert_eq!(registry.get("u1").unwrap().capacity(), Capacity::Bounded(10));
    }
}
