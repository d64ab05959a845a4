/// Quota/eviction engine
///
/// Owns the file index and the tenant registry and keeps them consistent:
/// every mutation validates completely first, then updates both indices
/// together. A rejected operation leaves state byte-for-byte unchanged.

mod eviction;
mod search;

use crate::catalog::{FileIndex, FileRecord};
use crate::config::LedgerConfig;
use crate::core::capacity::Capacity;
use crate::core::errors::{LedgerError, Result};
use crate::core::validate;
use crate::tenancy::{TenantAccount, TenantId, TenantRegistry};

/// The ledger operation surface.
///
/// There is exactly one in-memory implementation; the trait exists as a
/// capability contract for callers and test doubles, not as a hierarchy.
pub trait LedgerOps {
    /// Record a file under the root tenant.
    fn add_file(&mut self, name: &str, size: u64) -> Result<()>;

    /// Record a file under the given tenant, returning its remaining capacity.
    fn add_file_by(&mut self, tenant: &str, name: &str, size: u64) -> Result<Capacity>;

    /// Create an independent copy attributed to the source file's owner.
    fn copy_file(&mut self, source: &str, dest: &str) -> Result<()>;

    /// Delete a file and release its owner's usage, returning the freed size.
    fn remove_file(&mut self, name: &str) -> Result<u64>;

    /// Look up a file's size.
    fn get_file_size(&self, name: &str) -> Option<u64>;

    /// Snapshot of `"name(size)"` entries matching both affixes, ordered
    /// size-descending then name-ascending.
    fn find_file(&self, prefix: &str, suffix: &str) -> Vec<String>;

    /// Create a tenant account with zero usage.
    fn register_tenant(&mut self, id: &str, capacity: Capacity) -> Result<()>;

    /// Change a tenant's capacity, evicting files if usage no longer fits;
    /// returns the number of files evicted.
    fn update_capacity(&mut self, tenant: &str, capacity: Capacity) -> Result<usize>;
}

/// In-memory multi-tenant storage-accounting ledger.
pub struct StorageLedger {
    files: FileIndex,
    tenants: TenantRegistry,
}

impl StorageLedger {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        let root = TenantId::new(config.root_tenant);
        StorageLedger {
            files: FileIndex::new(),
            tenants: TenantRegistry::new(root, config.root_capacity),
        }
    }

    pub fn root_tenant(&self) -> &TenantId {
        self.tenants.root_id()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn tenant_count(&self) -> usize {
        self.tenants.len()
    }

    pub fn get_tenant(&self, id: &str) -> Option<&TenantAccount> {
        self.tenants.get(id)
    }

    pub fn register_tenant(&mut self, id: &str, capacity: Capacity) -> Result<()> {
        self.tenants.register(id, capacity)
    }

    pub fn add_file(&mut self, name: &str, size: u64) -> Result<()> {
        validate::require_file_name(name)?;
        if self.files.contains(name) {
            return Err(LedgerError::FileAlreadyExists(name.to_string()));
        }

        let owner = self.tenants.root_id().clone();
        self.record_file(name, size, owner);
        Ok(())
    }

    pub fn add_file_by(&mut self, tenant: &str, name: &str, size: u64) -> Result<Capacity> {
        validate::require_file_name(name)?;
        let account = self
            .tenants
            .get(tenant)
            .ok_or_else(|| LedgerError::TenantNotFound(tenant.to_string()))?;
        if self.files.contains(name) {
            return Err(LedgerError::FileAlreadyExists(name.to_string()));
        }
        if !account.has_room(size) {
            return Err(Self::quota_exceeded(tenant, account, size));
        }

        let remaining = account.capacity().remaining(account.used().saturating_add(size));
        self.record_file(name, size, TenantId::new(tenant));
        Ok(remaining)
    }

    pub fn copy_file(&mut self, source: &str, dest: &str) -> Result<()> {
        validate::require_file_name(dest)?;
        if self.files.contains(dest) {
            return Err(LedgerError::FileAlreadyExists(dest.to_string()));
        }
        let record = self
            .files
            .get(source)
            .ok_or_else(|| LedgerError::FileNotFound(source.to_string()))?;
        let (size, owner) = (record.size, record.owner.clone());

        // The copy is attributed to the source file's owner, not the caller.
        let account = self
            .tenants
            .get(owner.as_str())
            .ok_or_else(|| LedgerError::TenantNotFound(owner.to_string()))?;
        if !account.has_room(size) {
            return Err(Self::quota_exceeded(owner.as_str(), account, size));
        }

        self.record_file(dest, size, owner);
        Ok(())
    }

    pub fn remove_file(&mut self, name: &str) -> Result<u64> {
        if !self.files.contains(name) {
            return Err(LedgerError::FileNotFound(name.to_string()));
        }
        Ok(self.remove_entry(name))
    }

    pub fn get_file_size(&self, name: &str) -> Option<u64> {
        self.files.get(name).map(|record| record.size)
    }

    /// Verify the cross-index invariants; debugging and test aid.
    ///
    /// Checks that every tenant's `used` equals the sum of its owned file
    /// sizes, and that the file index and owned sets describe the same
    /// relation from both sides.
    pub fn verify_invariants(&self) -> std::result::Result<(), String> {
        for (id, account) in self.tenants.iter() {
            let mut total = 0u64;
            for name in account.owned() {
                let record = self
                    .files
                    .get(name)
                    .ok_or_else(|| format!("tenant {} owns missing file {}", id, name))?;
                if record.owner != *id {
                    return Err(format!(
                        "file {} owned by {} but listed under {}",
                        name, record.owner, id
                    ));
                }
                total += record.size;
            }
            if total != account.used() {
                return Err(format!(
                    "tenant {} used {} but owned files sum to {}",
                    id,
                    account.used(),
                    total
                ));
            }
        }
        for (name, record) in self.files.iter() {
            let account = self
                .tenants
                .get(record.owner.as_str())
                .ok_or_else(|| format!("file {} has unknown owner {}", name, record.owner))?;
            if !account.owns(name) {
                return Err(format!(
                    "file {} missing from owned set of {}",
                    name, record.owner
                ));
            }
        }
        Ok(())
    }

    /// Update both indices for a new file. Callers have already validated
    /// name, uniqueness, and quota.
    fn record_file(&mut self, name: &str, size: u64, owner: TenantId) {
        if let Some(account) = self.tenants.get_mut(owner.as_str()) {
            account.charge(name.to_string(), size);
        }
        tracing::debug!(file = name, size, owner = owner.as_str(), "file recorded");
        self.files.put(name.to_string(), FileRecord { size, owner });
    }

    /// Update both indices for a removed file; returns the freed size.
    /// No-op (returning 0) if the file is absent.
    fn remove_entry(&mut self, name: &str) -> u64 {
        let Some(record) = self.files.remove(name) else {
            return 0;
        };
        if let Some(account) = self.tenants.get_mut(record.owner.as_str()) {
            account.release(name, record.size);
        }
        tracing::debug!(file = name, size = record.size, "file removed");
        record.size
    }

    fn quota_exceeded(tenant: &str, account: &TenantAccount, requested: u64) -> LedgerError {
        LedgerError::QuotaExceeded {
            tenant: tenant.to_string(),
            requested,
            used: account.used(),
            capacity: account.capacity(),
        }
    }
}

impl Default for StorageLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerOps for StorageLedger {
    fn add_file(&mut self, name: &str, size: u64) -> Result<()> {
        StorageLedger::add_file(self, name, size)
    }

    fn add_file_by(&mut self, tenant: &str, name: &str, size: u64) -> Result<Capacity> {
        StorageLedger::add_file_by(self, tenant, name, size)
    }

    fn copy_file(&mut self, source: &str, dest: &str) -> Result<()> {
        StorageLedger::copy_file(self, source, dest)
    }

    fn remove_file(&mut self, name: &str) -> Result<u64> {
        StorageLedger::remove_file(self, name)
    }

    fn get_file_size(&self, name: &str) -> Option<u64> {
        StorageLedger::get_file_size(self, name)
    }

    fn find_file(&self, prefix: &str, suffix: &str) -> Vec<String> {
        StorageLedger::find_file(self, prefix, suffix)
    }

    fn register_tenant(&mut self, id: &str, capacity: Capacity) -> Result<()> {
        StorageLedger::register_tenant(self, id, capacity)
    }

    fn update_capacity(&mut self, tenant: &str, capacity: Capacity) -> Result<usize> {
        StorageLedger::update_capacity(self, tenant, capacity)
    }
}
