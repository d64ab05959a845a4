use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LedgerConfig;
use crate::core::capacity::Capacity;
use crate::core::errors::Result;
use crate::engine::StorageLedger;

/// Cloneable thread-safe handle over a [`StorageLedger`].
///
/// Each public operation is one critical section: mutations hold the
/// write lock for the whole operation, pure reads hold the read lock, and
/// the guard drop releases on every exit path. Another caller can never
/// observe the file index and tenant registry partially updated.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<StorageLedger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        SharedLedger {
            inner: Arc::new(RwLock::new(StorageLedger::with_config(config))),
        }
    }

    pub fn add_file(&self, name: &str, size: u64) -> Result<()> {
        self.inner.write().add_file(name, size)
    }

    pub fn add_file_by(&self, tenant: &str, name: &str, size: u64) -> Result<Capacity> {
        self.inner.write().add_file_by(tenant, name, size)
    }

    pub fn copy_file(&self, source: &str, dest: &str) -> Result<()> {
        self.inner.write().copy_file(source, dest)
    }

    pub fn remove_file(&self, name: &str) -> Result<u64> {
        self.inner.write().remove_file(name)
    }

    pub fn get_file_size(&self, name: &str) -> Option<u64> {
        self.inner.read().get_file_size(name)
    }

    pub fn find_file(&self, prefix: &str, suffix: &str) -> Vec<String> {
        self.inner.read().find_file(prefix, suffix)
    }

    pub fn register_tenant(&self, id: &str, capacity: Capacity) -> Result<()> {
        self.inner.write().register_tenant(id, capacity)
    }

    pub fn update_capacity(&self, tenant: &str, capacity: Capacity) -> Result<usize> {
        self.inner.write().update_capacity(tenant, capacity)
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().file_count()
    }

    pub fn tenant_count(&self) -> usize {
        self.inner.read().tenant_count()
    }
}

impl Default for SharedLedger {
    fn default() -> Self {
        Self::new()
    }
}
