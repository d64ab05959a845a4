// ============================================================================
// CORE TYPES & UTILITIES
// ============================================================================
pub mod core;

// ============================================================================
// FILE & TENANT INDEXES
// ============================================================================
pub mod catalog;
pub mod tenancy;

// ============================================================================
// QUOTA / EVICTION ENGINE
// ============================================================================
pub mod engine;

// ============================================================================
// CONFIG & CONCURRENCY
// ============================================================================
pub mod config;
pub mod shared;

// ============================================================================
// OBSERVABILITY
// ============================================================================
pub mod observability;

// Re-export commonly used types
pub use crate::catalog::{FileIndex, FileRecord};
pub use crate::config::LedgerConfig;
pub use crate::core::{Capacity, ErrorCode, LedgerError, Result};
pub use crate::engine::{LedgerOps, StorageLedger};
pub use crate::shared::SharedLedger;
pub use crate::tenancy::{TenantAccount, TenantId, TenantRegistry};
