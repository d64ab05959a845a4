/// Tenant accounting
///
/// Provides:
/// - Tenant identifiers and per-tenant usage accounts
/// - The registry, pre-seeded with the reserved root tenant
/// - Capacity bookkeeping (charge/release) used by the engine

pub mod registry;
pub mod tenant;

pub use registry::TenantRegistry;
pub use tenant::{TenantAccount, TenantId};
