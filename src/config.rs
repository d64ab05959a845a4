use serde::{Deserialize, Serialize};

use crate::core::capacity::Capacity;

/// Ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Reserved root tenant identifier, pre-seeded at construction
    pub root_tenant: String,
    /// Capacity of the root tenant
    pub root_capacity: Capacity,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            root_tenant: "admin".to_string(),
            root_capacity: Capacity::Unlimited,
        }
    }
}

impl LedgerConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        let mut config = LedgerConfig::default();

        if let Ok(id) = std::env::var("LEDGERDB_ROOT_TENANT") {
            if !id.is_empty() {
                config.root_tenant = id;
            }
        }
        if let Ok(capacity) = std::env::var("LEDGERDB_ROOT_CAPACITY") {
            config.root_capacity = match capacity.as_str() {
                "unlimited" => Capacity::Unlimited,
                other => other
                    .parse()
                    .map(Capacity::Bounded)
                    .unwrap_or(Capacity::Unlimited),
            };
        }

        config
    }
}
