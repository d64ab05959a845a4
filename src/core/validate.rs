use crate::core::errors::{LedgerError, Result};

/// Reject empty file names before any index is touched.
pub fn require_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LedgerError::InvalidName(
            "file name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reject empty tenant identifiers before any index is touched.
pub fn require_tenant_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(LedgerError::InvalidName(
            "tenant id cannot be empty".to_string(),
        ));
    }
    Ok(())
}
