/// Core types shared by every ledger module
///
/// Provides:
/// - Error taxonomy with stable numeric codes
/// - Tagged capacity values (bounded or unlimited)
/// - Input validation helpers

pub mod capacity;
pub mod errors;
pub mod validate;

pub use capacity::Capacity;
pub use errors::{ErrorCode, LedgerError, Result};
