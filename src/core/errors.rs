use std::fmt;

use crate::core::capacity::Capacity;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// 1000-1099: Validation errors
    InvalidName = 1001,

    /// 1100-1199: Lookup errors
    FileNotFound = 1101,
    TenantNotFound = 1102,

    /// 1200-1299: Uniqueness errors
    FileAlreadyExists = 1201,
    TenantAlreadyExists = 1202,
    ReservedTenantId = 1203,

    /// 1300-1399: Quota errors
    QuotaExceeded = 1301,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::TenantNotFound => "TENANT_NOT_FOUND",
            ErrorCode::FileAlreadyExists => "FILE_ALREADY_EXISTS",
            ErrorCode::TenantAlreadyExists => "TENANT_ALREADY_EXISTS",
            ErrorCode::ReservedTenantId => "RESERVED_TENANT_ID",
            ErrorCode::QuotaExceeded => "QUOTA_EXCEEDED",
        }
    }
}

/// Every rejection the ledger can produce.
///
/// All failures are local policy outcomes: the ledger is left unmodified
/// and the caller decides what to do next. There are no fatal errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Empty or otherwise malformed name/identifier
    InvalidName(String),
    /// Referenced file does not exist
    FileNotFound(String),
    /// Referenced tenant does not exist
    TenantNotFound(String),
    /// Target file name already present
    FileAlreadyExists(String),
    /// Tenant identifier already registered
    TenantAlreadyExists(String),
    /// Tenant identifier is reserved for the root account
    ReservedTenantId(String),
    /// Bounded-capacity tenant would exceed its quota
    QuotaExceeded {
        tenant: String,
        requested: u64,
        used: u64,
        capacity: Capacity,
    },
}

impl LedgerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::InvalidName(_) => ErrorCode::InvalidName,
            LedgerError::FileNotFound(_) => ErrorCode::FileNotFound,
            LedgerError::TenantNotFound(_) => ErrorCode::TenantNotFound,
            LedgerError::FileAlreadyExists(_) => ErrorCode::FileAlreadyExists,
            LedgerError::TenantAlreadyExists(_) => ErrorCode::TenantAlreadyExists,
            LedgerError::ReservedTenantId(_) => ErrorCode::ReservedTenantId,
            LedgerError::QuotaExceeded { .. } => ErrorCode::QuotaExceeded,
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidName(message) => {
                write!(f, "[{}] Invalid name: {}", self.code().as_str(), message)
            }
            LedgerError::FileNotFound(name) => {
                write!(f, "[{}] File not found: {}", self.code().as_str(), name)
            }
            LedgerError::TenantNotFound(id) => {
                write!(f, "[{}] Tenant not found: {}", self.code().as_str(), id)
            }
            LedgerError::FileAlreadyExists(name) => {
                write!(f, "[{}] File already exists: {}", self.code().as_str(), name)
            }
            LedgerError::TenantAlreadyExists(id) => {
                write!(f, "[{}] Tenant already exists: {}", self.code().as_str(), id)
            }
            LedgerError::ReservedTenantId(id) => {
                write!(f, "[{}] Tenant id is reserved: {}", self.code().as_str(), id)
            }
            LedgerError::QuotaExceeded {
                tenant,
                requested,
                used,
                capacity,
            } => {
                write!(
                    f,
                    "[{}] Quota exceeded for tenant {}: used {} + requested {} > capacity {}",
                    self.code().as_str(),
                    tenant,
                    used,
                    requested,
                    capacity
                )
            }
        }
    }
}

impl std::error::Error for LedgerError {}

pub type Result<T> = std::result::Result<T, LedgerError>;
