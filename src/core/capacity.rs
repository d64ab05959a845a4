use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage capacity assigned to a tenant.
///
/// A tagged value rather than a numeric infinity sentinel: callers branch
/// on the variant, never compare against a special float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capacity {
    /// Hard limit in size units
    Bounded(u64),
    /// No limit; never subject to quota rejection or eviction
    Unlimited,
}

impl Capacity {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Capacity::Unlimited)
    }

    /// Check whether `used + extra` still fits.
    ///
    /// Exact fit is allowed; arithmetic overflow counts as not fitting.
    pub fn allows(&self, used: u64, extra: u64) -> bool {
        match self {
            Capacity::Unlimited => true,
            Capacity::Bounded(max) => used
                .checked_add(extra)
                .map_or(false, |total| total <= *max),
        }
    }

    /// Check whether the current usage alone fits.
    pub fn fits(&self, used: u64) -> bool {
        match self {
            Capacity::Unlimited => true,
            Capacity::Bounded(max) => used <= *max,
        }
    }

    /// Remaining headroom at the given usage.
    pub fn remaining(&self, used: u64) -> Capacity {
        match self {
            Capacity::Unlimited => Capacity::Unlimited,
            Capacity::Bounded(max) => Capacity::Bounded(max.saturating_sub(used)),
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(max) => write!(f, "{}", max),
            Capacity::Unlimited => write!(f, "unlimited"),
        }
    }
}
