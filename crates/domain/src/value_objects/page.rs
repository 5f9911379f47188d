//! Offset/count pagination window.

use serde::Deserialize;

/// Default number of rows skipped.
pub const DEFAULT_SKIP: u64 = 0;

/// Default number of rows returned.
pub const DEFAULT_LIMIT: u64 = 100;

/// A pagination window over an insertion-ordered listing.
///
/// `limit` has no upper bound; large values are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default = "default_skip")]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_skip() -> u64 {
    DEFAULT_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Page {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Offset as a SQL bind value, saturating at `i64::MAX`.
    pub fn offset_i64(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// Limit as a SQL bind value, saturating at `i64::MAX`.
    pub fn limit_i64(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP, DEFAULT_LIMIT)
    }
}
