// crates/lcse-core/src/limits.rs

//! Optional resource caps for a single `lcse_compute` call.
//!
//! Caches grow monotonically during a call (see `SPEC_FULL.md` §5); a host
//! embedding this crate can bound that growth instead of trusting the caller
//! to supply small-enough inputs. `Limits::default()` imposes no caps.

use serde::{Deserialize, Serialize};

/// Resource caps enforced by the decomposition cache and the LCSE recursion.
///
/// Each field is `None` by default, meaning "unbounded". Builder methods are
/// provided for ergonomic construction from CLI flags or config files.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of distinct sub-views the decomposition cache may hold.
    pub max_decomposition_entries: Option<usize>,
    /// Maximum number of distinct `(S1, S2)` pairs the memo table may hold.
    pub max_memo_entries: Option<usize>,
    /// Maximum recursion depth of the LCSE recursion.
    pub max_recursion_depth: Option<usize>,
}

impl Limits {
    /// No caps: unbounded decomposition cache, memo table, and recursion depth.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_decomposition_entries: None,
            max_memo_entries: None,
            max_recursion_depth: None,
        }
    }

    /// Set a cap on decomposition-cache entries.
    #[must_use]
    pub const fn with_max_decomposition_entries(mut self, n: usize) -> Self {
        self.max_decomposition_entries = Some(n);
        self
    }

    /// Set a cap on memo-table entries.
    #[must_use]
    pub const fn with_max_memo_entries(mut self, n: usize) -> Self {
        self.max_memo_entries = Some(n);
        self
    }

    /// Set a cap on recursion depth.
    #[must_use]
    pub const fn with_max_recursion_depth(mut self, n: usize) -> Self {
        self.max_recursion_depth = Some(n);
        self
    }
}
