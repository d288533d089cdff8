// crates/lcse-algo/src/decompose.rs

//! Decomposition cache: splits a balanced view at its first open's matching
//! close into `(head, tail)`, materializing `head ⊕ tail` for the
//! "drop the outer pair" recursion branch (`SPEC_FULL.md` §4.C).

use lcse_core::{LcseError, Limits, PairMap, Result, SequenceView, Token, ViewIdentity};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// A balanced view's split at its first open's matching close.
#[derive(Clone, Debug)]
pub struct Decomposition {
    /// The view's first token (an open).
    pub a: Token,
    /// `pair(a)`, the close that matches `a`.
    pub b: Token,
    /// Tokens strictly between `a` and its matching close.
    pub head: SequenceView,
    /// Tokens strictly after `a`'s matching close.
    pub tail: SequenceView,
    /// The freshly materialized concatenation `head ⊕ tail`.
    pub head_tail: SequenceView,
}

/// Memoizes [`Decomposition`]s by view identity so each distinct sub-view is
/// decomposed at most once.
#[derive(Debug, Default)]
pub struct DecompositionCache {
    entries: HashMap<ViewIdentity, Arc<Decomposition>>,
}

impl DecompositionCache {
    /// A fresh, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct sub-views decomposed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no sub-view has been decomposed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decompose `s` (non-empty, balanced) at its first open's matching
    /// close, returning the cached record if `s` has been seen before.
    ///
    /// # Errors
    /// - [`LcseError::Unbalanced`] if `s`'s first open has no matching close.
    /// - [`LcseError::ResourceExhausted`] if `limits.max_decomposition_entries`
    ///   would be exceeded by a new entry.
    ///
    /// # Panics
    /// Panics if `s` is empty; callers must only decompose non-empty views
    /// (the LCSE base case in `lcse.rs` handles emptiness before reaching
    /// here).
    pub fn decompose(
        &mut self,
        s: &SequenceView,
        pair_map: &PairMap,
        limits: &Limits,
    ) -> Result<Arc<Decomposition>> {
        assert!(!s.is_empty(), "decompose called on an empty view");

        let key = s.identity();
        if let Some(d) = self.entries.get(&key) {
            trace!(len = s.len(), "decomposition cache hit");
            return Ok(Arc::clone(d));
        }

        if let Some(cap) = limits.max_decomposition_entries {
            if self.entries.len() >= cap {
                return Err(LcseError::ResourceExhausted(format!(
                    "decomposition cache exceeded cap of {cap} entries"
                )));
            }
        }

        trace!(len = s.len(), "decomposition cache miss");
        let a = s.token_at(0);
        let b = pair_map.close_of(a).ok_or(LcseError::Unbalanced {
            offset: s.buffer_offset(),
        })?;

        let mut depth = 1i64;
        let mut k = None;
        for i in 1..s.len() {
            let t = s.token_at(i);
            depth += if pair_map.is_open(t) { 1 } else { -1 };
            if depth == 0 {
                if t == b {
                    k = Some(i);
                }
                break;
            }
        }
        let k = k.ok_or(LcseError::Unbalanced {
            offset: s.buffer_offset(),
        })?;

        let head = s.slice(1, k);
        let tail = s.slice(k + 1, s.len());
        let mut combined = head.to_vec();
        combined.extend(tail.iter());
        let head_tail = SequenceView::from_owned(combined);

        let record = Arc::new(Decomposition {
            a,
            b,
            head,
            tail,
            head_tail,
        });
        self.entries.insert(key, Arc::clone(&record));
        Ok(record)
    }
}

/// Ceil-log2 of `x`, with the convention `ceil_log2(0) = ceil_log2(1) = 0`.
#[inline]
#[must_use]
pub fn ceil_log2(x: usize) -> usize {
    if x <= 1 {
        0
    } else {
        (usize::BITS - (x - 1).leading_zeros()) as usize
    }
}

/// Theoretical worst-case recursion-depth bound for an LCSE call whose two
/// inputs have combined length `combined_len`: each recursive step peels at
/// least one open/close pair off one side, so depth is linear rather than
/// logarithmic (`SPEC_FULL.md` §4.E, §9). Informational only; enforce a cap
/// with [`lcse_core::Limits::max_recursion_depth`].
#[inline]
#[must_use]
pub fn depth_bound(combined_len: usize) -> usize {
    (combined_len + 1) / 2
}
