// crates/lcse-algo/src/affinity.rs

//! Affinity: a non-negative score assigned to pairing two open tokens.
//!
//! An affinity of `0` means the two opens cannot be paired in the embedding;
//! the "match both roots" branch of the recursion is suppressed exactly when
//! `aff == 0`.

use lcse_core::Token;
use std::fmt;
use std::sync::Arc;

/// Selects how two open tokens are scored against each other.
///
/// Exposed as a tagged enum rather than a raw function pointer so both
/// built-in strategies and caller-supplied ones are equally testable.
#[derive(Clone)]
pub enum AffinityKind {
    /// `aff(a, b) = 1` if `a == b`, else `0`.
    StrictEquality,
    /// `aff(a, b) = 1` unconditionally.
    Universal,
    /// A caller-supplied pure function. Must be non-negative and finite for
    /// all inputs; this is a caller contract, not something enforced here.
    Custom(Arc<dyn Fn(Token, Token) -> f64 + Send + Sync>),
}

impl AffinityKind {
    /// Score the pairing of `open1` (from the first input) against `open2`
    /// (from the second input).
    #[must_use]
    pub fn score(&self, open1: Token, open2: Token) -> f64 {
        match self {
            Self::StrictEquality => f64::from(u8::from(open1 == open2)),
            Self::Universal => 1.0,
            Self::Custom(f) => f(open1, open2),
        }
    }
}

impl fmt::Debug for AffinityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrictEquality => f.write_str("AffinityKind::StrictEquality"),
            Self::Universal => f.write_str("AffinityKind::Universal"),
            Self::Custom(_) => f.write_str("AffinityKind::Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_equality_matches_only_equal_opens() {
        let a = AffinityKind::StrictEquality;
        assert_eq!(a.score(1, 1), 1.0);
        assert_eq!(a.score(1, 2), 0.0);
    }

    #[test]
    fn universal_always_matches() {
        let a = AffinityKind::Universal;
        assert_eq!(a.score(1, 1), 1.0);
        assert_eq!(a.score(1, 2), 1.0);
    }

    #[test]
    fn custom_wraps_arbitrary_pure_function() {
        let a = AffinityKind::Custom(Arc::new(|o1: Token, o2: Token| f64::from(o1.min(o2))));
        assert_eq!(a.score(3, 5), 3.0);
    }
}
