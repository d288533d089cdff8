// crates/lcse-core/src/token.rs

//! Token alphabet and open/close pairing.
//!
//! A [`PairMap`] is a finite, injective mapping from "open" tokens to their
//! matching "close" tokens. It is validated once at construction time so the
//! rest of the crate can assume every open has exactly one close and no
//! token is both.

use crate::error::{LcseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// An abstract alphabet symbol. A small integer; callers choose the
/// encoding (bytes suffice for alphabets of up to 128 opens + 128 closes,
/// but nothing here enforces that ceiling).
pub type Token = u32;

/// Validated open→close pairing over a token alphabet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairMap {
    open_to_close: HashMap<Token, Token>,
    closes: HashSet<Token>,
}

impl PairMap {
    /// Build a `PairMap` from an explicit `open -> close` table.
    ///
    /// # Errors
    /// Returns [`LcseError::InvalidAlphabet`] if:
    /// - two distinct opens map to the same close (non-injective), or
    /// - a token appears as both an open and a close.
    pub fn new(open_to_close: HashMap<Token, Token>) -> Result<Self> {
        let mut closes = HashSet::with_capacity(open_to_close.len());
        for &close in open_to_close.values() {
            if !closes.insert(close) {
                return Err(LcseError::InvalidAlphabet(format!(
                    "close token {close} is the target of more than one open"
                )));
            }
        }
        for &open in open_to_close.keys() {
            if closes.contains(&open) {
                return Err(LcseError::InvalidAlphabet(format!(
                    "token {open} appears as both an open and a close"
                )));
            }
        }
        Ok(Self {
            open_to_close,
            closes,
        })
    }

    /// `true` if `t` is an open token of this alphabet.
    #[inline]
    #[must_use]
    pub fn is_open(&self, t: Token) -> bool {
        self.open_to_close.contains_key(&t)
    }

    /// `true` if `t` is a close token of this alphabet.
    #[inline]
    #[must_use]
    pub fn is_close(&self, t: Token) -> bool {
        self.closes.contains(&t)
    }

    /// `true` if `t` is either an open or a close of this alphabet.
    #[inline]
    #[must_use]
    pub fn contains(&self, t: Token) -> bool {
        self.is_open(t) || self.is_close(t)
    }

    /// The close matching `open`, if `open` is a known open token.
    #[inline]
    #[must_use]
    pub fn close_of(&self, open: Token) -> Option<Token> {
        self.open_to_close.get(&open).copied()
    }

    /// Validate that every token in `buf` is known to this alphabet.
    ///
    /// # Errors
    /// Returns [`LcseError::UnknownToken`] for the first offending token,
    /// with its offset within `buf`.
    pub fn validate(&self, buf: &[Token]) -> Result<()> {
        for (offset, &t) in buf.iter().enumerate() {
            if !self.contains(t) {
                return Err(LcseError::UnknownToken { token: t, offset });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_map() {
        let m = HashMap::from([(1, 2), (3, 4)]);
        let pm = PairMap::new(m).expect("well-formed map");
        assert!(pm.is_open(1));
        assert!(pm.is_close(2));
        assert!(!pm.is_open(2));
        assert_eq!(pm.close_of(1), Some(2));
        assert_eq!(pm.close_of(99), None);
    }

    #[test]
    fn rejects_duplicate_close_target() {
        let m = HashMap::from([(1, 9), (2, 9)]);
        let err = PairMap::new(m).unwrap_err();
        assert!(matches!(err, LcseError::InvalidAlphabet(_)));
    }

    #[test]
    fn rejects_token_as_both_open_and_close() {
        let m = HashMap::from([(1, 2), (2, 3)]);
        let err = PairMap::new(m).unwrap_err();
        assert!(matches!(err, LcseError::InvalidAlphabet(_)));
    }

    #[test]
    fn validate_flags_unknown_token_offset() {
        let pm = PairMap::new(HashMap::from([(1, 2)])).expect("valid");
        let err = pm.validate(&[1, 2, 7, 1]).unwrap_err();
        assert_eq!(err, LcseError::UnknownToken { token: 7, offset: 2 });
    }
}
