// crates/lcse-core/src/error.rs

//! Error taxonomy for balanced-sequence matching.
//!
//! Every variant carries enough context (an offset, a count, or both) to act
//! as a short diagnostic on its own; callers are expected to match on the
//! variant rather than on the rendered message.

use thiserror::Error;

/// Errors produced by token-alphabet configuration, sequence decomposition,
/// and the LCSE recursion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcseError {
    /// `pair_map` is malformed: non-injective, or a token appears as both an
    /// open and a close.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A token in an input buffer is neither an open nor a close of the
    /// configured pair map.
    #[error("unknown token {token} at offset {offset}")]
    UnknownToken {
        /// The offending token.
        token: crate::token::Token,
        /// Offset within the input buffer where it was found.
        offset: usize,
    },

    /// A sub-view presented to `decompose` has no matching close for its
    /// first open.
    #[error("unbalanced sequence: no matching close for open at offset {offset}")]
    Unbalanced {
        /// Offset (within the original top-level buffer) of the open token
        /// that could not be matched.
        offset: usize,
    },

    /// A configured cap in [`crate::limits::Limits`] was exceeded.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LcseError>;
