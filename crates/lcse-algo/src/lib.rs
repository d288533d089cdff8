// crates/lcse-algo/src/lib.rs

//! Longest Common Balanced Subsequence Embedding (LCSE).
//!
//! Given two balanced token sequences over a shared open/close alphabet
//! ([`lcse_core::PairMap`]), finds the maximum-affinity pair of aligned
//! balanced subsequences, one drawn from each input. This is the
//! dynamic-programming heart of an ordered-subtree-minor package: encode
//! ordered labeled trees as balanced parenthesis sequences and LCSE on those
//! encodings yields the largest common ordered embedded subtree. That
//! encoder/decoder step is an external collaborator and out of scope here.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod adapter;
pub mod affinity;
pub mod decompose;
pub mod lcse;

pub use adapter::lcse_compute;
pub use affinity::AffinityKind;
pub use decompose::depth_bound;
pub use lcse::LcseOutcome;
