// crates/lcse-algo/src/adapter.rs

//! The boundary adapter: the one callable surface this crate exposes
//! (`SPEC_FULL.md` §4.F, §6).
//!
//! Parses caller inputs into a validated alphabet and owned sequence views,
//! drives the [`Engine`], materializes owned output buffers, and tears the
//! caches down. There is no persisted state, no wire protocol, and no
//! tree-codec here; those remain the job of an external collaborator.

use crate::affinity::AffinityKind;
use crate::lcse::Engine;
use lcse_core::{Limits, PairMap, Result, SequenceView, Token};
use std::collections::HashMap;
use tracing::info;

/// Compute the Longest Common Balanced Subsequence Embedding of `buf1` and
/// `buf2` under `pair_map` and `affinity`.
///
/// `pair_map` is validated here (rejecting a non-injective map, or a token
/// that is both an open and a close, with [`lcse_core::LcseError::InvalidAlphabet`]),
/// as is every token in `buf1`/`buf2` against that alphabet
/// ([`lcse_core::LcseError::UnknownToken`]).
///
/// # Errors
/// - [`lcse_core::LcseError::InvalidAlphabet`] if `pair_map` is malformed.
/// - [`lcse_core::LcseError::UnknownToken`] if an input token is not covered by `pair_map`.
/// - [`lcse_core::LcseError::Unbalanced`] if an input (or a sub-view of it) is not balanced.
/// - [`lcse_core::LcseError::ResourceExhausted`] if `limits` caps are exceeded.
pub fn lcse_compute(
    buf1: &[Token],
    buf2: &[Token],
    pair_map: HashMap<Token, Token>,
    affinity: AffinityKind,
    limits: Limits,
) -> Result<(f64, (Vec<Token>, Vec<Token>))> {
    let _span = tracing::info_span!("lcse_compute", len1 = buf1.len(), len2 = buf2.len()).entered();

    let pair_map = PairMap::new(pair_map)?;
    pair_map.validate(buf1)?;
    pair_map.validate(buf2)?;

    let s1 = SequenceView::from_owned(buf1.to_vec());
    let s2 = SequenceView::from_owned(buf2.to_vec());

    let mut engine = Engine::new(&pair_map, &affinity, limits);
    let outcome = engine.lcse(&s1, &s2)?;

    info!(
        score = outcome.score,
        decomposition_entries = engine.decomposition_cache_len(),
        memo_entries = engine.memo_len(),
        "lcse_compute finished"
    );

    // Engine, caches, and input views are dropped here, releasing every
    // intermediate buffer; only the cloned winning outputs survive.
    Ok((outcome.score, (outcome.out1.to_vec(), outcome.out2.to_vec())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paren_map() -> HashMap<Token, Token> {
        HashMap::from([(b'(' as Token, b')' as Token), (b'[' as Token, b']' as Token)])
    }

    fn tokens(s: &str) -> Vec<Token> {
        s.bytes().map(Token::from).collect()
    }

    #[test]
    fn rejects_invalid_alphabet_at_call_entry() {
        let bad = HashMap::from([(1, 2), (3, 2)]); // duplicate close target
        let err = lcse_compute(&[], &[], bad, AffinityKind::Universal, Limits::default())
            .unwrap_err();
        assert!(matches!(err, lcse_core::LcseError::InvalidAlphabet(_)));
    }

    #[test]
    fn rejects_unknown_token_at_call_entry() {
        let err = lcse_compute(
            &tokens("(x)"),
            &tokens("()"),
            paren_map(),
            AffinityKind::StrictEquality,
            Limits::default(),
        )
        .unwrap_err();
        assert!(matches!(err, lcse_core::LcseError::UnknownToken { .. }));
    }

    #[test]
    fn scenario_1_identical_single_pair() {
        let (score, (o1, o2)) = lcse_compute(
            &tokens("()"),
            &tokens("()"),
            paren_map(),
            AffinityKind::StrictEquality,
            Limits::default(),
        )
        .expect("ok");
        assert_eq!(score, 1.0);
        assert_eq!(o1, tokens("()"));
        assert_eq!(o2, tokens("()"));
    }

    #[test]
    fn scenario_5_empty_input() {
        let (score, (o1, o2)) = lcse_compute(
            &tokens(""),
            &tokens("()"),
            paren_map(),
            AffinityKind::StrictEquality,
            Limits::default(),
        )
        .expect("ok");
        assert_eq!(score, 0.0);
        assert!(o1.is_empty());
        assert!(o2.is_empty());
    }
}
