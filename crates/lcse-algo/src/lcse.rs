// crates/lcse-algo/src/lcse.rs

//! The LCSE recursion and its memo table (`SPEC_FULL.md` §4.E).
//!
//! [`Engine`] owns the decomposition cache and the `(S1, S2) -> outcome`
//! memo for a single top-level call. It is not safe to reuse across calls
//! with different input buffers: memo keys are identity-based on views that
//! only this engine's own decomposition cache ever produces.

use crate::affinity::AffinityKind;
use crate::decompose::DecompositionCache;
use lcse_core::{LcseError, Limits, PairMap, Result, SequenceView, Token};
use std::collections::HashMap;
use tracing::trace;

/// The result of matching two balanced views: a score and the pair of
/// aligned, equal-length balanced embeddings that achieve it.
#[derive(Clone, Debug)]
pub struct LcseOutcome {
    /// Sum of `aff` over aligned open-token pairs in `(out1, out2)`.
    pub score: f64,
    /// A balanced embedding (subsequence) of the first input.
    pub out1: SequenceView,
    /// A balanced embedding (subsequence) of the second input, aligned with
    /// `out1` position-by-position.
    pub out2: SequenceView,
}

impl LcseOutcome {
    fn empty() -> Self {
        Self {
            score: 0.0,
            out1: SequenceView::from_owned(Vec::new()),
            out2: SequenceView::from_owned(Vec::new()),
        }
    }
}

/// Drives the memoized LCSE recursion for one top-level call.
pub struct Engine<'a> {
    pair_map: &'a PairMap,
    affinity: &'a AffinityKind,
    limits: Limits,
    decomp: DecompositionCache,
    memo: HashMap<(SequenceView, SequenceView), LcseOutcome>,
    depth: usize,
}

impl<'a> Engine<'a> {
    /// Construct a fresh engine with empty decomposition and memo caches.
    #[must_use]
    pub fn new(pair_map: &'a PairMap, affinity: &'a AffinityKind, limits: Limits) -> Self {
        Self {
            pair_map,
            affinity,
            limits,
            decomp: DecompositionCache::new(),
            memo: HashMap::new(),
            depth: 0,
        }
    }

    /// Number of distinct sub-views decomposed so far.
    #[must_use]
    pub fn decomposition_cache_len(&self) -> usize {
        self.decomp.len()
    }

    /// Number of distinct `(S1, S2)` pairs memoized so far.
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Compute the maximum-affinity common balanced embedding of `s1` and `s2`.
    ///
    /// # Errors
    /// Propagates [`LcseError::Unbalanced`] from decomposition and
    /// [`LcseError::ResourceExhausted`] if a configured [`Limits`] cap is hit.
    pub fn lcse(&mut self, s1: &SequenceView, s2: &SequenceView) -> Result<LcseOutcome> {
        self.depth += 1;
        if let Some(cap) = self.limits.max_recursion_depth {
            if self.depth > cap {
                self.depth -= 1;
                return Err(LcseError::ResourceExhausted(format!(
                    "recursion depth exceeded cap of {cap}"
                )));
            }
        }
        let result = self.lcse_inner(s1, s2);
        self.depth -= 1;
        result
    }

    fn lcse_inner(&mut self, s1: &SequenceView, s2: &SequenceView) -> Result<LcseOutcome> {
        if s1.is_empty() || s2.is_empty() {
            return Ok(LcseOutcome::empty());
        }

        let key = (s1.clone(), s2.clone());
        if let Some(cached) = self.memo.get(&key) {
            trace!(len1 = s1.len(), len2 = s2.len(), "lcse memo hit");
            return Ok(cached.clone());
        }

        if let Some(cap) = self.limits.max_memo_entries {
            if self.memo.len() >= cap {
                return Err(LcseError::ResourceExhausted(format!(
                    "memo table exceeded cap of {cap} entries"
                )));
            }
        }
        trace!(len1 = s1.len(), len2 = s2.len(), "lcse memo miss");

        let d1 = self.decomp.decompose(s1, self.pair_map, &self.limits)?;
        let d2 = self.decomp.decompose(s2, self.pair_map, &self.limits)?;

        // Candidate 1: drop S1's root pair.
        let mut best = self.lcse(&d1.head_tail, s2)?;

        // Candidate 2: drop S2's root pair. Only adopted on a strict
        // improvement, so candidate 1 wins ties (SPEC_FULL.md §9).
        let drop_s2 = self.lcse(s1, &d2.head_tail)?;
        if drop_s2.score > best.score {
            best = drop_s2;
        }

        // Candidate 3: match both roots, only if the affinity gate is open.
        let root_affinity = self.affinity.score(d1.a, d2.a);
        if root_affinity > 0.0 {
            let head_result = self.lcse(&d1.head, &d2.head)?;
            let tail_result = self.lcse(&d1.tail, &d2.tail)?;
            let matched_score = root_affinity + head_result.score + tail_result.score;
            if matched_score > best.score {
                best = LcseOutcome {
                    score: matched_score,
                    out1: concat_matched(d1.a, d1.b, &head_result.out1, &tail_result.out1),
                    out2: concat_matched(d2.a, d2.b, &head_result.out2, &tail_result.out2),
                };
            }
        }

        self.memo.insert(key, best.clone());
        Ok(best)
    }
}

/// Build `[a] ⊕ head ⊕ [b] ⊕ tail` as a single fresh owned buffer.
fn concat_matched(a: Token, b: Token, head: &SequenceView, tail: &SequenceView) -> SequenceView {
    let mut out = Vec::with_capacity(head.len() + tail.len() + 2);
    out.push(a);
    out.extend(head.iter());
    out.push(b);
    out.extend(tail.iter());
    SequenceView::from_owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap as StdHashMap;

    fn paren_map() -> PairMap {
        PairMap::new(StdHashMap::from([(b'(' as Token, b')' as Token), (b'[' as Token, b']' as Token)]))
            .expect("valid alphabet")
    }

    fn tokens(s: &str) -> Vec<Token> {
        s.bytes().map(Token::from).collect()
    }

    fn view(s: &str) -> SequenceView {
        SequenceView::from_owned(tokens(s))
    }

    #[test]
    fn empty_input_yields_zero_score() {
        let pm = paren_map();
        let aff = AffinityKind::StrictEquality;
        let mut eng = Engine::new(&pm, &aff, Limits::default());
        let out = eng.lcse(&view(""), &view("()")).expect("ok");
        assert_eq!(out.score, 0.0);
        assert!(out.out1.is_empty());
        assert!(out.out2.is_empty());
    }

    #[test]
    fn identical_single_pair_matches() {
        let pm = paren_map();
        let aff = AffinityKind::StrictEquality;
        let mut eng = Engine::new(&pm, &aff, Limits::default());
        let out = eng.lcse(&view("()"), &view("()")).expect("ok");
        assert_eq!(out.score, 1.0);
        assert_eq!(out.out1.to_vec(), tokens("()"));
        assert_eq!(out.out2.to_vec(), tokens("()"));
    }

    #[test]
    fn disjoint_alphabets_score_zero_under_strict_equality() {
        let pm = paren_map();
        let aff = AffinityKind::StrictEquality;
        let mut eng = Engine::new(&pm, &aff, Limits::default());
        let out = eng.lcse(&view("()"), &view("[]")).expect("ok");
        assert_eq!(out.score, 0.0);
    }

    #[test]
    fn universal_affinity_matches_disjoint_alphabets() {
        let pm = paren_map();
        let aff = AffinityKind::Universal;
        let mut eng = Engine::new(&pm, &aff, Limits::default());
        let out = eng.lcse(&view("()"), &view("[]")).expect("ok");
        assert_eq!(out.score, 1.0);
    }

    #[test]
    fn nested_vs_flat_drops_outer_pair() {
        let pm = paren_map();
        let aff = AffinityKind::StrictEquality;
        let mut eng = Engine::new(&pm, &aff, Limits::default());
        let out = eng.lcse(&view("(())"), &view("()")).expect("ok");
        assert_eq!(out.score, 1.0);
    }

    #[test]
    fn recursion_depth_cap_is_enforced() {
        let pm = paren_map();
        let aff = AffinityKind::StrictEquality;
        let limits = Limits::unbounded().with_max_recursion_depth(1);
        let mut eng = Engine::new(&pm, &aff, limits);
        let err = eng.lcse(&view("(())"), &view("(())")).unwrap_err();
        assert!(matches!(err, LcseError::ResourceExhausted(_)));
    }

    #[test]
    fn memo_entries_cap_is_enforced() {
        let pm = paren_map();
        let aff = AffinityKind::StrictEquality;
        // "(())" vs "(())" needs more than one distinct (S1, S2) memo entry
        // to resolve, so a cap of 1 must be exceeded partway through.
        let limits = Limits::unbounded().with_max_memo_entries(1);
        let mut eng = Engine::new(&pm, &aff, limits);
        let err = eng.lcse(&view("(())"), &view("(())")).unwrap_err();
        assert!(matches!(err, LcseError::ResourceExhausted(_)));
    }

    #[test]
    fn memo_and_decomposition_caches_grow_monotonically() {
        let pm = paren_map();
        let aff = AffinityKind::StrictEquality;
        let mut eng = Engine::new(&pm, &aff, Limits::default());
        let _ = eng.lcse(&view("(()[])"), &view("([])()"));
        assert!(eng.memo_len() > 0);
        assert!(eng.decomposition_cache_len() > 0);
    }
}
