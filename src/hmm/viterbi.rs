//!
//! Maximum-likelihood decoding (Viterbi)
//!
use super::model::{HmmTables, TagHmm};
use crate::common::Sequence;
use crate::error::HmmError;
use crate::prob::Prob;
use crate::tagset::TagId;
use log::debug;
use ndarray::Array2;

impl TagHmm {
    ///
    /// Decode the most probable tag sequence of `text`.
    ///
    /// The output has the same length as the input. Fails with
    /// `ModelNotLoaded` unless a model was trained or restored first.
    ///
    pub fn predict(&self, text: &Sequence) -> Result<Vec<&str>, HmmError> {
        let tables = self.loaded_tables()?;
        let (score, path) = viterbi(tables, text);
        debug!("viterbi best path score {}", score);
        Ok(path.into_iter().map(|t| self.tags().name(t)).collect())
    }
}

///
/// Viterbi recurrence over plain probability products.
///
/// `score[[i, t]]` is the best joint probability of a tag path of length
/// `i + 1` ending in `t` and explaining the first `i + 1` symbols;
/// `back[[i, t]]` is the maximizing predecessor. Only predecessors with
/// strictly positive score compete; when none has mass the path continues
/// through the first tag with a zero score. Ties keep the first tag in
/// alphabet order. The winning path is rebuilt backwards from the
/// single-step backpointers.
///
pub fn viterbi(tables: &HmmTables, text: &Sequence) -> (Prob, Vec<TagId>) {
    let n = tables.n_tags();
    if text.is_empty() {
        return (Prob::one(), Vec::new());
    }
    let len = text.len();
    let mut score = Array2::from_elem((len, n), Prob::zero());
    let mut back = Array2::<TagId>::zeros((len, n));

    for t in 0..n {
        score[[0, t]] = tables.init[t] * tables.emission(t, text[0]);
    }
    for i in 1..len {
        for t in 0..n {
            let e = tables.emission(t, text[i]);
            let mut best: Option<(Prob, TagId)> = None;
            for u in 0..n {
                if score[[i - 1, u]].is_zero() {
                    continue;
                }
                let s = score[[i - 1, u]] * tables.trans[[u, t]] * e;
                match best {
                    Some((b, _)) if s <= b => {}
                    _ => best = Some((s, u)),
                }
            }
            let (s, u) = best.unwrap_or((Prob::zero(), 0));
            score[[i, t]] = s;
            back[[i, t]] = u;
        }
    }

    let last = len - 1;
    let mut best_tag = 0;
    for t in 1..n {
        if score[[last, t]] > score[[last, best_tag]] {
            best_tag = t;
        }
    }
    let mut path = vec![0; len];
    path[last] = best_tag;
    for i in (1..len).rev() {
        path[i - 1] = back[[i, path[i]]];
    }
    (score[[last, best_tag]], path)
}

//
// tests
//
