//!
//! Sampling tagged sequences from a fitted model
//!
use super::model::TagHmm;
use crate::common::{Sequence, Symbol};
use crate::error::HmmError;
use crate::prob::Prob;
use crate::tagset::TagId;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// pick randomly from the choices with its own probability.
/// `None` when no choice has mass.
///
fn pick_with_prob<R: Rng, T: Copy>(rng: &mut R, choices: &[(T, Prob)]) -> Option<T> {
    choices
        .choose_weighted(rng, |item| item.1.to_value())
        .ok()
        .map(|item| item.0)
}

impl TagHmm {
    ///
    /// Draw up to `len` (symbol, tag) pairs from the fitted model with a
    /// seeded RNG. The walk stops early once the current tag has no
    /// remaining emission or transition mass.
    ///
    pub fn sample(&self, len: usize, seed: u64) -> Result<(Sequence, Vec<&str>), HmmError> {
        let tables = self.loaded_tables()?;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut symbols = Sequence::new();
        let mut tags: Vec<TagId> = Vec::new();

        let starts: Vec<(TagId, Prob)> = (0..tables.n_tags())
            .map(|t| (t, tables.init[t]))
            .collect();
        let mut tag = match pick_with_prob(&mut rng, &starts) {
            Some(t) => t,
            None => return Ok((symbols, Vec::new())),
        };
        while symbols.len() < len {
            let emissions: Vec<(Symbol, Prob)> = tables
                .vocab
                .symbols()
                .iter()
                .enumerate()
                .map(|(s, &symbol)| (symbol, tables.emit[[tag, s]]))
                .collect();
            match pick_with_prob(&mut rng, &emissions) {
                Some(symbol) => {
                    symbols.push(symbol);
                    tags.push(tag);
                }
                None => break,
            }
            if symbols.len() == len {
                break;
            }
            let nexts: Vec<(TagId, Prob)> = (0..tables.n_tags())
                .map(|u| (u, tables.trans[[tag, u]]))
                .collect();
            match pick_with_prob(&mut rng, &nexts) {
                Some(u) => tag = u,
                None => break,
            }
        }
        let names = tags.into_iter().map(|t| self.tags().name(t)).collect();
        Ok((symbols, names))
    }
}

//
// tests
//
