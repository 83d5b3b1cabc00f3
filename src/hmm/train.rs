//!
//! Supervised parameter estimation by frequency counting
//!
use super::model::{HmmTables, TagHmm};
use crate::common::{Freq, Sequence};
use crate::error::HmmError;
use crate::io::model::save_tables;
use crate::prob::Prob;
use crate::tagset::TagId;
use crate::vocab::Vocab;
use itertools::izip;
use log::info;
use ndarray::Array2;

impl TagHmm {
    ///
    /// Fit the model on aligned (symbol, label) sequence pairs, write it to
    /// the configured model path and install it on this instance.
    ///
    /// The first position of a sequence feeds the start counter once and,
    /// like every position, the per-tag emission and total counters.
    /// Transition and emission rows are both normalized by the tag's total
    /// occurrence count, so the transition row of a tag that ends sequences
    /// sums below 1.
    ///
    /// Nothing is installed if a precondition or the final store fails; a
    /// previously loaded model stays in place.
    ///
    pub fn train<S: AsRef<str>>(
        &mut self,
        texts: &[Sequence],
        labels: &[Vec<S>],
    ) -> Result<(), HmmError> {
        if texts.is_empty() {
            return Err(HmmError::InputShape("empty training corpus".to_string()));
        }
        if texts.len() != labels.len() {
            return Err(HmmError::InputShape(format!(
                "{} symbol sequences but {} label sequences",
                texts.len(),
                labels.len()
            )));
        }

        let n = self.tags().len();
        let vocab = Vocab::from_sequences(texts);

        let mut init_count: Vec<Freq> = vec![0.0; n];
        let mut trans_count = Array2::<Freq>::zeros((n, n));
        let mut emit_count = Array2::<Freq>::zeros((n, vocab.len()));
        let mut total_count: Vec<Freq> = vec![0.0; n];

        for (i, (text, tags)) in izip!(texts, labels).enumerate() {
            if text.len() != tags.len() {
                return Err(HmmError::InputShape(format!(
                    "sequence {} has {} symbols but {} labels",
                    i,
                    text.len(),
                    tags.len()
                )));
            }
            let ids: Vec<TagId> = tags
                .iter()
                .map(|tag| {
                    self.tags()
                        .id_of(tag.as_ref())
                        .ok_or_else(|| HmmError::UnknownTag(tag.as_ref().to_string()))
                })
                .collect::<Result<_, _>>()?;
            if let Some(&first) = ids.first() {
                init_count[first] += 1.0;
            }
            for (pos, (&tag, &symbol)) in izip!(&ids, text).enumerate() {
                if pos > 0 {
                    trans_count[[ids[pos - 1], tag]] += 1.0;
                }
                let s = vocab.id_of(symbol).unwrap();
                emit_count[[tag, s]] += 1.0;
                total_count[tag] += 1.0;
            }
        }

        let n_seqs = texts.len() as Freq;
        let n_symbols = vocab.len();
        let mut tables = HmmTables::zero(n, vocab);
        for t in 0..n {
            tables.init[t] = Prob::from_prob(init_count[t] / n_seqs);
            if total_count[t] == 0.0 {
                // tag never occurred; its rows stay zero
                continue;
            }
            for u in 0..n {
                tables.trans[[t, u]] = Prob::from_prob(trans_count[[t, u]] / total_count[t]);
            }
            for s in 0..n_symbols {
                tables.emit[[t, s]] = Prob::from_prob(emit_count[[t, s]] / total_count[t]);
            }
        }

        save_tables(&tables, self.tags(), self.model_path())?;
        info!(
            "trained {} tags on {} sequences, {} symbols in vocabulary",
            n,
            texts.len(),
            n_symbols
        );
        self.install(tables);
        Ok(())
    }
}

//
// tests
//
