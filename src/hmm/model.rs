//!
//! Model state: the fitted probability tables and the owning instance
//!
use crate::common::Symbol;
use crate::error::HmmError;
use crate::prob::Prob;
use crate::tagset::{TagId, TagSet};
use crate::vocab::Vocab;
use log::warn;
use ndarray::Array2;
use std::path::{Path, PathBuf};

///
/// Fitted parameter set of a first-order HMM.
///
/// All tables are dense and indexed by `TagId` (and `SymbolId` for
/// emissions), so the Viterbi inner loop never hashes a tag.
///
#[derive(Debug, Clone, PartialEq)]
pub struct HmmTables {
    /// probability that a sequence starts in each tag
    pub init: Vec<Prob>,
    /// `trans[[a, b]]` = probability of moving from tag `a` to tag `b`
    pub trans: Array2<Prob>,
    /// `emit[[t, s]]` = probability of observing symbol `s` in tag `t`
    pub emit: Array2<Prob>,
    /// symbols seen in training; everything else is out-of-vocabulary
    pub vocab: Vocab,
}

impl HmmTables {
    /// Constructor with all probabilities zero.
    pub fn zero(n_tags: usize, vocab: Vocab) -> HmmTables {
        HmmTables {
            init: vec![Prob::zero(); n_tags],
            trans: Array2::zeros((n_tags, n_tags)),
            emit: Array2::zeros((n_tags, vocab.len())),
            vocab,
        }
    }
    /// the number of tags
    pub fn n_tags(&self) -> usize {
        self.init.len()
    }
    ///
    /// Emission probability of `symbol` under `tag`.
    ///
    /// An out-of-vocabulary symbol is uninformative: every tag emits it
    /// with probability 1, so start and transition weights alone decide.
    ///
    pub fn emission(&self, tag: TagId, symbol: Symbol) -> Prob {
        match self.vocab.id_of(symbol) {
            Some(s) => self.emit[[tag, s]],
            None => Prob::one(),
        }
    }
}

impl std::fmt::Display for HmmTables {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "tag\tinit\ttrans\temit_mass")?;
        for t in 0..self.n_tags() {
            let trans: Vec<String> = (0..self.n_tags())
                .map(|u| self.trans[[t, u]].to_string())
                .collect();
            let emit_mass: Prob = self.emit.row(t).sum();
            writeln!(f, "{}\t{}\t[{}]\t{}", t, self.init[t], trans.join(","), emit_mass)?;
        }
        Ok(())
    }
}

///
/// The HMM instance: tag alphabet, model-file location and (after a
/// successful train or load) the fitted tables.
///
/// Trainer and decoder both operate through this struct; the tables are
/// never handed out mutably.
///
#[derive(Debug)]
pub struct TagHmm {
    tags: TagSet,
    model_path: PathBuf,
    tables: Option<HmmTables>,
}

impl TagHmm {
    /// Constructor. The model stays unloaded until `train` or `load` succeeds.
    pub fn new<P: Into<PathBuf>>(tags: TagSet, model_path: P) -> TagHmm {
        TagHmm {
            tags,
            model_path: model_path.into(),
            tables: None,
        }
    }
    /// tag alphabet this instance was constructed with
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
    /// location of the persisted model
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
    /// fitted tables, if any
    pub fn tables(&self) -> Option<&HmmTables> {
        self.tables.as_ref()
    }
    /// whether a model has been trained or restored
    pub fn is_loaded(&self) -> bool {
        self.tables.is_some()
    }
    ///
    /// Restore the fitted tables from the model file.
    ///
    /// The file must have been written by a model with the same tag
    /// alphabet; a mismatch is a `StorageError`, not silent trust.
    ///
    pub fn load(&mut self) -> Result<(), HmmError> {
        let tables = crate::io::model::load_tables(&self.model_path, &self.tags)?;
        self.tables = Some(tables);
        Ok(())
    }
    pub(crate) fn install(&mut self, tables: HmmTables) {
        self.tables = Some(tables);
    }
    pub(crate) fn loaded_tables(&self) -> Result<&HmmTables, HmmError> {
        match &self.tables {
            Some(tables) => Ok(tables),
            None => {
                warn!("model is not loaded: train or load before decoding");
                Err(HmmError::ModelNotLoaded)
            }
        }
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::to_sequence;
    use crate::prob::p;

    #[test]
    fn zero_tables_shapes() {
        let vocab = Vocab::from_sequences(&[to_sequence("abc")]);
        let tables = HmmTables::zero(3, vocab);
        assert_eq!(tables.n_tags(), 3);
        assert_eq!(tables.trans.dim(), (3, 3));
        assert_eq!(tables.emit.dim(), (3, 3));
        assert!(tables.init.iter().all(|p| p.is_zero()));
    }

    #[test]
    fn emission_of_unknown_symbol_is_one() {
        let vocab = Vocab::from_sequences(&[to_sequence("ab")]);
        let mut tables = HmmTables::zero(2, vocab);
        tables.emit[[0, 0]] = p(0.25);
        assert_eq!(tables.emission(0, 'a'), p(0.25));
        assert_eq!(tables.emission(0, 'b'), p(0.0));
        assert_eq!(tables.emission(0, 'x'), p(1.0));
        assert_eq!(tables.emission(1, 'x'), p(1.0));
    }

    #[test]
    fn new_instance_is_unloaded() {
        let hmm = TagHmm::new(TagSet::new(vec!["B", "M", "S"]), "/tmp/model.bin");
        assert!(!hmm.is_loaded());
        assert!(hmm.tables().is_none());
        assert_eq!(hmm.tags().len(), 3);
    }
}
