//!
//! Mock corpora and tables for tests
//!
use super::model::HmmTables;
use crate::common::{to_sequence, Sequence};
use crate::prob::p;
use crate::tagset::TagSet;
use crate::vocab::Vocab;

///
/// the `B`/`M`/`S` segmentation alphabet used across the tests
///
pub fn mock_tags() -> TagSet {
    TagSet::new(vec!["B", "M", "S"])
}

///
/// three short segmented sentences with aligned labels
///
pub fn mock_corpus() -> (Vec<Sequence>, Vec<Vec<&'static str>>) {
    let texts = vec![to_sequence("abc"), to_sequence("ab"), to_sequence("c")];
    let labels = vec![vec!["B", "M", "S"], vec!["B", "M"], vec!["S"]];
    (texts, labels)
}

///
/// Hand-filled tables over tags `{B, M, S}` and symbols `{a, b, c}`,
/// shaped like the single sentence `abc` labeled `B M S`: a deterministic
/// chain B -> M -> S emitting `a`, `b`, `c`.
///
pub fn mock_tables() -> (TagSet, HmmTables) {
    let tags = mock_tags();
    let vocab = Vocab::from_sequences(&[to_sequence("abc")]);
    let mut tables = HmmTables::zero(tags.len(), vocab);
    tables.init[0] = p(1.0);
    tables.trans[[0, 1]] = p(1.0);
    tables.trans[[1, 2]] = p(1.0);
    tables.emit[[0, 0]] = p(1.0);
    tables.emit[[1, 1]] = p(1.0);
    tables.emit[[2, 2]] = p(1.0);
    (tags, tables)
}
