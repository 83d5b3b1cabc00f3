//!
//! end-to-end tests of training, persistence and decoding
//!
#[macro_use]
extern crate approx;

use taghmm::common::to_sequence;
use taghmm::error::{HmmError, StorageError};
use taghmm::hmm::model::TagHmm;
use taghmm::io::corpus::parse_corpus_str;
use taghmm::prob::{p, Prob};
use taghmm::tagset::TagSet;

fn tags_bms() -> TagSet {
    TagSet::new(vec!["B", "M", "S"])
}

fn model_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("model.bin")
}

#[test]
fn single_example_tables_and_decode() {
    let dir = tempfile::tempdir().unwrap();
    let mut hmm = TagHmm::new(tags_bms(), model_path(&dir));
    hmm.train(&[to_sequence("abc")], &[vec!["B", "M", "S"]])
        .unwrap();

    let tables = hmm.tables().unwrap();
    assert_eq!(tables.init[0], p(1.0));
    assert_eq!(tables.init[1], p(0.0));
    assert_eq!(tables.init[2], p(0.0));
    // B emits only `a`
    assert_eq!(tables.emission(0, 'a'), p(1.0));
    assert_eq!(tables.emission(0, 'b'), p(0.0));
    assert_eq!(tables.emission(0, 'c'), p(0.0));

    assert_eq!(
        hmm.predict(&to_sequence("abc")).unwrap(),
        vec!["B", "M", "S"]
    );
}

#[test]
fn start_distribution_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let mut hmm = TagHmm::new(tags_bms(), model_path(&dir));
    let texts = vec![to_sequence("abc"), to_sequence("ab"), to_sequence("c")];
    let labels = vec![vec!["B", "M", "S"], vec!["B", "M"], vec!["S"]];
    hmm.train(&texts, &labels).unwrap();
    let tables = hmm.tables().unwrap();
    let sum: Prob = tables.init.iter().sum();
    assert_abs_diff_eq!(sum, p(1.0));
    assert_abs_diff_eq!(tables.init[0], p(2.0 / 3.0));
    assert_abs_diff_eq!(tables.init[2], p(1.0 / 3.0));
}

#[test]
fn transition_rows_keep_the_total_count_denominator() {
    // `ab` labeled B B: two B occurrences, one B->B transition. The
    // transition row is divided by the *total* count (2), not by the count
    // of outgoing transitions (1), so it sums to 0.5 while the emission
    // row still sums to 1: both rows share the same denominator.
    let dir = tempfile::tempdir().unwrap();
    let mut hmm = TagHmm::new(TagSet::new(vec!["B", "S"]), model_path(&dir));
    hmm.train(&[to_sequence("ab")], &[vec!["B", "B"]]).unwrap();
    let tables = hmm.tables().unwrap();
    let trans_row: Prob = tables.trans.row(0).sum();
    let emit_row: Prob = tables.emit.row(0).sum();
    assert_abs_diff_eq!(trans_row, p(0.5));
    assert_abs_diff_eq!(emit_row, p(1.0));
}

#[test]
fn saved_model_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = model_path(&dir);
    let mut hmm = TagHmm::new(tags_bms(), &path);
    let (texts, labels) = (
        vec![to_sequence("abc"), to_sequence("ab"), to_sequence("cab")],
        vec![vec!["B", "M", "S"], vec!["B", "M"], vec!["S", "B", "M"]],
    );
    hmm.train(&texts, &labels).unwrap();
    let trained = hmm.tables().unwrap().clone();

    let mut restored = TagHmm::new(tags_bms(), &path);
    assert!(!restored.is_loaded());
    restored.load().unwrap();
    assert_eq!(restored.tables().unwrap(), &trained);
    assert_eq!(
        restored.predict(&to_sequence("abc")).unwrap(),
        hmm.predict(&to_sequence("abc")).unwrap()
    );
}

#[test]
fn predict_before_train_or_load_is_a_hard_error() {
    // decoding without a model is an explicit error, not a silent no-op
    let hmm = TagHmm::new(tags_bms(), "/nonexistent/model.bin");
    match hmm.predict(&to_sequence("abc")) {
        Err(HmmError::ModelNotLoaded) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn unseen_symbols_decode_by_start_and_transition_weight() {
    let dir = tempfile::tempdir().unwrap();
    let mut hmm = TagHmm::new(tags_bms(), model_path(&dir));
    let texts = vec![to_sequence("abc"), to_sequence("ab")];
    let labels = vec![vec!["B", "M", "S"], vec!["B", "M"]];
    hmm.train(&texts, &labels).unwrap();
    // every symbol unseen: emissions degenerate to 1.0 and the trained
    // chain B -> M -> S decides the path
    let tags = hmm.predict(&to_sequence("xyz")).unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags, vec!["B", "M", "S"]);
}

#[test]
fn length_one_sequence_trains_without_transitions() {
    let dir = tempfile::tempdir().unwrap();
    let mut hmm = TagHmm::new(tags_bms(), model_path(&dir));
    hmm.train(&[to_sequence("a")], &[vec!["S"]]).unwrap();
    let tables = hmm.tables().unwrap();
    for t in 0..3 {
        let row: Prob = tables.trans.row(t).sum();
        assert!(row.is_zero());
    }
    assert_eq!(hmm.predict(&to_sequence("a")).unwrap(), vec!["S"]);
}

#[test]
fn malformed_corpus_leaves_no_model_behind() {
    let dir = tempfile::tempdir().unwrap();
    let mut hmm = TagHmm::new(tags_bms(), model_path(&dir));
    let err = hmm
        .train(&[to_sequence("ab"), to_sequence("c")], &[vec!["B", "M"]])
        .unwrap_err();
    assert!(matches!(err, HmmError::InputShape(_)));
    assert!(!hmm.is_loaded());
    assert!(!model_path(&dir).exists());
}

#[test]
fn load_rejects_a_mismatched_tag_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = model_path(&dir);
    let mut hmm = TagHmm::new(tags_bms(), &path);
    hmm.train(&[to_sequence("abc")], &[vec!["B", "M", "S"]])
        .unwrap();

    let mut other = TagHmm::new(TagSet::new(vec!["B", "I", "O"]), &path);
    match other.load() {
        Err(HmmError::Storage(StorageError::TagSetMismatch { .. })) => {}
        other => panic!("unexpected result {:?}", other),
    }
    assert!(!other.is_loaded());
}

#[test]
fn truncated_model_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = model_path(&dir);
    let mut hmm = TagHmm::new(tags_bms(), &path);
    hmm.train(&[to_sequence("abc")], &[vec!["B", "M", "S"]])
        .unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let mut restored = TagHmm::new(tags_bms(), &path);
    match restored.load() {
        Err(HmmError::Storage(_)) => {}
        other => panic!("unexpected result {:?}", other),
    }
    assert!(!restored.is_loaded());
}

#[test]
fn corpus_reader_feeds_training_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let (texts, labels) = parse_corpus_str("结婚 的 和 尚未 结婚 的\nab c\n");
    assert_eq!(texts.len(), 2);
    let mut hmm = TagHmm::new(tags_bms(), model_path(&dir));
    hmm.train(&texts, &labels).unwrap();
    let tags = hmm.predict(&to_sequence("结婚的")).unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[0], "B");
}

#[test]
fn sampling_is_seeded_and_stays_in_the_alphabet() {
    let dir = tempfile::tempdir().unwrap();
    let mut hmm = TagHmm::new(tags_bms(), model_path(&dir));
    let texts = vec![to_sequence("abc"), to_sequence("ab"), to_sequence("c")];
    let labels = vec![vec!["B", "M", "S"], vec!["B", "M"], vec!["S"]];
    hmm.train(&texts, &labels).unwrap();

    let (symbols, tags) = hmm.sample(5, 7).unwrap();
    assert_eq!(symbols.len(), tags.len());
    assert!(symbols.len() <= 5);
    for tag in &tags {
        assert!(["B", "M", "S"].contains(tag));
    }
    let again = hmm.sample(5, 7).unwrap();
    assert_eq!(again.0, symbols);
}
