//!
//! Sequential binary model format
//!
//! A fitted model is four bincode records written back to back, in fixed
//! order: start distribution (with the tag-name list), transition table,
//! emission table, vocabulary. The file is read and written strictly
//! sequentially and carries no version or checksum; consumers rebuild the
//! model instead of migrating the format.
//!
use crate::common::Symbol;
use crate::error::StorageError;
use crate::hmm::model::HmmTables;
use crate::prob::Prob;
use crate::tagset::TagSet;
use crate::vocab::Vocab;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StartRecord {
    tags: Vec<String>,
    probs: Vec<Prob>,
}

/// row-major `n_tags x n_tags`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TransRecord {
    probs: Vec<Prob>,
}

/// row-major `n_tags x n_symbols`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EmitRecord {
    probs: Vec<Prob>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct VocabRecord {
    symbols: Vec<Symbol>,
}

///
/// Write the fitted tables to `path`.
///
/// The records go to a temp file in the destination directory first and an
/// atomic rename commits them, so a crash mid-save cannot leave a
/// truncated model behind.
///
pub fn save_tables(tables: &HmmTables, tags: &TagSet, path: &Path) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let tmp = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(&tmp);
    bincode::serialize_into(
        &mut writer,
        &StartRecord {
            tags: tags.names().to_vec(),
            probs: tables.init.clone(),
        },
    )?;
    bincode::serialize_into(
        &mut writer,
        &TransRecord {
            probs: tables.trans.iter().copied().collect(),
        },
    )?;
    bincode::serialize_into(
        &mut writer,
        &EmitRecord {
            probs: tables.emit.iter().copied().collect(),
        },
    )?;
    bincode::serialize_into(
        &mut writer,
        &VocabRecord {
            symbols: tables.vocab.symbols().to_vec(),
        },
    )?;
    writer.flush()?;
    drop(writer);
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

///
/// Read the four records back and rebuild the tables.
///
/// The tag list stored with the start record must match the tag set the
/// reading instance was constructed with.
///
pub fn load_tables(path: &Path, tags: &TagSet) -> Result<HmmTables, StorageError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let start: StartRecord = bincode::deserialize_from(&mut reader)?;
    let trans: TransRecord = bincode::deserialize_from(&mut reader)?;
    let emit: EmitRecord = bincode::deserialize_from(&mut reader)?;
    let vocab: VocabRecord = bincode::deserialize_from(&mut reader)?;

    if start.tags != tags.names() {
        return Err(StorageError::TagSetMismatch {
            expected: start.tags.join(","),
            actual: tags.names().join(","),
        });
    }
    let n = tags.len();
    if start.probs.len() != n {
        return Err(StorageError::Shape);
    }
    let trans = Array2::from_shape_vec((n, n), trans.probs).map_err(|_| StorageError::Shape)?;
    let vocab = Vocab::from_symbols(vocab.symbols);
    let emit =
        Array2::from_shape_vec((n, vocab.len()), emit.probs).map_err(|_| StorageError::Shape)?;
    Ok(HmmTables {
        init: start.probs,
        trans,
        emit,
        vocab,
    })
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::mocks::mock_tables;
    use crate::tagset::TagSet;

    #[test]
    fn save_load_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let (tags, tables) = mock_tables();
        save_tables(&tables, &tags, &path).unwrap();
        let restored = load_tables(&path, &tags).unwrap();
        assert_eq!(tables, restored);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db").join("model.bin");
        let (tags, tables) = mock_tables();
        save_tables(&tables, &tags, &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn load_rejects_a_different_tag_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let (tags, tables) = mock_tables();
        save_tables(&tables, &tags, &path).unwrap();
        let other = TagSet::new(vec!["B", "I", "O"]);
        match load_tables(&path, &other) {
            Err(StorageError::TagSetMismatch { expected, actual }) => {
                assert_eq!(expected, "B,M,S");
                assert_eq!(actual, "B,I,O");
            }
            res => panic!("unexpected result {:?}", res.map(|_| ())),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing.bin");
        let (tags, _tables) = mock_tables();
        assert!(matches!(
            load_tables(&path, &tags),
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn truncated_file_is_a_corrupt_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let (tags, tables) = mock_tables();
        save_tables(&tables, &tags, &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        assert!(matches!(
            load_tables(&path, &tags),
            Err(StorageError::Corrupt(_))
        ));
    }
}
