//!
//! Error taxonomy of training, decoding and model storage
//!
//! All operations are one-shot: nothing retries, and a failed training run
//! never leaves a partially fitted model on the instance.
//!
use thiserror::Error;

///
/// Failures of the tagger operations.
///
#[derive(Error, Debug)]
pub enum HmmError {
    /// training inputs have mismatched lengths or misaligned pairs
    #[error("training input shape mismatch: {0}")]
    InputShape(String),
    /// a training label is not a member of the tag set
    #[error("unknown tag `{0}` in training labels")]
    UnknownTag(String),
    /// decode requested before any successful train or load
    #[error("model is not loaded: train or load before predicting")]
    ModelNotLoaded,
    /// the persisted model could not be written or read back
    #[error("model storage: {0}")]
    Storage(#[from] StorageError),
}

///
/// Failures of the model file itself.
///
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("model file io: {0}")]
    Io(#[from] std::io::Error),
    #[error("model file is truncated or corrupt: {0}")]
    Corrupt(#[from] bincode::Error),
    #[error("model file table shapes are inconsistent")]
    Shape,
    /// the file was written by a model with a different tag alphabet
    #[error("model file was trained with tags [{expected}], instance has [{actual}]")]
    TagSetMismatch { expected: String, actual: String },
}
