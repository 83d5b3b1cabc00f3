//!
//! commonly used structs and functions
//!
pub use crate::common::{sequence_to_string, to_sequence, Sequence, Symbol};
pub use crate::error::{HmmError, StorageError};
pub use crate::hmm::model::{HmmTables, TagHmm};
pub use crate::prob::{p, Prob};
pub use crate::tagset::{TagId, TagSet};
pub use crate::vocab::Vocab;
