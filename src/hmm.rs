//!
//! First-order hidden Markov model over tag sequences
//!
//! One shared parameter set (`model`), fitted by supervised counting
//! (`train`), queried by Viterbi decoding (`viterbi`) and by generative
//! sampling (`sample`).
//!
pub mod mocks;
pub mod model;
pub mod sample;
pub mod train;
pub mod viterbi;
