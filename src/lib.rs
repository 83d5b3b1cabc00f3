pub mod cli;
pub mod common;
pub mod error;
pub mod hmm;
pub mod io;
pub mod prelude;
pub mod prob;
pub mod tagset;
pub mod vocab;

#[macro_use]
extern crate approx;
