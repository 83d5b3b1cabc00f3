//!
//! Model persistence and corpus reading
//!
pub mod corpus;
pub mod model;
