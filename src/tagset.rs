//!
//! Fixed ordered alphabet of output tags
//!
use serde::{Deserialize, Serialize};

/// stable integer id of a tag, assigned in construction order
pub type TagId = usize;

///
/// Caller-supplied finite tag alphabet (e.g. `B`, `M`, `S`).
///
/// Ids follow construction order, so iteration order and the first-seen
/// tie-break of the decoder are stable across runs.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    names: Vec<String>,
}

impl TagSet {
    /// Constructor from ordered tag names.
    pub fn new<T: Into<String>>(names: Vec<T>) -> TagSet {
        let names: Vec<String> = names.into_iter().map(|n| n.into()).collect();
        assert!(!names.is_empty());
        TagSet { names }
    }
    /// the number of tags
    pub fn len(&self) -> usize {
        self.names.len()
    }
    ///
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    /// id of the given tag name
    pub fn id_of(&self, name: &str) -> Option<TagId> {
        self.names.iter().position(|n| n == name)
    }
    /// name of the given id
    pub fn name(&self, id: TagId) -> &str {
        &self.names[id]
    }
    /// all names in id order
    pub fn names(&self) -> &[String] {
        &self.names
    }
    /// iterator over all ids
    pub fn ids(&self) -> std::ops::Range<TagId> {
        0..self.names.len()
    }
}

impl std::fmt::Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.names.join(","))
    }
}

//
// tests
//
