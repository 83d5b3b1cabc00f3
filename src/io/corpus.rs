//!
//! Whitespace-segmented corpus reader
//!
//! One sentence per line, words separated by whitespace. Labels follow the
//! word-boundary convention of the training corpus: a single-symbol word is
//! `S`, a longer word is `B` followed by `M`s.
//!
use crate::common::{to_sequence, Sequence};
use log::warn;
use std::fs;
use std::path::Path;

/// the tag alphabet the corpus convention produces
pub const SEGMENT_TAGS: [&str; 3] = ["B", "M", "S"];

///
/// Boundary labels of one word of `len` symbols.
///
pub fn word_labels(len: usize) -> Vec<&'static str> {
    match len {
        0 => Vec::new(),
        1 => vec!["S"],
        n => {
            let mut labels = vec!["B"];
            labels.extend(std::iter::repeat("M").take(n - 1));
            labels
        }
    }
}

///
/// Parse corpus text into aligned (symbol, label) sequence pairs.
///
/// Blank lines are skipped. A line whose symbols and labels disagree in
/// length is dropped with a warning instead of failing the whole corpus.
///
pub fn parse_corpus_str(text: &str) -> (Vec<Sequence>, Vec<Vec<&'static str>>) {
    let mut texts = Vec::new();
    let mut labels = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut line_symbols = Sequence::new();
        let mut line_labels = Vec::new();
        for word in line.split_whitespace() {
            let symbols = to_sequence(word);
            line_labels.extend(word_labels(symbols.len()));
            line_symbols.extend(symbols);
        }
        if line_symbols.len() != line_labels.len() {
            warn!("line {}: symbol/label mismatch, line skipped", i + 1);
            continue;
        }
        texts.push(line_symbols);
        labels.push(line_labels);
    }
    (texts, labels)
}

///
/// Read and parse a corpus file.
///
pub fn parse_corpus<P: AsRef<Path>>(
    path: P,
) -> std::io::Result<(Vec<Sequence>, Vec<Vec<&'static str>>)> {
    let text = fs::read_to_string(path)?;
    Ok(parse_corpus_str(&text))
}

//
// tests
//
