//!
//! Subcommand bodies of the `taghmm` binary
//!
//! The binary trains and queries word-segmentation models, so every
//! subcommand works on the `B`/`M`/`S` alphabet of the corpus convention.
//!
use crate::common::to_sequence;
use crate::error::HmmError;
use crate::hmm::model::TagHmm;
use crate::io::corpus;
use crate::tagset::TagSet;
use log::info;
use serde::Serialize;
use std::error::Error;

fn segmenter(model_path: &str) -> TagHmm {
    TagHmm::new(TagSet::new(corpus::SEGMENT_TAGS.to_vec()), model_path)
}

///
/// Train a segmentation model from a whitespace-segmented corpus file and
/// store it at `model_path`.
///
pub fn train(corpus_path: &str, model_path: &str) -> Result<(), Box<dyn Error>> {
    let (texts, labels) = corpus::parse_corpus(corpus_path)?;
    info!("{} training sequences read from {}", texts.len(), corpus_path);
    let mut hmm = segmenter(model_path);
    hmm.train(&texts, &labels)?;
    println!("model written to {}", model_path);
    Ok(())
}

///
/// Load a stored model and tag `text`, one symbol/tag pair per line.
///
pub fn predict(model_path: &str, text: &str) -> Result<(), Box<dyn Error>> {
    let mut hmm = segmenter(model_path);
    hmm.load()?;
    let symbols = to_sequence(text);
    let tags = hmm.predict(&symbols)?;
    for (symbol, tag) in symbols.iter().zip(&tags) {
        println!("{}\t{}", symbol, tag);
    }
    Ok(())
}

#[derive(Serialize)]
struct ModelDump {
    tags: Vec<String>,
    n_symbols: usize,
    init: Vec<f64>,
    trans: Vec<Vec<f64>>,
}

///
/// Print a JSON summary of a stored model.
///
pub fn dump(model_path: &str) -> Result<(), Box<dyn Error>> {
    let mut hmm = segmenter(model_path);
    hmm.load()?;
    let tables = hmm.tables().ok_or(HmmError::ModelNotLoaded)?;
    let n = hmm.tags().len();
    let dump = ModelDump {
        tags: hmm.tags().names().to_vec(),
        n_symbols: tables.vocab.len(),
        init: tables.init.iter().map(|p| p.to_value()).collect(),
        trans: (0..n)
            .map(|t| tables.trans.row(t).iter().map(|p| p.to_value()).collect())
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
