use clap::{Parser, Subcommand};

///
/// First-order HMM sequence tagger: supervised training, Viterbi decoding
/// and a persisted binary model.
///
#[derive(Parser, Debug)]
#[clap(name = "taghmm")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Train a segmentation model from a whitespace-segmented corpus
    Train {
        /// corpus file, one segmented sentence per line
        #[clap(long)]
        corpus: String,
        /// destination of the model file
        #[clap(long)]
        model: String,
    },
    /// Tag a text with a stored model
    Predict {
        /// model file written by `train`
        #[clap(long)]
        model: String,
        /// input text, decoded per character
        text: String,
    },
    /// Print a JSON summary of a stored model
    Dump {
        #[clap(long)]
        model: String,
    },
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();
    let result = match opts.command {
        Command::Train { corpus, model } => taghmm::cli::train(&corpus, &model),
        Command::Predict { model, text } => taghmm::cli::predict(&model, &text),
        Command::Dump { model } => taghmm::cli::dump(&model),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
