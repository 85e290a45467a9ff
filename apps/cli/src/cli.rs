//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use flashcard_core::Categories;

/// Turn **terms**, *phrases* and ==sentences== marked in a markdown file
/// into an Anki deck with translations.
#[derive(Debug, Parser)]
#[command(name = "md-to-anki", version)]
pub struct Args {
    /// Markdown file to convert
    pub input: PathBuf,

    /// Directory for the deck file [default: the input file's directory]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip **bold** terms
    #[arg(long)]
    pub no_terms: bool,

    /// Skip *italic* phrases
    #[arg(long)]
    pub no_phrases: bool,

    /// Skip ==highlighted== sentences
    #[arg(long)]
    pub no_sentences: bool,
}

impl Args {
    pub fn categories(&self) -> Categories {
        Categories {
            terms: !self.no_terms,
            phrases: !self.no_phrases,
            sentences: !self.no_sentences,
        }
    }
}
