//! Core library for turning annotated markdown into flashcard decks.
//!
//! Provides:
//! - Span extraction for `**terms**`, `*phrases*` and `==sentences==`
//! - Sentence context resolution with markup stripping
//! - The translation contract and a prompt-based implementation
//! - Pacing policies for rate-limited backends
//! - The card pipeline and tab-separated deck rendering

pub mod context;
pub mod error;
pub mod export;
pub mod extract;
pub mod pacing;
pub mod pipeline;
pub mod translate;
pub mod types;

pub use context::{resolve_context, sentence_bounds, strip_markup};
pub use error::{Result, TranslateError};
pub use export::{deck_file_name, Deck};
pub use extract::{extract, extract_all, Spans};
pub use pacing::{MinSpacing, RatePolicy, Unthrottled};
pub use pipeline::{CardPipeline, PipelineStats};
pub use translate::{
    parse_gloss, parse_translation, Completion, PromptTranslator, Translator, DEFAULT_TARGET_LANGUAGE,
};
pub use types::{Card, Categories, Category, Enrichment, Gloss, Span, FAILURE_PREFIX};
