pub mod cli;
pub mod client;
pub mod config;

use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::Context;
use flashcard_core::{
    deck_file_name, CardPipeline, Categories, Category, Deck, MinSpacing, PipelineStats, PromptTranslator,
    RatePolicy, Translator,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;
use crate::client::ChatClient;
use crate::config::{Config, ConfigError};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Exported(Summary),
    /// Stopped by a shutdown signal before the deck was written.
    Interrupted,
}

/// Result of a finished export.
#[derive(Debug, Clone)]
pub struct Summary {
    pub path: PathBuf,
    pub stats: PipelineStats,
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Convert the file named in `args`, reading configuration from the environment.
pub async fn run(args: Args) -> anyhow::Result<Outcome> {
    ensure_input(&args.input)?;
    let config = Config::from_env()?;
    run_until(&args, &config, tokio::signal::ctrl_c()).await
}

/// Convert the file named in `args` unless `shutdown` completes first.
///
/// When `shutdown` wins, the in-flight conversion is dropped and no deck
/// file is written.
pub async fn run_until<F>(args: &Args, config: &Config, shutdown: F) -> anyhow::Result<Outcome>
where
    F: Future,
{
    info!(model = %config.model, url = %config.api_url, "initializing API client");
    let client = ChatClient::new(config).context("failed to build HTTP client")?;
    let translator = PromptTranslator::new(client, config.target_language.clone());
    let mut pipeline = CardPipeline::new(translator, MinSpacing::new(config.delay));

    let conversion = convert(
        &args.input,
        args.output_dir.as_deref(),
        args.categories(),
        &mut pipeline,
    );

    tokio::select! {
        summary = conversion => Ok(Outcome::Exported(summary?)),
        _ = shutdown => {
            warn!("interrupted, no deck written");
            Ok(Outcome::Interrupted)
        }
    }
}

/// Read `input`, turn it into cards and write the deck file.
///
/// The deck is only written once every span has been processed.
pub async fn convert<T, R>(
    input: &Path,
    output_dir: Option<&Path>,
    categories: Categories,
    pipeline: &mut CardPipeline<T, R>,
) -> anyhow::Result<Summary>
where
    T: Translator,
    R: RatePolicy,
{
    let document = load_document(input)?;

    info!(path = %input.display(), "extracting marked text");
    let deck: Deck = pipeline.run(&document, categories).await.into_iter().collect();
    if deck.is_empty() {
        info!(path = %input.display(), "no marked text found");
    }

    let path = output_path(input, output_dir);
    fs::write(&path, deck.render())
        .with_context(|| format!("failed to write deck to {}", path.display()))?;

    let stats = pipeline.stats();
    info!(
        path = %path.display(),
        cards = deck.len(),
        terms = deck.count(Category::Term),
        phrases = deck.count(Category::Phrase),
        sentences = deck.count(Category::Sentence),
        failed = stats.failed,
        "exported deck"
    );
    Ok(Summary { path, stats })
}

/// Where the deck for `input` is written.
pub fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir.or_else(|| input.parent());
    let name = deck_file_name(input);
    match dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

fn ensure_input(input: &Path) -> Result<(), ConfigError> {
    if input.is_file() {
        Ok(())
    } else {
        Err(ConfigError::InputNotFound(input.to_path_buf()))
    }
}

fn load_document(input: &Path) -> anyhow::Result<String> {
    ensure_input(input)?;
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
