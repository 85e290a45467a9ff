//! Card pipeline: spans in, enriched cards out.
//!
//! Spans are enriched strictly one at a time with the rate policy consulted
//! before every backend call. A failed call never aborts the run; the span
//! still produces a card carrying a failure placeholder.

use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::extract::extract;
use crate::pacing::RatePolicy;
use crate::translate::Translator;
use crate::types::{Card, Categories, Category, Enrichment, Span};

/// Longest sentence preview shown in progress output.
const PREVIEW_CHARS: usize = 50;

/// Counts for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub terms: usize,
    pub phrases: usize,
    pub sentences: usize,
    /// Cards that carry a failure placeholder.
    pub failed: usize,
}

impl PipelineStats {
    pub fn total(&self) -> usize {
        self.terms + self.phrases + self.sentences
    }

    fn count(&mut self, category: Category) {
        match category {
            Category::Term => self.terms += 1,
            Category::Phrase => self.phrases += 1,
            Category::Sentence => self.sentences += 1,
        }
    }
}

/// Sequential span-to-card converter.
pub struct CardPipeline<T, R> {
    translator: T,
    policy: R,
    stats: PipelineStats,
}

impl<T: Translator, R: RatePolicy> CardPipeline<T, R> {
    pub fn new(translator: T, policy: R) -> Self {
        Self {
            translator,
            policy,
            stats: PipelineStats::default(),
        }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// Extract and convert every enabled category of `document`.
    ///
    /// Cards come out terms first, then phrases, then sentences, each group
    /// in document order.
    pub async fn run(&mut self, document: &str, categories: Categories) -> Vec<Card> {
        let batches: Vec<(Category, Vec<Span>)> = categories
            .iter()
            .map(|category| (category, extract(document, category).collect()))
            .collect();

        for (category, spans) in &batches {
            info!(category = category.label(), count = spans.len(), "spans found");
        }

        let total = batches.iter().map(|(_, spans)| spans.len()).sum();
        let mut cards = Vec::with_capacity(total);
        for (_, spans) in batches {
            cards.extend(self.process(spans).await);
        }
        cards
    }

    /// Convert one category's spans into cards, one card per span.
    pub async fn process(&mut self, spans: Vec<Span>) -> Vec<Card> {
        let total = spans.len();
        let mut cards = Vec::with_capacity(total);

        for (idx, span) in spans.iter().enumerate() {
            info!(
                "{} {}/{}: {}",
                span.category.label(),
                idx + 1,
                total,
                preview(span)
            );
            let enrichment = self.enrich(span).await;
            cards.push(Card::new(span, enrichment));
            self.stats.count(span.category);
        }

        cards
    }

    async fn enrich(&mut self, span: &Span) -> Enrichment {
        self.pace().await;

        let context = span.context.as_deref().unwrap_or(&span.text);
        let result = match span.category {
            Category::Term => self
                .translator
                .translate_word(&span.text, context)
                .await
                .map(Enrichment::Gloss),
            Category::Phrase => self
                .translator
                .translate_phrase(&span.text, context)
                .await
                .map(Enrichment::Gloss),
            Category::Sentence => self
                .translator
                .translate_sentence(&span.text)
                .await
                .map(Enrichment::Translation),
        };
        self.policy.record(Instant::now());

        match result {
            Ok(enrichment) => enrichment,
            Err(error) => {
                warn!(
                    category = span.category.label(),
                    text = %span.text,
                    %error,
                    "enrichment failed, using placeholder"
                );
                self.stats.failed += 1;
                Enrichment::failed(span)
            }
        }
    }

    async fn pace(&self) {
        let delay = self.policy.delay(Instant::now());
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "pacing backend call");
            sleep(delay).await;
        }
    }
}

fn preview(span: &Span) -> String {
    if span.category != Category::Sentence || span.text.chars().count() <= PREVIEW_CHARS {
        return span.text.clone();
    }
    let head: String = span.text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}
