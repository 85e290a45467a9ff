//! Core types for flashcard generation.

use serde::Deserialize;
use std::ops::Range;

/// Prefix carried by every placeholder produced for a failed enrichment.
pub const FAILURE_PREFIX: &str = "Translation failed";

/// Separator placed between meaning and example on the back of a card.
pub const BACK_SEPARATOR: &str = "<br><br>";

/// Kind of marked span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `**word**`
    Term,
    /// `*a few words*`
    Phrase,
    /// `==a whole sentence.==`
    Sentence,
}

impl Category {
    /// All categories in pipeline order.
    pub const ALL: [Category; 3] = [Category::Term, Category::Phrase, Category::Sentence];

    /// Human label used in progress output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::Phrase => "phrase",
            Self::Sentence => "sentence",
        }
    }

    /// Whether spans of this category carry a resolved context.
    pub fn has_context(self) -> bool {
        !matches!(self, Self::Sentence)
    }
}

/// Which categories a run should turn into cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories {
    pub terms: bool,
    pub phrases: bool,
    pub sentences: bool,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            terms: true,
            phrases: true,
            sentences: true,
        }
    }
}

impl Categories {
    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Term => self.terms,
            Category::Phrase => self.phrases,
            Category::Sentence => self.sentences,
        }
    }

    /// Enabled categories in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

/// A marked occurrence located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub category: Category,
    /// Span content without its delimiters.
    pub text: String,
    /// Enclosing sentence with markup removed. `None` for sentences.
    pub context: Option<String>,
    /// Byte range of the whole match, delimiters included.
    pub range: Range<usize>,
}

/// Meaning of a term or phrase as used in its sentence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gloss {
    pub meaning: String,
    pub example: String,
}

/// Backend output for one span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment {
    Gloss(Gloss),
    Translation(String),
}

impl Enrichment {
    /// Placeholder used when the backend could not enrich `span`.
    pub fn failed(span: &Span) -> Self {
        let meaning = format!("{}: {}", FAILURE_PREFIX, span.text);
        if span.category.has_context() {
            Self::Gloss(Gloss {
                meaning,
                example: span.context.clone().unwrap_or_else(|| span.text.clone()),
            })
        } else {
            Self::Translation(meaning)
        }
    }

    /// Render the answer side of a card.
    pub fn into_back(self) -> String {
        match self {
            Self::Gloss(gloss) => format!("{}{}{}", gloss.meaning, BACK_SEPARATOR, gloss.example),
            Self::Translation(text) => text,
        }
    }
}

/// A finished flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub category: Category,
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(span: &Span, enrichment: Enrichment) -> Self {
        Self {
            category: span.category,
            front: span.text.clone(),
            back: enrichment.into_back(),
        }
    }
}
