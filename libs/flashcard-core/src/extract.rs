//! Span extraction for annotated markdown.
//!
//! # Format
//! ```markdown
//! She said **serendipity** means finding something good by chance.
//! *a little over the top* was how he put it.
//! ==Life is what happens when you're busy making other plans.==
//! ```
//!
//! `**x**` marks a term, `*x*` a phrase and `==x==` a sentence worth
//! keeping. Matches are non-overlapping and scanned left to right.

use crate::context::resolve_context;
use crate::types::{Categories, Category, Span};
use regex::Regex;
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::LazyLock;

static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]*)\*\*").expect("term pattern"));
static HIGHLIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==([^=]*)==").expect("highlight pattern"));

/// Lazily extract every span of `category` from `document`.
///
/// The document is only borrowed, so calling this again yields the same
/// sequence.
pub fn extract(document: &str, category: Category) -> Spans<'_> {
    Spans {
        document,
        category,
        cursor: 0,
    }
}

/// Spans of every enabled category, terms first, then phrases, then sentences.
pub fn extract_all(document: &str, categories: Categories) -> impl Iterator<Item = Span> + '_ {
    Category::ALL
        .into_iter()
        .filter(move |c| categories.contains(*c))
        .flat_map(move |c| extract(document, c))
}

/// Iterator over the spans of one category.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    document: &'a str,
    category: Category,
    cursor: usize,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let (whole, inner) = match self.category {
            Category::Term => find_delimited(&TERM, self.document, self.cursor),
            Category::Phrase => find_phrase(self.document, self.cursor),
            Category::Sentence => find_delimited(&HIGHLIGHT, self.document, self.cursor),
        }?;
        self.cursor = whole.end;

        let raw = &self.document[inner];
        let span = if self.category.has_context() {
            Span {
                category: self.category,
                text: raw.to_string(),
                context: Some(resolve_context(self.document, whole.start, whole.end)),
                range: whole,
            }
        } else {
            Span {
                category: self.category,
                text: raw.trim().to_string(),
                context: None,
                range: whole,
            }
        };
        Some(span)
    }
}

impl FusedIterator for Spans<'_> {}

/// Next match of a single-group pattern at or after `from`.
fn find_delimited(
    pattern: &Regex,
    document: &str,
    from: usize,
) -> Option<(Range<usize>, Range<usize>)> {
    if from > document.len() {
        return None;
    }
    let caps = pattern.captures_at(document, from)?;
    let whole = caps.get(0)?.range();
    let inner = caps.get(1)?.range();
    Some((whole, inner))
}

/// Next `*phrase*` at or after `from`.
///
/// Equivalent to `(?<!\*)\*([^*]+)\*(?!\*)`: the interior is non-empty and
/// star-free, so the closing marker is always the first `*` after the
/// opening one. A candidate touching another `*` on either side belongs to
/// a term and is skipped one byte at a time.
fn find_phrase(document: &str, from: usize) -> Option<(Range<usize>, Range<usize>)> {
    let bytes = document.as_bytes();
    let mut cursor = from;

    while cursor < bytes.len() {
        let open = cursor + bytes[cursor..].iter().position(|&b| b == b'*')?;
        let close = open + 1 + bytes[open + 1..].iter().position(|&b| b == b'*')?;

        let preceded = open > 0 && bytes[open - 1] == b'*';
        let followed = bytes.get(close + 1) == Some(&b'*');
        if !preceded && !followed && close > open + 1 {
            return Some((open..close + 1, open + 1..close));
        }
        cursor = open + 1;
    }
    None
}
