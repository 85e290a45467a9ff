//! Sentence context resolution.
//!
//! The enclosing sentence of a span is found by scanning outward from the
//! match to the nearest `.`, `!` or `?`. This is a plain terminator scan,
//! not sentence segmentation: a span right after an abbreviation such as
//! `Dr.` gets a context that starts mid-sentence.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static TERM_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]*)\*\*").expect("term markup pattern"));
static PHRASE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("phrase markup pattern"));
static HIGHLIGHT_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==([^=]*)==").expect("highlight markup pattern"));

fn is_terminator(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?')
}

/// Byte range of the sentence around `start..end`.
///
/// The range begins one byte after the nearest terminator left of `start`
/// (or at 0) and ends one byte after the nearest terminator at or right of
/// `end` (or at the document end). Offsets past the end are clamped.
pub fn sentence_bounds(document: &str, start: usize, end: usize) -> Range<usize> {
    let bytes = document.as_bytes();
    let len = bytes.len();
    let start = start.min(len);
    let end = end.max(start).min(len);

    let mut left = start;
    while left > 0 && !bytes.get(left).copied().is_some_and(is_terminator) {
        left -= 1;
    }
    if left > 0 {
        left += 1;
    }

    let mut right = end;
    while right < len && !is_terminator(bytes[right]) {
        right += 1;
    }
    if right < len {
        right += 1;
    }

    left..right
}

/// Markup-free sentence surrounding the match at `start..end`.
pub fn resolve_context(document: &str, start: usize, end: usize) -> String {
    let range = sentence_bounds(document, start, end);
    strip_markup(document[range].trim())
}

/// Replace `**x**`, `*x*` and `==x==` with their bare interiors.
pub fn strip_markup(text: &str) -> String {
    let text = TERM_MARKUP.replace_all(text, "$1");
    let text = PHRASE_MARKUP.replace_all(&text, "$1");
    HIGHLIGHT_MARKUP.replace_all(&text, "$1").into_owned()
}
