//! Tab-separated deck rendering for Anki's text importer.
//!
//! # Format
//! ```text
//! #separator:tab
//! #html:true
//! serendipity	意外发现<br><br>She said serendipity means ...
//! ```

use std::path::Path;

use crate::types::{Card, Category};

const HEADER: &str = "#separator:tab\n#html:true\n";

/// Suffix appended to the input file stem to name the deck file.
pub const DECK_FILE_SUFFIX: &str = "_anki_cards.txt";

/// Cards awaiting export, in pipeline order.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards of `category`.
    pub fn count(&self, category: Category) -> usize {
        self.cards.iter().filter(|c| c.category == category).count()
    }

    /// Render the importable text: header lines, then one line per card.
    pub fn render(&self) -> String {
        let mut output = String::from(HEADER);
        for card in &self.cards {
            output.push_str(&sanitize_field(&card.front));
            output.push('\t');
            output.push_str(&sanitize_field(&card.back));
            output.push('\n');
        }
        output
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Keep a field on one line and free of the separator.
fn sanitize_field(field: &str) -> String {
    field
        .replace("\r\n", "\n")
        .replace('\t', " ")
        .replace('\n', "<br>")
}

/// Deck file name for `input`: `<stem>_anki_cards.txt`.
pub fn deck_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "deck".to_string());
    format!("{}{}", stem, DECK_FILE_SUFFIX)
}
