//! Test fixtures for documents and model replies.

use serde_json::json;

/// Document with one term, one phrase and one highlighted sentence.
pub const SAMPLE_DOCUMENT: &str = "She said **serendipity** means finding something good by chance. \
*a little over the top* was how he put it. \
==Life is what happens when you're busy making other plans.==";

/// Generate a document with `n` marked terms, one per sentence.
pub fn document_with_terms(n: usize) -> String {
    (0..n)
        .map(|i| format!("Sentence {} has **term{}** inside.", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

/// What a cooperative model would answer to one of our prompts.
///
/// Gloss prompts get a JSON object whose meaning names the quoted word and
/// whose example echoes the `Sentence:` line. Sentence prompts get the
/// sentence back with a `译文：` prefix.
pub fn fixture_reply(prompt: &str) -> String {
    if prompt.contains("Return only the JSON") {
        let term = prompt.split('"').nth(1).unwrap_or_default();
        let sentence = prompt
            .lines()
            .find_map(|line| line.strip_prefix("Sentence: "))
            .unwrap_or_default();
        json!({ "meaning": format!("释义：{}", term), "example": sentence }).to_string()
    } else {
        let sentence = prompt.lines().nth(2).unwrap_or_default();
        format!("译文：{}", sentence)
    }
}
