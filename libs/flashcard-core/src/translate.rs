//! Translation contract and its prompt-based implementation.
//!
//! [`Translator`] is what the card pipeline depends on. [`Completion`] is
//! the transport underneath: anything that answers a prompt with free-form
//! text. [`PromptTranslator`] joins the two by rendering prompts and
//! parsing the replies.

use async_trait::async_trait;

use crate::error::{Result, TranslateError};
use crate::types::Gloss;

/// Default language glosses and translations are written in.
pub const DEFAULT_TARGET_LANGUAGE: &str = "Chinese";

/// A backend that can enrich marked spans.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Meaning of a single word as used in `context`.
    async fn translate_word(&self, word: &str, context: &str) -> Result<Gloss>;

    /// Meaning of a multi-word phrase as used in `context`.
    async fn translate_phrase(&self, phrase: &str, context: &str) -> Result<Gloss>;

    /// Plain translation of a whole sentence.
    async fn translate_sentence(&self, sentence: &str) -> Result<String>;
}

/// A service that answers a prompt with free-form text.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// [`Translator`] that talks to a [`Completion`] backend through prompts.
pub struct PromptTranslator<C> {
    completion: C,
    target_language: String,
}

impl<C: Completion> PromptTranslator<C> {
    pub fn new(completion: C, target_language: impl Into<String>) -> Self {
        Self {
            completion,
            target_language: target_language.into(),
        }
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }

    fn gloss_prompt(&self, kind: &str, text: &str, context: &str) -> String {
        format!(
            "Explain the meaning of the English {kind} \"{text}\" as it is used in the following sentence.\n\
             \n\
             Sentence: {context}\n\
             \n\
             Reply in this JSON format:\n\
             {{\n    \"meaning\": \"the {language} meaning of the {kind} in this sentence\",\n    \"example\": \"the original sentence\"\n}}\n\
             \n\
             Return only the JSON, nothing else.",
            language = self.target_language,
        )
    }

    fn sentence_prompt(&self, sentence: &str) -> String {
        format!(
            "Translate the following English sentence into {language}. \
             The translation should be accurate and natural.\n\
             \n\
             {sentence}\n\
             \n\
             Return only the {language} translation, nothing else.",
            language = self.target_language,
        )
    }
}

#[async_trait]
impl<C: Completion> Translator for PromptTranslator<C> {
    async fn translate_word(&self, word: &str, context: &str) -> Result<Gloss> {
        let reply = self
            .completion
            .complete(&self.gloss_prompt("word", word, context))
            .await?;
        parse_gloss(&reply)
    }

    async fn translate_phrase(&self, phrase: &str, context: &str) -> Result<Gloss> {
        let reply = self
            .completion
            .complete(&self.gloss_prompt("phrase", phrase, context))
            .await?;
        parse_gloss(&reply)
    }

    async fn translate_sentence(&self, sentence: &str) -> Result<String> {
        let reply = self
            .completion
            .complete(&self.sentence_prompt(sentence))
            .await?;
        parse_translation(&reply)
    }
}

/// Parse a `{"meaning": ..., "example": ...}` reply.
///
/// Models often wrap JSON in a markdown code fence; the fence is dropped
/// before parsing.
pub fn parse_gloss(reply: &str) -> Result<Gloss> {
    let body = strip_code_fence(reply);
    if body.is_empty() {
        return Err(TranslateError::EmptyReply);
    }
    serde_json::from_str(body).map_err(|e| TranslateError::MalformedReply(e.to_string()))
}

/// Parse a plain sentence translation.
pub fn parse_translation(reply: &str) -> Result<String> {
    let text = reply.trim();
    if text.is_empty() {
        return Err(TranslateError::EmptyReply);
    }
    Ok(text.to_string())
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    match rest.split_once('\n') {
        // Language tag such as `json` on the opening fence line.
        Some((tag, body)) if !tag.trim_start().starts_with('{') => body.trim(),
        _ => rest.trim(),
    }
}
