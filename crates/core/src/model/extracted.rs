use serde::{Deserialize, Serialize};

use crate::text::word_count;

/// Text and metadata produced once per uploaded document.
///
/// Field names on the wire (`text`, `pageCount`, `wordCount`, `keyTerms`)
/// are relied upon by the quiz and summarizer pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedContent {
    pub text: String,
    pub page_count: u32,
    pub word_count: usize,
    pub key_terms: Vec<String>,
}

impl ExtractedContent {
    /// Build content from text, deriving the word count from it.
    pub fn new(text: impl Into<String>, page_count: u32, key_terms: Vec<String>) -> Self {
        let text = text.into();
        let word_count = word_count(&text);
        Self {
            text,
            page_count,
            word_count,
            key_terms,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
