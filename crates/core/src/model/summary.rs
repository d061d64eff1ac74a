use serde::{Deserialize, Serialize};

use crate::text::word_count;

/// Upper bound on bullet points attached to a summary.
pub const MAX_KEY_POINTS: usize = 6;

/// Multi-paragraph summary (paragraphs separated by a blank line) plus bullet
/// key points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSummary {
    pub content: String,
    pub key_points: Vec<String>,
    pub word_count: usize,
}

impl GeneratedSummary {
    /// Assemble a summary; key points beyond [`MAX_KEY_POINTS`] are dropped.
    pub fn new(content: impl Into<String>, mut key_points: Vec<String>) -> Self {
        let content = content.into();
        key_points.truncate(MAX_KEY_POINTS);
        Self {
            word_count: word_count(&content),
            content,
            key_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_key_points_and_counts_words() {
        let points = (0..9).map(|i| format!("point {i}")).collect();
        let summary = GeneratedSummary::new("One two.\n\nThree four five.", points);
        assert_eq!(summary.key_points.len(), MAX_KEY_POINTS);
        assert_eq!(summary.word_count, 5);
        assert_eq!(summary.content.split("\n\n").count(), 2);
    }
}
