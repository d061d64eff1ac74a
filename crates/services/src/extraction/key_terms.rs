use std::collections::HashMap;

const MAX_TERMS: usize = 10;
const MIN_TERM_CHARS: usize = 4;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
    "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them",
];

/// Most frequent content words of `text`, at most ten.
///
/// Words are lower-cased and stripped of everything but ASCII letters,
/// digits and `_`. Words of three characters or fewer and stop words are
/// skipped. Equal counts keep first-appearance order.
#[must_use]
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for raw in text.split_whitespace() {
        let word: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if word.chars().count() < MIN_TERM_CHARS || STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        match slots.get(&word) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                slots.insert(word.clone(), order.len());
                order.push((word, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .take(MAX_TERMS)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency_with_stable_ties() {
        let text = "Mitochondria produce energy. Energy powers cells; cells need ENERGY. \
                    Mitochondria divide.";
        let terms = extract_key_terms(text);
        assert_eq!(terms[0], "energy");
        assert_eq!(terms[1], "mitochondria");
        assert_eq!(terms[2], "cells");
        assert_eq!(terms[3], "produce");
    }

    #[test]
    fn skips_short_and_stop_words() {
        let terms = extract_key_terms("the cat and those dogs were being loud");
        assert_eq!(terms, vec!["dogs", "loud"]);
    }

    #[test]
    fn caps_at_ten_terms() {
        let text = (0..30)
            .map(|i| format!("term{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_key_terms(&text).len(), 10);
    }

    #[test]
    fn empty_text_has_no_terms() {
        assert!(extract_key_terms("   ").is_empty());
    }
}
