//! Extractive summary: score sentences, keep the best few in document order,
//! and wrap them in intro/closing paragraphs built from the key terms.

use study_core::model::{ExtractedContent, GeneratedSummary, MAX_KEY_POINTS};
use study_core::text::{capitalize_first, char_len, contains_ignore_case, sentences, word_window};
use tracing::info;

const MAX_KEY_SENTENCES: usize = 8;
const TERM_POINTS: usize = 5;
const EXTRA_POINTS: usize = 3;
const POINT_WORDS: usize = 15;

const EMPTY_SUMMARY: &str = "This document contains information that can be summarized as follows: \
The content covers various topics and concepts that are relevant to the subject matter.";

const FILLER_POINTS: [&str; 3] = [
    "The document contains important information relevant to the topic",
    "Key concepts and ideas are presented throughout the text",
    "The content provides valuable insights into the subject matter",
];

/// Summarize `content`.
#[must_use]
pub fn generate_summary(content: &ExtractedContent) -> GeneratedSummary {
    let sentences = sentences(&content.text);
    let key_sentences = select_key_sentences(&sentences, &content.key_terms);
    let body = assemble(&key_sentences, &content.key_terms);
    let points = key_points(&key_sentences, &content.key_terms);

    let summary = GeneratedSummary::new(body, points);
    info!(
        sentences = sentences.len(),
        key_sentences = key_sentences.len(),
        key_points = summary.key_points.len(),
        words = summary.word_count,
        "summary generated"
    );
    summary
}

fn score_sentence(sentence: &str, index: usize, total: usize, key_terms: &[String]) -> i32 {
    let len = char_len(sentence);
    let mut score = 0;

    if (50..=200).contains(&len) {
        score += 2;
    } else if len >= 30 {
        score += 1;
    }

    let lowered = sentence.to_lowercase();
    for term in key_terms {
        if lowered.contains(&term.to_lowercase()) {
            score += 3;
        }
    }

    // Leading 30% of the document.
    if index * 10 < total * 3 {
        score += 1;
    }

    if len < 20 || len > 300 {
        score -= 2;
    }
    score
}

/// Best `min(8, ceil(n / 10))` sentences, returned in document order.
fn select_key_sentences<'t>(sentences: &[&'t str], key_terms: &[String]) -> Vec<&'t str> {
    let keep = MAX_KEY_SENTENCES.min(sentences.len().div_ceil(10));

    let mut scored: Vec<(usize, i32)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| (i, score_sentence(s, i, sentences.len(), key_terms)))
        .collect();
    // Stable: equal scores keep document order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(keep);
    scored.sort_by_key(|&(i, _)| i);

    scored.into_iter().map(|(i, _)| sentences[i]).collect()
}

fn assemble(key_sentences: &[&str], key_terms: &[String]) -> String {
    if key_sentences.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let mut paragraphs = Vec::with_capacity(4);
    if !key_terms.is_empty() {
        let main_terms = key_terms
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        paragraphs.push(format!(
            "This document discusses key concepts including {main_terms}, providing detailed information on these important topics."
        ));
    }

    let (first, second) = key_sentences.split_at(key_sentences.len().div_ceil(2));
    for half in [first, second] {
        if !half.is_empty() {
            paragraphs.push(half.join(" "));
        }
    }

    if let Some(lead) = key_terms.first() {
        paragraphs.push(format!(
            "In summary, the document provides comprehensive coverage of {lead} and related concepts, offering valuable insights into the subject matter."
        ));
    }

    paragraphs.join("\n\n")
}

fn key_points(key_sentences: &[&str], key_terms: &[String]) -> Vec<String> {
    let mut points = Vec::new();

    for term in key_terms.iter().take(TERM_POINTS) {
        match key_sentences.iter().find(|s| contains_ignore_case(s, term)) {
            Some(sentence) => {
                let needle = term.to_lowercase();
                let words: Vec<&str> = sentence.split_whitespace().collect();
                if let Some(at) = words
                    .iter()
                    .position(|w| w.to_lowercase().contains(needle.as_str()))
                {
                    points.push(capitalize_first(&word_window(&words, at, 5, 10)));
                }
            }
            None => points.push(format!(
                "{} is an important concept discussed in the document",
                capitalize_first(term)
            )),
        }
    }

    let untagged = key_sentences
        .iter()
        .filter(|s| !key_terms.iter().any(|t| contains_ignore_case(s, t)))
        .take(EXTRA_POINTS);
    for sentence in untagged {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() > POINT_WORDS {
            points.push(format!("{}...", words[..POINT_WORDS].join(" ")));
        } else {
            points.push((*sentence).to_string());
        }
    }

    if points.is_empty() {
        points.extend(FILLER_POINTS.iter().map(ToString::to_string));
    }
    points.truncate(MAX_KEY_POINTS);
    points
}
