//! Builders for the two text-derived question shapes.
//!
//! Both fail soft: `None` means "no question from this input" and the caller
//! moves on to the next candidate.

use rand::Rng;
use rand::seq::SliceRandom;
use study_core::model::{OptionLetter, QuestionId, QuizOptions, QuizQuestion};
use study_core::text::{char_len, truncate_chars, word_window};

const BLANK: &str = "____";
const MIN_COMPREHENSION_WORDS: usize = 8;
const QUOTE_CHARS: usize = 100;

/// Put `correct` and the distractors into a uniformly random slot order and
/// report which slot holds `correct`.
pub(crate) fn shuffle_options<R: Rng + ?Sized>(
    correct: String,
    [d1, d2, d3]: [String; 3],
    rng: &mut R,
) -> Option<(QuizOptions, OptionLetter)> {
    let mut slots = [(true, correct), (false, d1), (false, d2), (false, d3)];
    slots.shuffle(rng);
    let letter = slots
        .iter()
        .position(|(is_correct, _)| *is_correct)
        .and_then(OptionLetter::from_index)?;
    Some((QuizOptions::from_array(slots.map(|(_, text)| text)), letter))
}

/// "What is {term}?" answered by the words around the term in `context`.
///
/// The answer is the lower-cased window of three words before the first word
/// containing the term through seven words after it.
pub fn definition_question<R: Rng + ?Sized>(
    term: &str,
    context: &str,
    id: QuestionId,
    rng: &mut R,
) -> Option<QuizQuestion> {
    if term.trim().is_empty() {
        return None;
    }
    let lowered = context.to_lowercase();
    let needle = term.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let at = words.iter().position(|w| w.contains(needle.as_str()))?;
    let answer = word_window(&words, at, 3, 8);

    let distractors = [
        format!("A process related to {term} that occurs in different conditions"),
        format!("The opposite of {term} in most scientific contexts"),
        format!("A theoretical concept that contradicts {term}"),
    ];
    let (options, correct) = shuffle_options(answer, distractors, rng)?;
    QuizQuestion::new(id, format!("What is {term}?"), options, correct).ok()
}

/// Fill-in-the-blank or main-concept question built from one sentence.
///
/// Preference order: the first word containing a digit, then the first
/// capitalised word, then a general "main concept" prompt answered by the
/// first long word. Sentences under eight words yield nothing.
pub fn comprehension_question<R: Rng + ?Sized>(
    sentence: &str,
    id: QuestionId,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_COMPREHENSION_WORDS {
        return None;
    }

    let (question, answer) =
        if let Some(number) = words.iter().find(|w| w.chars().any(|c| c.is_ascii_digit())) {
            (
                format!(
                    "{} What is the missing number?",
                    sentence.replacen(*number, BLANK, 1)
                ),
                (*number).to_string(),
            )
        } else if let Some(term) = words.iter().find(|w| is_capitalized_word(w)) {
            (
                format!(
                    "{} What is the missing term?",
                    sentence.replacen(*term, BLANK, 1)
                ),
                (*term).to_string(),
            )
        } else {
            let key_word = words
                .iter()
                .find(|w| char_len(w) > 6)
                .unwrap_or(&words[words.len() / 2]);
            (
                format!(
                    "According to the text: \"{}...\" What is the main concept being discussed?",
                    truncate_chars(sentence, QUOTE_CHARS)
                ),
                (*key_word).to_string(),
            )
        };

    // Known weak heuristic: the three fillers are near-identical.
    let distractors = [
        "Alternative concept A".to_string(),
        "Alternative concept B".to_string(),
        "Alternative concept C".to_string(),
    ];
    let (options, correct) = shuffle_options(answer, distractors, rng)?;
    QuizQuestion::new(id, question, options, correct).ok()
}

/// One ASCII upper-case letter followed only by ASCII lower-case letters.
fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_lowercase())
        }
        _ => false,
    }
}
