mod fallback;
mod questions;

pub use fallback::fallback_question;
pub use questions::{comprehension_question, definition_question};

use rand::Rng;
use study_core::model::{ExtractedContent, QuestionId, QuizQuestion};
use study_core::text::{char_len, contains_ignore_case, sentences};
use tracing::{debug, info, warn};

use crate::classifier::classify;

/// Questions per quiz unless configured otherwise.
pub const DEFAULT_QUIZ_LENGTH: usize = 10;

/// Upper bound on questions per quiz. Past the text-derived questions every
/// extra slot is the same canned question.
pub const MAX_QUIZ_LENGTH: usize = 50;

const DEFINITION_TERMS: usize = 4;
const COMPREHENSION_SENTENCES: usize = 6;
const COMPREHENSION_MIN_CHARS: usize = 50;
const COMPREHENSION_MAX_CHARS: usize = 200;

/// Builds a multiple-choice quiz from extracted content.
///
/// Questions come from three sources, in order, until the target is reached:
/// definition questions for the first four key terms, comprehension questions
/// for up to six mid-length sentences, and the canned question for the
/// content's subject category, repeated as often as needed.
pub struct QuizBuilder<'a> {
    content: &'a ExtractedContent,
    file_name: &'a str,
    target: usize,
}

impl<'a> QuizBuilder<'a> {
    #[must_use]
    pub fn new(content: &'a ExtractedContent, file_name: &'a str) -> Self {
        Self {
            content,
            file_name,
            target: DEFAULT_QUIZ_LENGTH,
        }
    }

    /// Number of questions to aim for, clamped to `1..=MAX_QUIZ_LENGTH`.
    #[must_use]
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target.clamp(1, MAX_QUIZ_LENGTH);
        self
    }

    /// Generate the quiz, drawing option order from `rng`.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<QuizQuestion> {
        let target = self.target;
        let sentences = sentences(&self.content.text);
        let mut questions: Vec<QuizQuestion> = Vec::with_capacity(target);
        if self.content.is_empty() {
            debug!(file = self.file_name, "no text to draw questions from");
        }

        for term in self.content.key_terms.iter().take(DEFINITION_TERMS) {
            if questions.len() >= target {
                break;
            }
            let Some(context) = sentences.iter().find(|s| contains_ignore_case(s, term)) else {
                continue;
            };
            if let Some(q) = definition_question(term, context, next_id(&questions), rng) {
                questions.push(q);
            }
        }
        let definitions = questions.len();

        let candidates = sentences
            .iter()
            .filter(|s| {
                let len = char_len(s);
                len > COMPREHENSION_MIN_CHARS && len < COMPREHENSION_MAX_CHARS
            })
            .take(COMPREHENSION_SENTENCES);
        for sentence in candidates {
            if questions.len() >= target {
                break;
            }
            if let Some(q) = comprehension_question(sentence, next_id(&questions), rng) {
                questions.push(q);
            }
        }
        let comprehension = questions.len() - definitions;

        let category = classify(&self.content.text, self.file_name);
        while questions.len() < target {
            match fallback_question(category, next_id(&questions)) {
                Ok(q) => questions.push(q),
                Err(err) => {
                    warn!(%category, error = %err, "fallback question rejected");
                    break;
                }
            }
        }

        info!(
            file = self.file_name,
            %category,
            definitions,
            comprehension,
            fallback = questions.len() - definitions - comprehension,
            "quiz generated"
        );
        questions
    }
}

/// Generate a default-length quiz using the thread-local RNG.
#[must_use]
pub fn generate_quiz(content: &ExtractedContent, file_name: &str) -> Vec<QuizQuestion> {
    QuizBuilder::new(content, file_name).build(&mut rand::rng())
}

fn next_id(questions: &[QuizQuestion]) -> QuestionId {
    QuestionId::new(u32::try_from(questions.len() + 1).unwrap_or(u32::MAX))
}
