use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::{OptionLetter, QuestionId, QuizQuestion, QuizSetId};

/// Selected letter per question id.
pub type Answers = BTreeMap<QuestionId, OptionLetter>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSetError {
    #[error("a quiz set needs at least one question")]
    Empty,
}

//
// ─── SCORE BAND ───────────────────────────────────────────────────────────────
//

/// Coarse grade shown after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    /// Every question answered correctly.
    Perfect,
    /// At least 80% correct.
    Great,
    /// At least 60% correct.
    Good,
    KeepStudying,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: u32, total: u32) -> Self {
        if total == 0 {
            return ScoreBand::KeepStudying;
        }
        let (score, total) = (u64::from(score), u64::from(total));
        if score >= total {
            ScoreBand::Perfect
        } else if score * 10 >= total * 8 {
            ScoreBand::Great
        } else if score * 10 >= total * 6 {
            ScoreBand::Good
        } else {
            ScoreBand::KeepStudying
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Perfect Score!",
            ScoreBand::Great => "Great Job!",
            ScoreBand::Good => "Good Work!",
            ScoreBand::KeepStudying => "Keep Studying!",
        }
    }
}

//
// ─── RESULT ───────────────────────────────────────────────────────────────────
//

/// Outcome of one pass through a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u32,
    pub total_questions: u32,
    pub completed_at: DateTime<Utc>,
    pub answers: Answers,
}

impl QuizResult {
    /// Score `answers` against `questions`.
    ///
    /// Unanswered questions count as wrong. Answers for ids that are not part
    /// of `questions` are kept in the result but never score.
    #[must_use]
    pub fn grade(questions: &[QuizQuestion], answers: Answers, completed_at: DateTime<Utc>) -> Self {
        let correct = questions
            .iter()
            .filter(|q| answers.get(&q.id).is_some_and(|&a| q.is_correct(a)))
            .count();

        Self {
            score: u32::try_from(correct).unwrap_or(u32::MAX),
            total_questions: u32::try_from(questions.len()).unwrap_or(u32::MAX),
            completed_at,
            answers,
        }
    }

    /// Share of correct answers, rounded to the nearest whole percent.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        let score = u64::from(self.score);
        let total = u64::from(self.total_questions);
        u32::try_from((score * 200 + total) / (total * 2)).unwrap_or(100)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score, self.total_questions)
    }
}

//
// ─── FLASHCARD ────────────────────────────────────────────────────────────────
//

/// Question/answer pair derived from a quiz question for flip-card review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
}

impl From<&QuizQuestion> for Flashcard {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            answer: format!("{}. {}", q.correct_answer, q.correct_text()),
        }
    }
}

//
// ─── QUIZ SET ─────────────────────────────────────────────────────────────────
//

/// A generated quiz kept together with its flashcards and attempt history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSet {
    id: QuizSetId,
    title: String,
    file_name: String,
    created_at: DateTime<Utc>,
    questions: Vec<QuizQuestion>,
    flashcards: Vec<Flashcard>,
    attempts: Vec<QuizResult>,
    last_result: Option<QuizResult>,
}

impl QuizSet {
    /// # Errors
    ///
    /// Returns `QuizSetError::Empty` when `questions` is empty.
    pub fn new(
        file_name: impl Into<String>,
        questions: Vec<QuizQuestion>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, QuizSetError> {
        if questions.is_empty() {
            return Err(QuizSetError::Empty);
        }

        let file_name = file_name.into();
        let title = format!("{} Quiz", file_name.replacen(".pdf", "", 1));
        let flashcards = questions.iter().map(Flashcard::from).collect();

        Ok(Self {
            id: QuizSetId::new(),
            title,
            file_name,
            created_at,
            questions,
            flashcards,
            attempts: Vec::new(),
            last_result: None,
        })
    }

    /// Grade an attempt and append it to the history.
    pub fn record_attempt(&mut self, answers: Answers, completed_at: DateTime<Utc>) -> &QuizResult {
        let result = QuizResult::grade(&self.questions, answers, completed_at);
        self.last_result = Some(result.clone());
        self.attempts.push(result);
        &self.attempts[self.attempts.len() - 1]
    }

    #[must_use]
    pub fn id(&self) -> QuizSetId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    #[must_use]
    pub fn attempts(&self) -> &[QuizResult] {
        &self.attempts
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizOptions;
    use crate::time::fixed_now;

    fn question(id: u32, correct: OptionLetter) -> QuizQuestion {
        let options = QuizOptions::from_array([
            format!("a{id}"),
            format!("b{id}"),
            format!("c{id}"),
            format!("d{id}"),
        ]);
        QuizQuestion::new(QuestionId::new(id), format!("Question {id}?"), options, correct).unwrap()
    }

    fn five_questions() -> Vec<QuizQuestion> {
        (1..=5).map(|id| question(id, OptionLetter::B)).collect()
    }

    #[test]
    fn score_bands_follow_thresholds() {
        assert_eq!(ScoreBand::from_score(10, 10), ScoreBand::Perfect);
        assert_eq!(ScoreBand::from_score(8, 10), ScoreBand::Great);
        assert_eq!(ScoreBand::from_score(7, 10), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(6, 10), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(5, 10), ScoreBand::KeepStudying);
        assert_eq!(ScoreBand::from_score(0, 0), ScoreBand::KeepStudying);
        assert_eq!(ScoreBand::Great.label(), "Great Job!");
    }

    #[test]
    fn grading_counts_exact_matches_only() {
        let questions = five_questions();
        let mut answers = Answers::new();
        answers.insert(QuestionId::new(1), OptionLetter::B);
        answers.insert(QuestionId::new(2), OptionLetter::B);
        answers.insert(QuestionId::new(3), OptionLetter::A);
        answers.insert(QuestionId::new(99), OptionLetter::B);

        let result = QuizResult::grade(&questions, answers, fixed_now());
        assert_eq!(result.score, 2);
        assert_eq!(result.total_questions, 5);
        assert_eq!(result.percentage(), 40);
        assert_eq!(result.band(), ScoreBand::KeepStudying);
        assert_eq!(result.answers.len(), 4);
    }

    #[test]
    fn percentage_rounds_half_up() {
        let questions: Vec<_> = (1..=3).map(|id| question(id, OptionLetter::A)).collect();
        let mut answers = Answers::new();
        answers.insert(QuestionId::new(1), OptionLetter::A);
        answers.insert(QuestionId::new(2), OptionLetter::A);
        let result = QuizResult::grade(&questions, answers, fixed_now());
        assert_eq!(result.percentage(), 67);
    }

    #[test]
    fn quiz_set_title_and_flashcards() {
        let set = QuizSet::new("biology_notes.pdf", five_questions(), fixed_now()).unwrap();
        assert_eq!(set.title(), "biology_notes Quiz");
        assert_eq!(set.flashcards().len(), 5);
        assert_eq!(set.flashcards()[0].answer, "B. b1");
        assert!(set.last_result().is_none());
    }

    #[test]
    fn empty_quiz_set_is_rejected() {
        let err = QuizSet::new("x.pdf", Vec::new(), fixed_now()).unwrap_err();
        assert_eq!(err, QuizSetError::Empty);
    }

    #[test]
    fn record_attempt_updates_history() {
        let mut set = QuizSet::new("x.pdf", five_questions(), fixed_now()).unwrap();
        let all_right: Answers = set
            .questions()
            .iter()
            .map(|q| (q.id, q.correct_answer))
            .collect();

        let first = set.record_attempt(Answers::new(), fixed_now()).clone();
        assert_eq!(first.score, 0);
        let second = set.record_attempt(all_right, fixed_now()).clone();
        assert_eq!(second.band(), ScoreBand::Perfect);

        assert_eq!(set.attempts().len(), 2);
        assert_eq!(set.last_result(), Some(&second));
    }
}
