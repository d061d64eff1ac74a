use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("the correct option {0} cannot be empty")]
    EmptyCorrectOption(OptionLetter),

    #[error("invalid option letter: {0:?}")]
    InvalidLetter(String),
}

//
// ─── OPTION LETTER ────────────────────────────────────────────────────────────
//

/// Slot of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    /// Letter for a zero-based slot index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLetter {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(OptionLetter::A),
            "B" | "b" => Ok(OptionLetter::B),
            "C" | "c" => Ok(OptionLetter::C),
            "D" | "d" => Ok(OptionLetter::D),
            other => Err(QuizError::InvalidLetter(other.to_string())),
        }
    }
}

//
// ─── OPTIONS ──────────────────────────────────────────────────────────────────
//

/// The four answer texts, keyed `A`..`D` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl QuizOptions {
    #[must_use]
    pub fn from_array([a, b, c, d]: [String; 4]) -> Self {
        Self { a, b, c, d }
    }

    #[must_use]
    pub fn get(&self, letter: OptionLetter) -> &str {
        match letter {
            OptionLetter::A => &self.a,
            OptionLetter::B => &self.b,
            OptionLetter::C => &self.c,
            OptionLetter::D => &self.d,
        }
    }

    /// Options in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionLetter, &str)> {
        OptionLetter::ALL
            .into_iter()
            .map(move |letter| (letter, self.get(letter)))
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A four-option multiple-choice question with exactly one correct slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question: String,
    pub options: QuizOptions,
    pub correct_answer: OptionLetter,
}

impl QuizQuestion {
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestion` for blank question text and
    /// `QuizError::EmptyCorrectOption` when the correct slot holds no text.
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        options: QuizOptions,
        correct_answer: OptionLetter,
    ) -> Result<Self, QuizError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizError::EmptyQuestion);
        }
        if options.get(correct_answer).trim().is_empty() {
            return Err(QuizError::EmptyCorrectOption(correct_answer));
        }
        Ok(Self {
            id,
            question,
            options,
            correct_answer,
        })
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.options.get(self.correct_answer)
    }

    #[must_use]
    pub fn is_correct(&self, selected: OptionLetter) -> bool {
        selected == self.correct_answer
    }
}
