//! Canned per-subject questions used to top a quiz up to its target length.

use study_core::model::{
    OptionLetter, QuestionId, QuizError, QuizOptions, QuizQuestion, SubjectCategory,
};

struct Canned {
    question: &'static str,
    options: [&'static str; 4],
    correct: OptionLetter,
}

const MATHEMATICS: Canned = Canned {
    question: "Based on the mathematical concepts in the document, which statement is most accurate?",
    options: [
        "Mathematical proofs require empirical evidence",
        "Mathematical theorems are based on logical reasoning",
        "Mathematical formulas are always temporary",
        "Mathematical concepts change frequently",
    ],
    correct: OptionLetter::B,
};

const SCIENCE: Canned = Canned {
    question: "According to scientific principles mentioned in the document, what is most important?",
    options: [
        "Personal opinions about natural phenomena",
        "Observable evidence and experimentation",
        "Traditional beliefs about nature",
        "Theoretical speculation without testing",
    ],
    correct: OptionLetter::B,
};

const HISTORY: Canned = Canned {
    question: "Based on the historical content in the document, what factor is most significant?",
    options: [
        "Social and economic conditions of the time period",
        "Individual personalities alone",
        "Random chance events",
        "Modern perspectives on past events",
    ],
    correct: OptionLetter::A,
};

const GENERAL: Canned = Canned {
    question: "Based on the content of the document, what is the main focus?",
    options: [
        "Providing detailed information on the topic",
        "Entertaining the reader with stories",
        "Selling products or services",
        "Expressing personal opinions only",
    ],
    correct: OptionLetter::A,
};

/// The fixed question for `category`, carrying `id`.
///
/// # Errors
///
/// Returns the `QuizError` from `QuizQuestion::new` if the canned entry is
/// malformed.
pub fn fallback_question(
    category: SubjectCategory,
    id: QuestionId,
) -> Result<QuizQuestion, QuizError> {
    let canned = match category {
        SubjectCategory::Mathematics => &MATHEMATICS,
        SubjectCategory::Science => &SCIENCE,
        SubjectCategory::History => &HISTORY,
        SubjectCategory::General => &GENERAL,
    };
    canned.to_question(id)
}

impl Canned {
    fn to_question(&self, id: QuestionId) -> Result<QuizQuestion, QuizError> {
        QuizQuestion::new(
            id,
            self.question,
            QuizOptions::from_array(self.options.map(str::to_string)),
            self.correct,
        )
    }
}
