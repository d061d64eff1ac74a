mod extracted;
mod ids;
mod quiz;
mod quiz_set;
mod subject;
mod summary;
mod upload;

pub use extracted::ExtractedContent;
pub use ids::{ParseIdError, QuestionId, QuizSetId};
pub use quiz::{OptionLetter, QuizError, QuizOptions, QuizQuestion};
pub use quiz_set::{Answers, Flashcard, QuizResult, QuizSet, QuizSetError, ScoreBand};
pub use subject::SubjectCategory;
pub use summary::{GeneratedSummary, MAX_KEY_POINTS};
pub use upload::{PDF_MIME, UploadLimits, UploadedFile, ValidationError};
