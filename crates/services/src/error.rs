//! Shared error types for the services crate.

use thiserror::Error;

use study_core::model::{QuizSetError, ValidationError};

/// Errors emitted by `StudyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    QuizSet(#[from] QuizSetError),
}
