#![forbid(unsafe_code)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod extraction;
pub mod quiz;
pub mod study_service;
pub mod summary;

pub use classifier::classify;
pub use config::GeneratorConfig;
pub use error::StudyServiceError;
pub use extraction::{extract_from_text, synthesize};
pub use quiz::{QuizBuilder, generate_quiz};
pub use study_core::Clock;
pub use study_service::StudyService;
pub use summary::generate_summary;
