use rand::Rng;
use study_core::model::{
    Answers, ExtractedContent, GeneratedSummary, QuizQuestion, QuizResult, QuizSet,
    SubjectCategory, UploadedFile,
};
use study_core::Clock;
use tracing::debug;

use crate::classifier;
use crate::config::GeneratorConfig;
use crate::error::StudyServiceError;
use crate::extraction;
use crate::quiz::QuizBuilder;
use crate::summary::generate_summary;

/// Entry point for callers that work with uploads end to end.
#[derive(Clone, Debug, Default)]
pub struct StudyService {
    config: GeneratorConfig,
    clock: Clock,
}

impl StudyService {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            clock: Clock::Default,
        }
    }

    /// Build a service configured from `STUDY_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env())
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate an upload and produce its content.
    ///
    /// # Errors
    ///
    /// Returns `StudyServiceError::Validation` when the upload is rejected.
    pub fn analyze_upload(&self, file: &UploadedFile) -> Result<ExtractedContent, StudyServiceError> {
        Ok(extraction::synthesize(file, &self.config.upload_limits)?)
    }

    #[must_use]
    pub fn classify(&self, content: &ExtractedContent, file_name: &str) -> SubjectCategory {
        let category = classifier::classify(&content.text, file_name);
        debug!(file = file_name, %category, "classified content");
        category
    }

    /// Questions for already extracted content, at the configured length.
    pub fn quiz_for_content<R: Rng + ?Sized>(
        &self,
        content: &ExtractedContent,
        file_name: &str,
        rng: &mut R,
    ) -> Vec<QuizQuestion> {
        QuizBuilder::new(content, file_name)
            .with_target(self.config.quiz_length)
            .build(rng)
    }

    /// # Errors
    ///
    /// Returns `StudyServiceError::QuizSet` if no questions could be built.
    pub fn quiz_set_from_content<R: Rng + ?Sized>(
        &self,
        content: &ExtractedContent,
        file_name: &str,
        rng: &mut R,
    ) -> Result<QuizSet, StudyServiceError> {
        let questions = self.quiz_for_content(content, file_name, rng);
        Ok(QuizSet::new(file_name, questions, self.clock.now())?)
    }

    /// Validate, synthesize and quiz an upload in one step.
    ///
    /// # Errors
    ///
    /// Returns `StudyServiceError` if validation or quiz-set creation fails.
    pub fn build_quiz_set<R: Rng + ?Sized>(
        &self,
        file: &UploadedFile,
        rng: &mut R,
    ) -> Result<QuizSet, StudyServiceError> {
        let content = self.analyze_upload(file)?;
        self.quiz_set_from_content(&content, &file.name, rng)
    }

    /// # Errors
    ///
    /// Returns `StudyServiceError::Validation` when the upload is rejected.
    pub fn summarize(&self, file: &UploadedFile) -> Result<GeneratedSummary, StudyServiceError> {
        let content = self.analyze_upload(file)?;
        Ok(self.summarize_content(&content))
    }

    #[must_use]
    pub fn summarize_content(&self, content: &ExtractedContent) -> GeneratedSummary {
        generate_summary(content)
    }

    /// Grade `answers` against `set`, stamped with the service clock.
    pub fn grade(&self, set: &mut QuizSet, answers: Answers) -> QuizResult {
        set.record_attempt(answers, self.clock.now()).clone()
    }
}
