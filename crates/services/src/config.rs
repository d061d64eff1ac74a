use std::env;

use study_core::model::UploadLimits;

use crate::quiz::{DEFAULT_QUIZ_LENGTH, MAX_QUIZ_LENGTH};

/// Tunables for the generators, read from `STUDY_*` environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub quiz_length: usize,
    pub upload_limits: UploadLimits,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            quiz_length: DEFAULT_QUIZ_LENGTH,
            upload_limits: UploadLimits::default(),
        }
    }
}

impl GeneratorConfig {
    /// Read `STUDY_QUIZ_LENGTH`, `STUDY_MIN_UPLOAD_BYTES` and
    /// `STUDY_MAX_UPLOAD_BYTES`. Missing or unparsable values keep their
    /// defaults, as does a quiz length outside `1..=MAX_QUIZ_LENGTH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GeneratorConfig::from_env`] with a custom variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).and_then(|raw| raw.trim().parse::<u64>().ok());

        let quiz_length = read("STUDY_QUIZ_LENGTH")
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| (1..=MAX_QUIZ_LENGTH).contains(n))
            .unwrap_or(defaults.quiz_length);
        let min_bytes = read("STUDY_MIN_UPLOAD_BYTES").unwrap_or(defaults.upload_limits.min_bytes);
        let max_bytes = read("STUDY_MAX_UPLOAD_BYTES")
            .filter(|max| *max >= min_bytes)
            .unwrap_or(defaults.upload_limits.max_bytes.max(min_bytes));

        Self {
            quiz_length,
            upload_limits: UploadLimits {
                min_bytes,
                max_bytes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GeneratorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.quiz_length, 10);
        assert_eq!(config.upload_limits.max_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn overrides_are_applied() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("STUDY_QUIZ_LENGTH", " 5 "),
            ("STUDY_MIN_UPLOAD_BYTES", "10"),
            ("STUDY_MAX_UPLOAD_BYTES", "2048"),
        ]));
        assert_eq!(config.quiz_length, 5);
        assert_eq!(config.upload_limits.min_bytes, 10);
        assert_eq!(config.upload_limits.max_bytes, 2048);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("STUDY_QUIZ_LENGTH", "0"),
            ("STUDY_MAX_UPLOAD_BYTES", "lots"),
        ]));
        assert_eq!(config.quiz_length, 10);
        assert_eq!(config.upload_limits.max_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn oversized_quiz_length_falls_back() {
        let config =
            GeneratorConfig::from_lookup(lookup(&[("STUDY_QUIZ_LENGTH", "100000000000000")]));
        assert_eq!(config.quiz_length, DEFAULT_QUIZ_LENGTH);

        let config = GeneratorConfig::from_lookup(lookup(&[("STUDY_QUIZ_LENGTH", "50")]));
        assert_eq!(config.quiz_length, MAX_QUIZ_LENGTH);
        let config = GeneratorConfig::from_lookup(lookup(&[("STUDY_QUIZ_LENGTH", "51")]));
        assert_eq!(config.quiz_length, DEFAULT_QUIZ_LENGTH);
    }
}
