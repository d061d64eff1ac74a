use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse subject label used to pick fallback quiz questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    Mathematics,
    Science,
    History,
    General,
}

impl SubjectCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SubjectCategory::Mathematics => "mathematics",
            SubjectCategory::Science => "science",
            SubjectCategory::History => "history",
            SubjectCategory::General => "general",
        }
    }
}

impl fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
