//! Three-way subject classification from a file name and a text sample.

use study_core::model::SubjectCategory;

const NAME_RULES: [(SubjectCategory, &[&str]); 3] = [
    (
        SubjectCategory::Mathematics,
        &["math", "algebra", "calculus", "geometry"],
    ),
    (
        SubjectCategory::Science,
        &["biology", "chemistry", "physics", "science"],
    ),
    (SubjectCategory::History, &["history", "social"]),
];

const MATH_TERMS: &[&str] = &[
    "equation",
    "formula",
    "calculate",
    "derivative",
    "integral",
    "theorem",
    "proof",
];
const SCIENCE_TERMS: &[&str] = &[
    "experiment",
    "hypothesis",
    "theory",
    "cell",
    "molecule",
    "reaction",
    "species",
];
const HISTORY_TERMS: &[&str] = &[
    "century",
    "empire",
    "war",
    "revolution",
    "dynasty",
    "civilization",
    "ancient",
];

/// Classify a document.
///
/// A keyword in the file name decides immediately. Otherwise each category
/// scores one point per distinct term present in `text`: mathematics needs to
/// beat both others, science needs to beat history, history needs any hit,
/// and everything else is `General`.
#[must_use]
pub fn classify(text: &str, file_name: &str) -> SubjectCategory {
    let name = file_name.to_lowercase();
    if let Some((category, _)) = NAME_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
    {
        return *category;
    }

    let text = text.to_lowercase();
    let score = |terms: &[&str]| terms.iter().filter(|t| text.contains(*t)).count();
    let math = score(MATH_TERMS);
    let science = score(SCIENCE_TERMS);
    let history = score(HISTORY_TERMS);

    if math > science && math > history {
        SubjectCategory::Mathematics
    } else if science > history {
        SubjectCategory::Science
    } else if history > 0 {
        SubjectCategory::History
    } else {
        SubjectCategory::General
    }
}
