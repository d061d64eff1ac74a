//! Canned study material keyed by file-name keywords.
//!
//! This vocabulary is independent of [`crate::classifier`]: a biology file
//! lands in the biology bucket here while the classifier calls it science.

use serde::Serialize;

/// Subject bucket selected from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectBucket {
    Biology,
    Chemistry,
    Physics,
    Mathematics,
    History,
    Literature,
    ComputerScience,
    Generic,
}

/// One row of the bucket table.
#[derive(Debug)]
pub struct BucketTemplate {
    pub bucket: SubjectBucket,
    pub keywords: &'static [&'static str],
    pub paragraph: &'static str,
    pub key_terms: [&'static str; 8],
}

/// Rows in priority order; the first keyword hit wins.
pub static BUCKETS: [BucketTemplate; 7] = [
    BucketTemplate {
        bucket: SubjectBucket::Biology,
        keywords: &["biology", "bio", "cell", "plant", "animal"],
        paragraph: "This biology document covers fundamental concepts in cellular biology, \
including cell structure, organelles, and biological processes. The content explores topics \
such as photosynthesis, cellular respiration, DNA replication, and protein synthesis. Key \
biological systems including the nervous system, circulatory system, and immune system are \
discussed. The document also covers evolution, genetics, and ecological relationships between \
organisms and their environment.",
        key_terms: [
            "biology",
            "cells",
            "photosynthesis",
            "evolution",
            "genetics",
            "organisms",
            "proteins",
            "ecosystem",
        ],
    },
    BucketTemplate {
        bucket: SubjectBucket::Chemistry,
        keywords: &["chemistry", "chem", "molecule", "atom"],
        paragraph: "This chemistry document covers atomic structure, chemical bonding, and \
molecular interactions. Topics include the periodic table, chemical reactions, stoichiometry, \
and thermodynamics. The content explores organic chemistry, inorganic compounds, and chemical \
equilibrium. Laboratory techniques, chemical analysis, and real-world applications of chemistry \
are also discussed.",
        key_terms: [
            "chemistry",
            "atoms",
            "molecules",
            "reactions",
            "periodic",
            "bonds",
            "compounds",
            "equations",
        ],
    },
    BucketTemplate {
        bucket: SubjectBucket::Physics,
        keywords: &["physics", "mechanics", "energy", "force"],
        paragraph: "This physics document covers fundamental principles including mechanics, \
thermodynamics, electromagnetism, and quantum physics. Topics include Newton's laws, energy \
conservation, wave motion, and electromagnetic theory. The content explores atomic physics, \
relativity, and modern physics applications in technology and engineering.",
        key_terms: [
            "physics",
            "mechanics",
            "energy",
            "forces",
            "waves",
            "electromagnetic",
            "quantum",
            "motion",
        ],
    },
    BucketTemplate {
        bucket: SubjectBucket::Mathematics,
        keywords: &["math", "algebra", "calculus", "geometry"],
        paragraph: "This mathematics document covers algebraic concepts, geometric principles, \
and calculus fundamentals. Topics include equations, functions, derivatives, integrals, and \
mathematical proofs. The content explores trigonometry, statistics, probability, and real-world \
mathematical applications in science and engineering.",
        key_terms: [
            "mathematics",
            "algebra",
            "calculus",
            "geometry",
            "equations",
            "functions",
            "derivatives",
            "statistics",
        ],
    },
    BucketTemplate {
        bucket: SubjectBucket::History,
        keywords: &["history", "war", "ancient", "civilization"],
        paragraph: "This history document covers significant historical periods, civilizations, \
and events that shaped human society. Topics include ancient civilizations, political \
developments, social movements, and cultural changes throughout history. The content explores \
causes and effects of major historical events and their impact on modern society.",
        key_terms: [
            "history",
            "civilization",
            "society",
            "political",
            "cultural",
            "events",
            "ancient",
            "modern",
        ],
    },
    BucketTemplate {
        bucket: SubjectBucket::Literature,
        keywords: &["english", "literature", "writing", "essay"],
        paragraph: "This English literature document covers literary analysis, writing \
techniques, and communication skills. Topics include narrative structure, character \
development, themes, and literary devices. The content explores different genres, writing \
styles, and critical thinking approaches to literature and composition.",
        key_terms: [
            "literature",
            "writing",
            "analysis",
            "narrative",
            "character",
            "themes",
            "composition",
            "language",
        ],
    },
    BucketTemplate {
        bucket: SubjectBucket::ComputerScience,
        keywords: &["computer", "programming", "code", "software"],
        paragraph: "This computer science document covers programming fundamentals, algorithms, \
and software development. Topics include data structures, programming languages, database \
management, and computer systems. The content explores software engineering principles, web \
development, and emerging technologies in computing.",
        key_terms: [
            "programming",
            "algorithms",
            "software",
            "database",
            "systems",
            "development",
            "technology",
            "computing",
        ],
    },
];

/// Used when no keyword matches.
pub static GENERIC: BucketTemplate = BucketTemplate {
    bucket: SubjectBucket::Generic,
    keywords: &[],
    paragraph: "This academic document contains comprehensive information on the subject \
matter, presenting key concepts, theories, and practical applications. The content is \
structured to provide understanding of fundamental principles and their real-world relevance. \
Important topics are covered with detailed explanations and supporting examples to enhance \
learning and comprehension.",
    key_terms: [
        "academic",
        "concepts",
        "theories",
        "principles",
        "applications",
        "learning",
        "understanding",
        "knowledge",
    ],
};

/// Pick the template for a file name (matched case-insensitively).
#[must_use]
pub fn select(file_name: &str) -> &'static BucketTemplate {
    let name = file_name.to_lowercase();
    BUCKETS
        .iter()
        .find(|t| t.keywords.iter().any(|k| name.contains(k)))
        .unwrap_or(&GENERIC)
}
