//! Keyword Extractor — derives the requirement set for a job description.
//!
//! Membership is boolean: a term is either a requirement or it isn't. There is
//! no weighting, only insertion order (vocabulary, capitalized words, phrases).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Technology and practice terms recognised in job descriptions.
const TECH_VOCABULARY: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "node",
    "python",
    "java",
    "c#",
    "c++",
    "html",
    "css",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "ci/cd",
    "agile",
    "scrum",
    "git",
    "rest",
    "api",
    "frontend",
    "backend",
    "fullstack",
    "mobile",
    "web",
    "cloud",
    "devops",
    "machine learning",
    "ai",
    "data science",
    "analytics",
    "big data",
];

/// Soft requirement phrases, only consulted by the optimize profile.
const SOFT_REQUIREMENT_PHRASES: &[&str] = &[
    "years of experience",
    "team player",
    "communication skills",
    "problem solving",
    "attention to detail",
    "leadership",
    "project management",
    "time management",
    "customer service",
    "analytical skills",
    "creative thinking",
    "innovative",
];

// Word characters and boundaries are ASCII-only.
static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("static regex"));
static CAPITALIZED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[A-Z][a-zA-Z]{2,}(?-u:\b)").expect("static regex")
});

/// Which endpoint is extracting. Drives the phrase list and the highlight filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionProfile {
    Generate,
    Optimize,
}

impl ExtractionProfile {
    fn includes_soft_phrases(self) -> bool {
        matches!(self, ExtractionProfile::Optimize)
    }

    /// Keywords at or below this many chars are never highlighted.
    ///
    /// The two endpoints disagree here (every keyword vs. longer than 3);
    /// existing clients see both behaviours, so both are kept.
    pub fn min_highlight_len(self) -> usize {
        match self {
            ExtractionProfile::Generate => 0,
            ExtractionProfile::Optimize => 3,
        }
    }
}

/// Ordered, deduplicated set of lowercase requirement terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a term (lowercased). Returns false if it was already present.
    pub fn insert(&mut self, term: &str) -> bool {
        if self.contains(term) {
            return false;
        }
        let term = term.to_lowercase();
        self.seen.insert(term.clone());
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(&term.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The first `n` terms in extraction order.
    pub fn leading(&self, n: usize) -> Vec<&str> {
        self.iter().take(n).collect()
    }

    /// True when any requirement term occurs (case-insensitively) inside `skill`.
    pub fn matches_skill(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.terms.iter().any(|term| skill.contains(term.as_str()))
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for term in iter {
            set.insert(term);
        }
        set
    }
}

/// Extracts the requirement set from a job description.
pub fn extract_keywords(job_description: &str, profile: ExtractionProfile) -> KeywordSet {
    let lowered = job_description.to_lowercase();
    let words: HashSet<&str> = NON_WORD_RE
        .split(&lowered)
        .filter(|w| !w.is_empty())
        .collect();

    let mut keywords = KeywordSet::new();

    for &term in TECH_VOCABULARY {
        if words.contains(term) || lowered.contains(term) {
            keywords.insert(term);
        }
    }

    for word in CAPITALIZED_RE.find_iter(job_description) {
        keywords.insert(word.as_str());
    }

    if profile.includes_soft_phrases() {
        for &phrase in SOFT_REQUIREMENT_PHRASES {
            if lowered.contains(phrase) {
                keywords.insert(phrase);
            }
        }
    }

    if keywords.is_empty() {
        debug!("No requirement keywords found in job description");
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND_JD: &str = "We are hiring a Backend Engineer to build REST services in Python \
        and deploy them with Docker on AWS. Experience with PostgreSQL is a plus. \
        You are a team player with strong communication skills.";

    #[test]
    fn test_vocabulary_terms_are_detected() {
        let keywords = extract_keywords(BACKEND_JD, ExtractionProfile::Generate);
        for term in ["python", "docker", "aws", "postgresql", "rest", "backend"] {
            assert!(keywords.contains(term), "missing {term}");
        }
    }

    #[test]
    fn test_capitalized_words_are_lowercased() {
        let keywords = extract_keywords(BACKEND_JD, ExtractionProfile::Generate);
        assert!(keywords.contains("engineer"));
        assert!(keywords.contains("experience"));
        assert!(keywords.iter().all(|k| k == k.to_lowercase()));
    }

    #[test]
    fn test_short_capitalized_words_are_ignored() {
        let keywords = extract_keywords("Go to AWS. We use Go.", ExtractionProfile::Generate);
        assert!(!keywords.contains("go"));
        // "AWS" is matched through the vocabulary table, not the capitalization rule
        assert!(keywords.contains("aws"));
    }

    #[test]
    fn test_output_is_deduplicated() {
        let keywords = extract_keywords(
            "Python python PYTHON and Python again",
            ExtractionProfile::Generate,
        );
        let python_count = keywords.iter().filter(|k| *k == "python").count();
        assert_eq!(python_count, 1);
    }

    #[test]
    fn test_vocabulary_order_precedes_capitalized_words() {
        let keywords = extract_keywords("Acme wants React and Docker", ExtractionProfile::Generate);
        let terms: Vec<&str> = keywords.iter().collect();
        assert_eq!(terms, vec!["react", "docker", "acme"]);
    }

    #[test]
    fn test_substring_matches_count_as_present() {
        // "ai" is a substring of "maintain"; membership is substring-based.
        let keywords = extract_keywords("maintain the system", ExtractionProfile::Generate);
        assert!(keywords.contains("ai"));
    }

    #[test]
    fn test_soft_phrases_only_for_optimize_profile() {
        let generate = extract_keywords(BACKEND_JD, ExtractionProfile::Generate);
        let optimize = extract_keywords(BACKEND_JD, ExtractionProfile::Optimize);
        assert!(!generate.contains("team player"));
        assert!(optimize.contains("team player"));
        assert!(optimize.contains("communication skills"));
    }

    #[test]
    fn test_empty_description_yields_empty_set() {
        let keywords = extract_keywords("", ExtractionProfile::Optimize);
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_matches_skill_is_case_insensitive_substring() {
        let keywords: KeywordSet = ["react", "aws"].into_iter().collect();
        assert!(keywords.matches_skill("React Native"));
        assert!(keywords.matches_skill("AWS Lambda"));
        assert!(!keywords.matches_skill("Figma"));
    }

    #[test]
    fn test_capitalized_words_end_at_non_ascii_letters() {
        let keywords = extract_keywords("Globexé partners", ExtractionProfile::Generate);
        let terms: Vec<&str> = keywords.iter().collect();
        assert_eq!(terms, vec!["globex"]);
    }

    #[test]
    fn test_min_highlight_len_differs_by_profile() {
        assert_eq!(ExtractionProfile::Generate.min_highlight_len(), 0);
        assert_eq!(ExtractionProfile::Optimize.min_highlight_len(), 3);
    }
}
