//! Skill list parsing and prioritisation.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::keywords::KeywordSet;

static SKILL_DELIMITER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;•\n-]").expect("static regex"));
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("static regex"));
static JOB_SKILL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:experience with|knowledge of|proficient in|familiar with)\s+(.+)")
        .expect("static regex")
});

/// Lead-ins that mark a JD fragment as naming a skill.
const JOB_SKILL_LEAD_INS: &[&str] = &[
    "experience with",
    "knowledge of",
    "proficient in",
    "familiar with",
];

/// JD words must be longer than this to pull a resume skill forward.
const MIN_JD_WORD_LEN: usize = 3;

/// Splits free text on commas, semicolons, bullets, hyphens and newlines.
pub fn split_skills(text: &str) -> Vec<String> {
    SKILL_DELIMITER_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drops repeats, keeping the first occurrence of each skill.
pub fn dedupe(skills: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|skill| seen.insert(skill.clone()))
        .collect()
}

/// Moves skills that match a requirement to the front, keeping relative order
/// inside each partition.
pub fn prioritize_skills(skills: Vec<String>, keywords: &KeywordSet) -> Vec<String> {
    let (matching, rest): (Vec<String>, Vec<String>) = skills
        .into_iter()
        .partition(|skill| keywords.matches_skill(skill));
    dedupe(matching.into_iter().chain(rest))
}

/// Skills named in the JD behind phrases like "experience with ...".
pub fn job_skill_phrases(job_description: &str) -> Vec<String> {
    SKILL_DELIMITER_RE
        .split(job_description)
        .map(str::trim)
        .filter(|part| {
            let lowered = part.to_lowercase();
            JOB_SKILL_LEAD_INS.iter().any(|lead| lowered.contains(lead))
        })
        .filter_map(|part| {
            JOB_SKILL_RE
                .captures(part)
                .map(|caps| caps[1].trim().to_string())
        })
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Builds the skill list for an optimized resume.
///
/// Resume skills containing any JD word longer than three characters come
/// first, then the remaining resume skills, then skills lifted from the JD.
pub fn optimize_skill_list(skills_section: &str, job_description: &str) -> Vec<String> {
    let resume_skills = split_skills(skills_section);
    let jd_lowered = job_description.to_lowercase();
    let jd_words: Vec<&str> = NON_WORD_RE
        .split(&jd_lowered)
        .filter(|w| w.chars().count() > MIN_JD_WORD_LEN)
        .collect();

    let mentions_jd_word = |skill: &String| {
        let skill = skill.to_lowercase();
        jd_words.iter().any(|word| skill.contains(word))
    };

    let (matching, rest): (Vec<String>, Vec<String>) =
        resume_skills.into_iter().partition(mentions_jd_word);

    dedupe(
        matching
            .into_iter()
            .chain(rest)
            .chain(job_skill_phrases(job_description)),
    )
}
