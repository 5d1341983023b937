//! Entry parser — splits experience/education free text into records.
//!
//! Blocks are separated by blank lines. Each block gets one heading match
//! ("Title at Company", "Degree from Institution", or a comma/hyphen pair)
//! and one date-range match; whatever matched is cut out of the block and the
//! remainder becomes the description.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{EducationEntry, ExperienceEntry};

static BLOCK_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("static regex"));

static EXPERIENCE_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\n)([^,\n]+?)(?:\s+at\s+|\s+-\s+|,)([^,\n]+?)(?:,|\n|$)").expect("static regex")
});

static EDUCATION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\n)([^,\n]+?)(?:\s+from\s+|\s+-\s+|,)([^,\n]+?)(?:,|\n|$)")
        .expect("static regex")
});

const MONTH_YEAR: &str = r"\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{4}\b";

static EXPERIENCE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)({MONTH_YEAR}|\d{{4}})\s*(?:-|to|–)\s*({MONTH_YEAR}|\d{{4}}|Present|Current)"
    ))
    .expect("static regex")
});

static EDUCATION_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4})\s*(?:-|to|–)\s*(\d{4}|Present|Current)").expect("static regex")
});

/// Result of running the heading and date patterns over one block.
#[derive(Debug, Default, PartialEq)]
struct ParsedBlock {
    primary: Option<String>,
    secondary: Option<String>,
    date_range: Option<String>,
    remainder: String,
}

fn parse_block(block: &str, heading_re: &Regex, date_re: &Regex) -> ParsedBlock {
    let mut parsed = ParsedBlock {
        remainder: block.to_string(),
        ..Default::default()
    };

    if let Some(caps) = heading_re.captures(block) {
        parsed.primary = caps.get(1).map(|m| m.as_str().trim().to_string());
        parsed.secondary = caps.get(2).map(|m| m.as_str().trim().to_string());
        parsed.remainder = parsed.remainder.replacen(&caps[0], "", 1).trim().to_string();
    }

    let date_match = date_re
        .captures(&parsed.remainder)
        .map(|caps| (caps[0].to_string(), format!("{} - {}", &caps[1], &caps[2])));
    if let Some((matched, range)) = date_match {
        parsed.remainder = parsed.remainder.replacen(&matched, "", 1).trim().to_string();
        parsed.date_range = Some(range);
    }

    parsed.primary = parsed.primary.filter(|s| !s.is_empty());
    parsed.secondary = parsed.secondary.filter(|s| !s.is_empty());
    parsed
}

fn blocks(text: &str) -> impl Iterator<Item = &str> {
    BLOCK_SEPARATOR_RE.split(text)
}

/// Parses blank-line separated job entries.
pub fn parse_experience(text: &str) -> Vec<ExperienceEntry> {
    blocks(text)
        .map(|block| {
            let parsed = parse_block(block, &EXPERIENCE_HEADING_RE, &EXPERIENCE_DATE_RE);
            ExperienceEntry {
                job_title: parsed.primary,
                company: parsed.secondary,
                date_range: parsed.date_range,
                description: parsed.remainder,
            }
        })
        .collect()
}

/// Parses blank-line separated degree entries.
pub fn parse_education(text: &str) -> Vec<EducationEntry> {
    blocks(text)
        .map(|block| {
            let parsed = parse_block(block, &EDUCATION_HEADING_RE, &EDUCATION_DATE_RE);
            EducationEntry {
                degree: parsed.primary,
                institution: parsed.secondary,
                date_range: parsed.date_range,
                description: parsed.remainder,
            }
        })
        .collect()
}
