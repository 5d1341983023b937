//! Resume section splitter — buckets the lines of an existing resume into
//! summary / experience / education / skills.

use crate::models::resume::{ResumeSections, SectionKind};

/// Header synonyms, checked in this order against the lowercased line.
const SECTION_HEADERS: &[(SectionKind, &[&str])] = &[
    (SectionKind::Summary, &["summary", "objective", "profile"]),
    (
        SectionKind::Experience,
        &["experience", "employment", "work history"],
    ),
    (SectionKind::Education, &["education", "academic", "degree"]),
    (
        SectionKind::Skills,
        &["skills", "technologies", "competencies"],
    ),
];

/// Cut points (fraction of total lines) for the headerless fallback:
/// summary 20%, experience 50%, education 15%, skills 15%.
const SUMMARY_END: f64 = 0.2;
const EXPERIENCE_END: f64 = 0.7;
const EDUCATION_END: f64 = 0.85;

fn detect_header(line: &str) -> Option<SectionKind> {
    let lowered = line.to_lowercase();
    SECTION_HEADERS
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|s| lowered.contains(s)))
        .map(|(kind, _)| *kind)
}

/// Splits resume text into sections by header detection.
///
/// Any line containing a header synonym is treated as a header and dropped,
/// even if it is really content. Lines before the first header are dropped
/// too. When no experience, education or skills text is found, the raw line
/// list is sliced proportionally instead.
pub fn split_sections(text: &str) -> ResumeSections {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut sections = ResumeSections::default();
    let mut current: Option<SectionKind> = None;

    for raw in &lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(kind) = detect_header(line) {
            current = Some(kind);
            continue;
        }

        if let Some(kind) = current {
            let section = sections.section_mut(kind);
            section.push_str(line);
            section.push('\n');
        }
    }

    if sections.body_is_empty() {
        sections = split_proportionally(&lines);
    }

    sections
}

fn split_proportionally(lines: &[&str]) -> ResumeSections {
    let total = lines.len() as f64;
    let summary_end = (total * SUMMARY_END).floor() as usize;
    let experience_end = (total * EXPERIENCE_END).floor() as usize;
    let education_end = (total * EDUCATION_END).floor() as usize;

    ResumeSections {
        summary: lines[..summary_end].join("\n"),
        experience: lines[summary_end..experience_end].join("\n"),
        education: lines[experience_end..education_end].join("\n"),
        skills: lines[education_end..].join("\n"),
    }
}
