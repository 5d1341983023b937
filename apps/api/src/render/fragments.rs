//! Entry and skill fragments — one HTML block per parsed record.

use crate::models::resume::{EducationEntry, ExperienceEntry};
use crate::parsing::keywords::KeywordSet;
use crate::render::bullets::normalize_bullets;
use crate::render::highlight::highlight_keywords;
use crate::render::RenderOptions;

/// Renders one job: heading line, date line, highlighted bullet list.
pub fn experience_fragment(
    entry: &ExperienceEntry,
    keywords: &KeywordSet,
    min_highlight_len: usize,
    options: &RenderOptions,
) -> Result<String, regex::Error> {
    let description = options.user_text(&entry.description);
    let description = highlight_keywords(&description, keywords, min_highlight_len)?;
    let description = normalize_bullets(&description);

    Ok(format!(
        r#"
      <div class="job">
        <div><span class="job-title">{title}</span> at <span class="company">{company}</span></div>
        <div class="date">{dates}</div>
        <div class="description">{description}</div>
      </div>
    "#,
        title = options.user_text(entry.job_title_or_placeholder()),
        company = options.user_text(entry.company_or_placeholder()),
        dates = options.user_text(entry.date_range_or_placeholder()),
    ))
}

/// Renders one degree. The description block is omitted when empty.
pub fn education_fragment(entry: &EducationEntry, options: &RenderOptions) -> String {
    let description = if entry.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="description">{}</div>"#,
            options.user_text(&entry.description)
        )
    };

    format!(
        r#"
      <div class="education">
        <div><span class="job-title">{degree}</span>, <span class="company">{institution}</span></div>
        <div class="date">{dates}</div>
        {description}
      </div>
    "#,
        degree = options.user_text(entry.degree_or_placeholder()),
        institution = options.user_text(entry.institution_or_placeholder()),
        dates = options.user_text(entry.date_range_or_empty()),
    )
}

/// Concatenates experience fragments for a whole section.
pub fn experience_section(
    entries: &[ExperienceEntry],
    keywords: &KeywordSet,
    min_highlight_len: usize,
    options: &RenderOptions,
) -> Result<String, regex::Error> {
    entries
        .iter()
        .map(|entry| experience_fragment(entry, keywords, min_highlight_len, options))
        .collect()
}

pub fn education_section(entries: &[EducationEntry], options: &RenderOptions) -> String {
    entries
        .iter()
        .map(|entry| education_fragment(entry, options))
        .collect()
}

/// Renders skills as pills; skills matching a requirement get the highlight variant.
pub fn skill_pills(skills: &[String], keywords: &KeywordSet, options: &RenderOptions) -> String {
    skills
        .iter()
        .map(|skill| {
            let class = if keywords.matches_skill(skill) {
                "skill highlight"
            } else {
                "skill"
            };
            format!(r#"<div class="{class}">{}</div>"#, options.user_text(skill))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::entries::parse_experience;

    fn keywords(terms: &[&str]) -> KeywordSet {
        terms.iter().copied().collect()
    }

    #[test]
    fn test_experience_fragment_from_scenario() {
        let entries = parse_experience("Senior Developer at Acme Corp, Jan 2020 - Present\nBuilt APIs.");
        let html = experience_fragment(&entries[0], &KeywordSet::new(), 0, &RenderOptions::default())
            .unwrap();
        assert!(html.contains(r#"<span class="job-title">Senior Developer</span>"#));
        assert!(html.contains(r#"<span class="company">Acme Corp</span>"#));
        assert!(html.contains(r#"<div class="date">Jan 2020 - Present</div>"#));
        assert!(html.contains(r#"<ul class="bullet-list"><li>Built APIs.</li></ul>"#));
    }

    #[test]
    fn test_experience_fragment_placeholders() {
        let html = experience_fragment(
            &ExperienceEntry::default(),
            &KeywordSet::new(),
            0,
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(html.contains(">Position</span> at <span class=\"company\">Company</span>"));
        assert!(html.contains(r#"<div class="date">Date range</div>"#));
    }

    #[test]
    fn test_experience_fragment_highlights_keywords() {
        let entry = ExperienceEntry {
            description: "Designed Kubernetes clusters for the data team".to_string(),
            ..Default::default()
        };
        let html = experience_fragment(&entry, &keywords(&["kubernetes"]), 0, &RenderOptions::default())
            .unwrap();
        assert!(html.contains(r#"<span class="highlight">Kubernetes</span>"#));
    }

    #[test]
    fn test_experience_fragment_escapes_user_markup() {
        let entry = ExperienceEntry {
            job_title: Some("<img src=x onerror=alert(1)>".to_string()),
            description: "Wrote <script>bad()</script> things for customers".to_string(),
            ..Default::default()
        };
        let html = experience_fragment(&entry, &KeywordSet::new(), 0, &RenderOptions::default())
            .unwrap();
        assert!(!html.contains("<img"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_legacy_mode_interpolates_verbatim() {
        let entry = ExperienceEntry {
            job_title: Some("<b>Lead</b>".to_string()),
            ..Default::default()
        };
        let html = experience_fragment(&entry, &KeywordSet::new(), 0, &RenderOptions::legacy())
            .unwrap();
        assert!(html.contains(r#"<span class="job-title"><b>Lead</b></span>"#));
    }

    #[test]
    fn test_education_fragment_omits_empty_description() {
        let entry = EducationEntry {
            degree: Some("MBA".to_string()),
            institution: Some("Wharton".to_string()),
            date_range: Some("2019 - 2021".to_string()),
            description: String::new(),
        };
        let html = education_fragment(&entry, &RenderOptions::default());
        assert!(html.contains(r#"<span class="job-title">MBA</span>, <span class="company">Wharton</span>"#));
        assert!(!html.contains(r#"class="description""#));
    }

    #[test]
    fn test_education_fragment_placeholders_and_empty_date() {
        let html = education_fragment(&EducationEntry::default(), &RenderOptions::default());
        assert!(html.contains(">Degree</span>, <span class=\"company\">Institution</span>"));
        assert!(html.contains(r#"<div class="date"></div>"#));
    }

    #[test]
    fn test_skill_pills_highlight_matches() {
        let skills = vec!["React Native".to_string(), "Figma".to_string()];
        let html = skill_pills(&skills, &keywords(&["react"]), &RenderOptions::default());
        assert_eq!(
            html,
            r#"<div class="skill highlight">React Native</div><div class="skill">Figma</div>"#
        );
    }

    #[test]
    fn test_experience_section_concatenates_entries() {
        let entries = parse_experience("Engineer at Acme\nBuilt the thing.\n\nLead at Globex\nRan the team.");
        let html = experience_section(&entries, &KeywordSet::new(), 0, &RenderOptions::default())
            .unwrap();
        assert_eq!(html.matches(r#"<div class="job">"#).count(), 2);
    }
}
