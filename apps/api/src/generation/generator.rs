//! Resume generation from form input.
//!
//! Pipeline: keywords (Generate profile) → experience/education entries →
//! prioritised skills → fragments → document.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::missing_fields_error;
use crate::parsing::entries::{parse_education, parse_experience};
use crate::parsing::keywords::{extract_keywords, ExtractionProfile};
use crate::parsing::skills::{prioritize_skills, split_skills};
use crate::render::fragments::{education_section, experience_section, skill_pills};
use crate::render::template::{generated_document, GeneratedParts};
use crate::render::RenderOptions;

/// Number of leading skills named in the generated summary.
const SUMMARY_SKILL_COUNT: usize = 3;

/// Raw `/generate` body. Every field is required, but absence is reported as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
}

/// A `GenerateRequest` with every field present and non-blank.
#[derive(Debug, Clone)]
pub struct ResumeForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub job_description: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl TryFrom<GenerateRequest> for ResumeForm {
    type Error = AppError;

    fn try_from(request: GenerateRequest) -> Result<Self, Self::Error> {
        let fields = [
            ("fullName", &request.full_name),
            ("email", &request.email),
            ("phone", &request.phone),
            ("jobTitle", &request.job_title),
            ("jobDescription", &request.job_description),
            ("experience", &request.experience),
            ("education", &request.education),
            ("skills", &request.skills),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| !present(value))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(missing_fields_error(&missing));
        }

        Ok(ResumeForm {
            full_name: request.full_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            job_title: request.job_title.unwrap_or_default(),
            job_description: request.job_description.unwrap_or_default(),
            experience: request.experience.unwrap_or_default(),
            education: request.education.unwrap_or_default(),
            skills: request.skills.unwrap_or_default(),
        })
    }
}

/// Builds a complete HTML resume from validated form input.
pub fn generate_resume(form: &ResumeForm, options: &RenderOptions) -> Result<String> {
    let profile = ExtractionProfile::Generate;
    let keywords = extract_keywords(&form.job_description, profile);

    let experience = parse_experience(&form.experience);
    let education = parse_education(&form.education);
    let skills = prioritize_skills(split_skills(&form.skills), &keywords);

    let experience_html =
        experience_section(&experience, &keywords, profile.min_highlight_len(), options)
            .context("failed to highlight experience section")?;

    let parts = GeneratedParts {
        full_name: options.user_text(&form.full_name).into_owned(),
        email: options.user_text(&form.email).into_owned(),
        phone: options.user_text(&form.phone).into_owned(),
        job_title: options.user_text(&form.job_title).into_owned(),
        summary_skills: skills
            .iter()
            .take(SUMMARY_SKILL_COUNT)
            .map(|skill| options.user_text(skill).into_owned())
            .collect(),
        experience_html,
        education_html: education_section(&education, options),
        skills_html: skill_pills(&skills, &keywords, options),
    };

    let html = generated_document(&parts);

    info!(
        "Generated resume: {} keywords, {} experience entries, {} education entries, {} skills, {} bytes",
        keywords.len(),
        experience.len(),
        education.len(),
        skills.len(),
        html.len()
    );

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::html::plain_text;

    fn sample_form() -> ResumeForm {
        ResumeForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555 0100".to_string(),
            job_title: "Backend Engineer".to_string(),
            job_description: "Acme is hiring a Backend Engineer with Python, Docker and AWS \
                experience to build REST services."
                .to_string(),
            experience: "Senior Developer at Acme Corp, Jan 2020 - Present\nBuilt APIs.\n\n\
                Engineer at Globex, 2016 to 2019\nWrote Python services for Docker hosts. Ran the on call rotation."
                .to_string(),
            education: "BSc Computer Science from State University\n2012 - 2016".to_string(),
            skills: "Figma, Python, Docker, Excel".to_string(),
        }
    }

    fn full_request() -> GenerateRequest {
        GenerateRequest {
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("555 0100".to_string()),
            job_title: Some("Engineer".to_string()),
            job_description: Some("Rust".to_string()),
            experience: Some("Engineer at Acme".to_string()),
            education: Some("BSc, MIT".to_string()),
            skills: Some("Rust".to_string()),
        }
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let request = GenerateRequest {
            email: None,
            ..full_request()
        };
        let err = ResumeForm::try_from(request).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Missing required fields"));
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let request = GenerateRequest {
            skills: Some("   ".to_string()),
            ..full_request()
        };
        assert!(ResumeForm::try_from(request).is_err());
    }

    #[test]
    fn test_complete_request_is_accepted() {
        let form = ResumeForm::try_from(full_request()).unwrap();
        assert_eq!(form.full_name, "Jane Doe");
        assert_eq!(form.education, "BSc, MIT");
    }

    #[test]
    fn test_generate_contains_parsed_experience() {
        let html = generate_resume(&sample_form(), &RenderOptions::default()).unwrap();
        assert!(html.contains(r#"<span class="job-title">Senior Developer</span>"#));
        assert!(html.contains(r#"<span class="company">Acme Corp</span>"#));
        assert!(html.contains(r#"<div class="date">Jan 2020 - Present</div>"#));
        assert!(html.contains("<li>Built APIs.</li>"));
        assert!(html.contains(r#"<div class="date">2016 - 2019</div>"#));
    }

    #[test]
    fn test_generate_prioritises_matching_skills_in_summary() {
        let html = generate_resume(&sample_form(), &RenderOptions::default()).unwrap();
        assert!(html.contains("with experience in Python, Docker, Figma."));
        assert!(html.contains(r#"<div class="skill highlight">Python</div>"#));
        assert!(html.contains(r#"<div class="skill">Excel</div>"#));
    }

    #[test]
    fn test_generate_highlights_every_keyword_length() {
        // The generate path has no minimum keyword length.
        let html = generate_resume(&sample_form(), &RenderOptions::default()).unwrap();
        assert!(html.contains(r#"<span class="highlight">Python</span>"#));
    }

    #[test]
    fn test_generate_escapes_header_fields() {
        let form = ResumeForm {
            full_name: "<script>alert(1)</script>".to_string(),
            ..sample_form()
        };
        let html = generate_resume(&form, &RenderOptions::default()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_keyword_inside_escaped_entity_keeps_text_intact() {
        let form = ResumeForm {
            job_description: "Build AMP pages".to_string(),
            experience: "Engineer at Acme\nRan the R&D lab for mobile pages".to_string(),
            ..sample_form()
        };
        let html = generate_resume(&form, &RenderOptions::default()).unwrap();
        assert!(html.contains("<li>Ran the R&amp;D lab for mobile pages.</li>"));
        assert!(!html.contains("&<span"));
        assert!(plain_text(&html).contains("R&D"));
    }

    #[test]
    fn test_generated_html_strips_back_to_plain_text() {
        let html = generate_resume(&sample_form(), &RenderOptions::default()).unwrap();
        let text = plain_text(&html);
        assert!(!text.contains('<'));
        assert!(!text.contains('>'));
        assert!(text.contains("Senior Developer"));
        assert!(text.contains("PROFESSIONAL EXPERIENCE"));
        assert!(!text.contains("font-family"));
    }
}
