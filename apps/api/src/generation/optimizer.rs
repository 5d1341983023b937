//! Resume optimisation — rebuilds an existing resume around a job description.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::missing_fields_error;
use crate::parsing::entries::parse_experience;
use crate::parsing::html::{looks_like_html, plain_text};
use crate::parsing::keywords::{extract_keywords, ExtractionProfile, KeywordSet};
use crate::parsing::sections::split_sections;
use crate::parsing::skills::optimize_skill_list;
use crate::render::fragments::{experience_section, skill_pills};
use crate::render::highlight::highlight_keywords;
use crate::render::template::{optimized_document, OptimizedParts};
use crate::render::RenderOptions;

/// Number of leading keywords named in the fallback summary.
const SUMMARY_KEYWORD_COUNT: usize = 3;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub job_description: Option<String>,
    pub current_resume: Option<String>,
}

/// An `OptimizeRequest` with both fields present and non-blank.
#[derive(Debug, Clone)]
pub struct OptimizeForm {
    pub job_description: String,
    /// Plain text or a full HTML document; HTML is stripped before parsing.
    pub current_resume: String,
}

impl TryFrom<OptimizeRequest> for OptimizeForm {
    type Error = AppError;

    fn try_from(request: OptimizeRequest) -> Result<Self, Self::Error> {
        match (request.job_description, request.current_resume) {
            (Some(job_description), Some(current_resume))
                if !job_description.trim().is_empty() && !current_resume.trim().is_empty() =>
            {
                Ok(OptimizeForm {
                    job_description,
                    current_resume,
                })
            }
            (job_description, current_resume) => {
                let mut missing = Vec::new();
                if job_description.as_deref().map_or(true, |v| v.trim().is_empty()) {
                    missing.push("jobDescription");
                }
                if current_resume.as_deref().map_or(true, |v| v.trim().is_empty()) {
                    missing.push("currentResume");
                }
                Err(missing_fields_error(&missing))
            }
        }
    }
}

/// Highlights an existing summary, or writes a generic one from the leading
/// keywords when the resume had none.
fn optimized_summary(
    summary: &str,
    keywords: &KeywordSet,
    min_highlight_len: usize,
    options: &RenderOptions,
) -> Result<String, regex::Error> {
    if summary.is_empty() {
        let expertise: Vec<String> = keywords
            .leading(SUMMARY_KEYWORD_COUNT)
            .into_iter()
            .map(|k| options.user_text(k).into_owned())
            .collect();
        return Ok(format!(
            "Experienced professional with expertise in {}, seeking to leverage skills and \
             experience to excel in a new role. Proven track record of delivering high-quality \
             results in fast-paced environments.",
            expertise.join(", ")
        ));
    }

    highlight_keywords(&options.user_text(summary), keywords, min_highlight_len)
}

/// Rebuilds the submitted resume as a keyword-highlighted HTML document.
pub fn optimize_resume(form: &OptimizeForm, options: &RenderOptions) -> Result<String> {
    let profile = ExtractionProfile::Optimize;
    let min_len = profile.min_highlight_len();
    let keywords = extract_keywords(&form.job_description, profile);

    let was_html = looks_like_html(&form.current_resume);
    let resume_text = plain_text(&form.current_resume);
    let sections = split_sections(&resume_text);

    let skills = optimize_skill_list(&sections.skills, &form.job_description);

    let summary_html = optimized_summary(&sections.summary, &keywords, min_len, options)
        .context("failed to highlight summary")?;

    let experience_entries = if sections.experience.is_empty() {
        Vec::new()
    } else {
        parse_experience(&sections.experience)
    };
    let experience_html = experience_section(&experience_entries, &keywords, min_len, options)
        .context("failed to highlight experience section")?;

    let parts = OptimizedParts {
        summary_html,
        experience_html,
        education_html: options.user_text(&sections.education).into_owned(),
        skills_html: skill_pills(&skills, &keywords, options),
    };

    let html = optimized_document(&parts);

    info!(
        "Optimized resume (html input: {}): {} keywords, {} experience entries, {} skills, {} bytes",
        was_html,
        keywords.len(),
        experience_entries.len(),
        skills.len(),
        html.len()
    );

    Ok(html)
}
