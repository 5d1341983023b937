//! Template Assembler — wraps rendered fragments in a self-contained document.
//!
//! Inputs are markup-ready: callers escape user text before it gets here.

const DOCUMENT_STYLES: &str = r#"
    body {
      font-family: 'Arial', sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
    }
    .header {
      text-align: center;
      margin-bottom: 20px;
      border-bottom: 2px solid #30BFBF;
      padding-bottom: 10px;
    }
    .name {
      font-size: 28px;
      font-weight: bold;
      color: #1C0B19;
      margin-bottom: 5px;
    }"#;

const CONTACT_STYLES: &str = r#"
    .contact-info {
      font-size: 14px;
      color: #555;
    }"#;

const SECTION_STYLES: &str = r#"
    .section-title {
      font-size: 20px;
      font-weight: bold;
      color: #30BFBF;
      margin-top: 20px;
      margin-bottom: 10px;
      border-bottom: 1px solid #eee;
      padding-bottom: 5px;
    }
    .job-title {
      font-weight: bold;
      color: #1C0B19;
    }
    .company {
      font-weight: bold;
    }
    .date {
      color: #777;
      font-style: italic;
    }
    .description {
      margin-top: 5px;
      margin-bottom: 15px;
    }
    .skills-list {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }
    .skill {
      background-color: #f0f0f0;
      padding: 5px 10px;
      border-radius: 15px;
      font-size: 14px;
    }
    .skill.highlight {
      background-color: #d6edff;
      font-weight: bold;
    }
    .bullet-list {
      margin-top: 5px;
      padding-left: 20px;
    }
    .highlight {
      background-color: rgba(0, 145, 110, 0.1);
      padding: 0 2px;
    }"#;

const JOB_MATCH_STYLES: &str = r#"
    .job-match {
      background-color: #f8f9fa;
      border-left: 3px solid #30BFBF;
      padding: 10px;
      margin-bottom: 15px;
      border-radius: 0 5px 5px 0;
    }
    .match-title {
      font-size: 16px;
      font-weight: bold;
      color: #30BFBF;
      margin-bottom: 5px;
    }"#;

/// Rendered pieces of a resume built from form input.
#[derive(Debug, Clone, Default)]
pub struct GeneratedParts {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    /// The leading skills named in the summary sentence.
    pub summary_skills: Vec<String>,
    pub experience_html: String,
    pub education_html: String,
    pub skills_html: String,
}

/// Rendered pieces of a resume rebuilt from an existing one.
#[derive(Debug, Clone, Default)]
pub struct OptimizedParts {
    pub summary_html: String,
    pub experience_html: String,
    pub education_html: String,
    pub skills_html: String,
}

fn section_body(
    summary: &str,
    experience: &str,
    education: &str,
    skills: &str,
) -> String {
    format!(
        r#"  <div class="section-title">PROFESSIONAL SUMMARY</div>
  <div class="description">
    {summary}
  </div>

  <div class="section-title">PROFESSIONAL EXPERIENCE</div>
  {experience}

  <div class="section-title">EDUCATION</div>
  {education}

  <div class="section-title">SKILLS</div>
  <div class="skills-list">
    {skills}
  </div>"#
    )
}

fn document(styles: &[&str], header: &str, body: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
  <style>{styles}
  </style>
</head>
<body>
{header}

{body}
</body>
</html>
  "#,
        styles = styles.concat(),
    )
}

/// Assembles the `/generate` document: contact header, generated summary, sections.
pub fn generated_document(parts: &GeneratedParts) -> String {
    let header = format!(
        r#"  <div class="header">
    <div class="name">{name}</div>
    <div class="contact-info">
      {email} | {phone} | {title}
    </div>
  </div>"#,
        name = parts.full_name,
        email = parts.email,
        phone = parts.phone,
        title = parts.job_title,
    );

    let summary = format!(
        "Dedicated {title} with experience in {skills}. \n    \
         Proven track record of delivering high-quality results in fast-paced environments.\n    \
         Seeking to leverage my skills and experience to excel as a {title}.",
        title = parts.job_title,
        skills = parts.summary_skills.join(", "),
    );

    let body = section_body(
        &summary,
        &parts.experience_html,
        &parts.education_html,
        &parts.skills_html,
    );

    document(&[DOCUMENT_STYLES, CONTACT_STYLES, SECTION_STYLES], &header, &body)
}

/// Assembles the `/optimize` document: job-match banner, then the sections.
pub fn optimized_document(parts: &OptimizedParts) -> String {
    let header = r#"  <div class="job-match">
    <div class="match-title">Optimized for Job Requirements</div>
    <p>This resume has been tailored to highlight your qualifications that best match the job description.</p>
  </div>"#;

    let body = section_body(
        &parts.summary_html,
        &parts.experience_html,
        &parts.education_html,
        &parts.skills_html,
    );

    document(&[DOCUMENT_STYLES, SECTION_STYLES, JOB_MATCH_STYLES], header, &body)
}
