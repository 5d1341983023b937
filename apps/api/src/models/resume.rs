/// One job parsed from a blank-line delimited block of experience text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub date_range: Option<String>,
    /// Raw remainder of the block once the heading and dates are cut out.
    pub description: String,
}

impl ExperienceEntry {
    pub fn job_title_or_placeholder(&self) -> &str {
        self.job_title.as_deref().unwrap_or("Position")
    }

    pub fn company_or_placeholder(&self) -> &str {
        self.company.as_deref().unwrap_or("Company")
    }

    pub fn date_range_or_placeholder(&self) -> &str {
        self.date_range.as_deref().unwrap_or("Date range")
    }
}

/// One degree parsed from a blank-line delimited block of education text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub date_range: Option<String>,
    pub description: String,
}

impl EducationEntry {
    pub fn degree_or_placeholder(&self) -> &str {
        self.degree.as_deref().unwrap_or("Degree")
    }

    pub fn institution_or_placeholder(&self) -> &str {
        self.institution.as_deref().unwrap_or("Institution")
    }

    /// Education renders an empty date line rather than a placeholder.
    pub fn date_range_or_empty(&self) -> &str {
        self.date_range.as_deref().unwrap_or("")
    }
}

/// Which resume section a line of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

/// Raw text of an existing resume, bucketed by section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeSections {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

impl ResumeSections {
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut String {
        match kind {
            SectionKind::Summary => &mut self.summary,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
            SectionKind::Skills => &mut self.skills,
        }
    }

    /// True when none of the body sections picked up any text.
    pub fn body_is_empty(&self) -> bool {
        self.experience.is_empty() && self.education.is_empty() && self.skills.is_empty()
    }
}
