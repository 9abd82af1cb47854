use tracing::warn;

use crate::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeField {
    Name,
    Email,
    Summary,
    Skills,
    Experience,
}

impl ResumeField {
    pub const ALL: [ResumeField; 5] = [
        ResumeField::Name,
        ResumeField::Email,
        ResumeField::Summary,
        ResumeField::Skills,
        ResumeField::Experience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResumeField::Name => "Full Name",
            ResumeField::Email => "Email",
            ResumeField::Summary => "Professional Summary",
            ResumeField::Skills => "Skills",
            ResumeField::Experience => "Experience",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ResumeField::Name => "John Doe",
            ResumeField::Email => "john@example.com",
            ResumeField::Summary => "Experienced software engineer with 5+ years...",
            ResumeField::Skills => "React, TypeScript, Node.js...",
            ResumeField::Experience => "Senior Developer at Company X (2020-2024)...",
        }
    }

    pub fn multiline(self) -> bool {
        matches!(self, ResumeField::Summary | ResumeField::Experience)
    }
}

/// Free-text resume fields. No validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub summary: String,
    pub skills: String,
    pub experience: String,
}

impl ResumeForm {
    pub fn get(&self, field: ResumeField) -> &str {
        match field {
            ResumeField::Name => &self.name,
            ResumeField::Email => &self.email,
            ResumeField::Summary => &self.summary,
            ResumeField::Skills => &self.skills,
            ResumeField::Experience => &self.experience,
        }
    }

    pub fn set(&mut self, field: ResumeField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: ResumeField, c: char) {
        self.field_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: ResumeField) {
        self.field_mut(field).pop();
    }

    fn field_mut(&mut self, field: ResumeField) -> &mut String {
        match field {
            ResumeField::Name => &mut self.name,
            ResumeField::Email => &mut self.email,
            ResumeField::Summary => &mut self.summary,
            ResumeField::Skills => &mut self.skills,
            ResumeField::Experience => &mut self.experience,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtsReport {
    pub score: u8,
    pub suggestions: Vec<String>,
}

/// External ATS compatibility scoring service.
pub trait AtsScorer {
    fn analyze(&self, resume: &ResumeForm) -> Result<AtsReport, ServiceError>;
}

/// External document generation service (PDF export).
pub trait DocumentExporter {
    fn export(&self, resume: &ResumeForm) -> Result<Vec<u8>, ServiceError>;
}

pub struct UnavailableScorer;

impl AtsScorer for UnavailableScorer {
    fn analyze(&self, _resume: &ResumeForm) -> Result<AtsReport, ServiceError> {
        warn!("ATS analysis requested but no scoring service is configured");
        Err(ServiceError::Unavailable("ATS scoring"))
    }
}

pub struct UnavailableExporter;

impl DocumentExporter for UnavailableExporter {
    fn export(&self, _resume: &ResumeForm) -> Result<Vec<u8>, ServiceError> {
        warn!("PDF export requested but no document service is configured");
        Err(ServiceError::Unavailable("PDF export"))
    }
}
