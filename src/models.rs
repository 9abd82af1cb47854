use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Interviewing,
    Rejected,
    Offered,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Rejected,
        ApplicationStatus::Offered,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interviewing => "Interviewing",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Offered => "Offered",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "interviewing" => Ok(ApplicationStatus::Interviewing),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "offered" => Ok(ApplicationStatus::Offered),
            other => Err(format!(
                "unknown status '{}' (expected applied, interviewing, rejected, offered)",
                other
            )),
        }
    }
}

/// One tracked job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: RecordId,
    pub company: String,
    pub position: String,
    pub location: String,
    pub applied_date: NaiveDate,
    pub status: ApplicationStatus,
}

/// Input for `Pipeline::add_record`. A missing date means "today".
#[derive(Debug, Clone, Default)]
pub struct NewApplication {
    pub company: String,
    pub position: String,
    pub location: String,
    pub applied_date: Option<NaiveDate>,
}

impl NewApplication {
    pub fn new(company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            ..Default::default()
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn applied_on(mut self, date: NaiveDate) -> Self {
        self.applied_date = Some(date);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total: usize,
    pub interviewing: usize,
    pub rejected: usize,
    pub offered: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Frontend,
    Backend,
    HR,
    Product,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Frontend, Domain::Backend, Domain::HR, Domain::Product];

    pub fn label(self) -> &'static str {
        match self {
            Domain::Frontend => "Frontend",
            Domain::Backend => "Backend",
            Domain::HR => "HR",
            Domain::Product => "Product",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frontend" => Ok(Domain::Frontend),
            "backend" => Ok(Domain::Backend),
            "hr" => Ok(Domain::HR),
            "product" => Ok(Domain::Product),
            other => Err(format!(
                "unknown domain '{}' (expected frontend, backend, hr, product)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct_index: usize,
    pub explanation: &'static str,
}

/// Running tally for one quiz session. `correct <= total` always.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Interviewing".parse::<ApplicationStatus>(), Ok(ApplicationStatus::Interviewing));
        assert_eq!(" offered ".parse::<ApplicationStatus>(), Ok(ApplicationStatus::Offered));
        assert!("closed".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn domain_parses_and_displays() {
        assert_eq!("hr".parse::<Domain>(), Ok(Domain::HR));
        assert_eq!(Domain::Product.to_string(), "Product");
        assert!("design".parse::<Domain>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ApplicationStatus::Rejected).unwrap();
        assert_eq!(json, "\"rejected\"");
        let domain = serde_json::to_string(&Domain::HR).unwrap();
        assert_eq!(domain, "\"hr\"");
    }
}
