use thiserror::Error;

/// Why `Pipeline::add_record` refused to create a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Company name is required")]
    MissingCompany,

    #[error("Position is required")]
    MissingPosition,

    #[error("Invalid application date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Select a domain first")]
    NoDomainSelected,

    #[error("Choose an answer before submitting")]
    NoSelection,

    #[error("Answer already submitted")]
    AlreadySubmitted,

    #[error("Option {} is out of range (question has {len} options)", .index + 1)]
    OptionOutOfRange { index: usize, len: usize },

    #[error("No questions available for {0}")]
    EmptyDomain(String),
}

/// Failures from external collaborators (ATS scoring, document export).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0} is not available in this build")]
    Unavailable(&'static str),
}
