use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("unknown service id: {0}")]
    UnknownService(String),
    #[error("select a service, date and time first")]
    IncompleteDraft,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("no form is open for submission")]
    NoActiveForm,
}

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record store is not configured")]
    NotConfigured,
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Rejected(String),
}
