//! Validation services for outbound submissions.
//!
//! Local, pre-call checks only: required-field presence and the minimal
//! `@`-separated local/domain shape for email addresses. Anything that passes
//! here goes to the record store as-is.

use super::errors::{DomainError, DomainResult};

pub struct ContactValidator;

impl ContactValidator {
    /// Checks a contact submission before any collaborator call is made.
    ///
    /// Fields are rejected in order: name, email, message. The email check
    /// requires a non-empty local part and domain around a single `@`.
    pub fn validate(name: &str, email: &str, message: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(DomainError::MissingField("email"));
        }
        if !Self::is_valid_email(email) {
            return Err(DomainError::InvalidEmail(email.to_string()));
        }
        if message.trim().is_empty() {
            return Err(DomainError::MissingField("message"));
        }
        Ok(())
    }

    fn is_valid_email(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        }
    }
}
