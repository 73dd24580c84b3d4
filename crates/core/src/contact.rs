//! Contact form submissions.
//!
//! The public form posts `name`, `email`, `phone`, `subject` and `message`.
//! Name, email and message must be present and non-empty; phone and subject
//! are optional. No email-format check is applied.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Message returned when any required field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required";

/// Raw request body for `POST /api/contact`.
///
/// Required fields are `Option` so that a missing key is reported as a
/// validation failure instead of a JSON deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// A submission that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl TryFrom<ContactSubmission> for NewContactMessage {
    type Error = CoreError;

    fn try_from(input: ContactSubmission) -> Result<Self, Self::Error> {
        input
            .validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.into()))?;

        match (input.name, input.email, input.message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                phone: input.phone,
                subject: input.subject,
                message,
            }),
            _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        }
    }
}
