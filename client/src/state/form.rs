//! Booking and contact form fields, validation, and submission status.
//!
//! Native `required` / `type="email"` checks stop most bad submissions in the
//! browser; [`BookingFields::validate`] and [`ContactFields::validate`] apply
//! the same rules in Rust so nothing reaches the intake without them.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::intake::{Ack, FormIntake, FormSource, IntakeError, IntakePayload};

/// A required field was empty or malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please fill in your name.")]
    MissingName,
    #[error("Please fill in your email.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill in the {0} field.")]
    MissingMessage(&'static str),
}

/// Lifecycle of one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid(FieldError),
    Pending,
    Sent(Ack),
    Failed(IntakeError),
}

impl FormStatus {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Failed(_))
    }

    /// Only a delivered submission dismisses the booking dialog.
    #[must_use]
    pub fn closes_dialog(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    /// Inline text under the submit button, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Pending => Some("Sending...".to_owned()),
            Self::Invalid(e) => Some(e.to_string()),
            Self::Sent(ack) => Some(ack.message.clone()),
            Self::Failed(e) => Some(format!("Could not send: {e}")),
        }
    }
}

/// Basic `local@domain.tld` shape: one `@`, non-empty local part, a dot in
/// the domain with text on both sides, no whitespace.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.ends_with('.'),
        None => false,
    }
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn checked_email(value: &str) -> Result<String, FieldError> {
    let email = required(value).ok_or(FieldError::MissingEmail)?;
    if is_valid_email(&email) { Ok(email) } else { Err(FieldError::InvalidEmail) }
}

/// Booking dialog inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub goal: String,
}

impl BookingFields {
    /// # Errors
    ///
    /// Returns the first missing or malformed required field.
    pub fn validate(&self) -> Result<IntakePayload, FieldError> {
        let name = required(&self.name).ok_or(FieldError::MissingName)?;
        let email = checked_email(&self.email)?;
        let message = required(&self.goal).ok_or(FieldError::MissingMessage("goal"))?;
        Ok(IntakePayload { source: FormSource::Booking, name, email, phone: required(&self.phone), message })
    }
}

/// Contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// # Errors
    ///
    /// Returns the first missing or malformed required field.
    pub fn validate(&self) -> Result<IntakePayload, FieldError> {
        let name = required(&self.name).ok_or(FieldError::MissingName)?;
        let email = checked_email(&self.email)?;
        let message = required(&self.message).ok_or(FieldError::MissingMessage("message"))?;
        Ok(IntakePayload { source: FormSource::Contact, name, email, phone: None, message })
    }
}

/// Hand a validated payload to the intake and fold the outcome into a status.
pub async fn deliver<I: FormIntake>(intake: &I, payload: &IntakePayload) -> FormStatus {
    match intake.submit(payload).await {
        Ok(ack) => {
            #[cfg(feature = "hydrate")]
            log::info!("{:?} submission acknowledged", payload.source);
            FormStatus::Sent(ack)
        }
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("{:?} submission failed: {e}", payload.source);
            FormStatus::Failed(e)
        }
    }
}
