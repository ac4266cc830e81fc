//! Form-intake capability used by the booking dialog and contact form.
//!
//! The default [`PlaceholderIntake`] acknowledges locally and sends nothing.
//! [`HttpIntake`] POSTs the payload as JSON to a third-party form service or
//! CRM; it is selected at build time with `RB_FORM_INTAKE_URL`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success statuses come back as [`IntakeError`]
//! so the forms can show them distinctly from the success acknowledgement.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Which form produced a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSource {
    Booking,
    Contact,
}

impl FormSource {
    /// Stand-in acknowledgement shown when no intake endpoint is configured.
    #[must_use]
    pub fn placeholder_ack(self) -> &'static str {
        match self {
            Self::Booking => {
                "Submitted! Hook this form to your email/CRM (e.g., Formspree, Tally, HubSpot) when you publish."
            }
            Self::Contact => "Message sent! (Demo) Connect to Formspree/Tally/HubSpot to receive submissions.",
        }
    }

    /// Acknowledgement shown after the intake endpoint accepted a submission.
    #[must_use]
    pub fn delivered_ack(self) -> &'static str {
        match self {
            Self::Booking => "Thanks! We’ll reach out with next steps.",
            Self::Contact => "Thanks! Your message is on its way.",
        }
    }
}

/// Body handed to the intake endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakePayload {
    pub source: FormSource,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// Successful hand-off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

/// Errors produced while handing a submission off.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// The HTTP intake only runs in the browser.
    #[error("form intake is not available here")]
    Unavailable,

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("submission rejected (status {status})")]
    Rejected { status: u16 },
}

/// Capability that delivers a submission somewhere.
///
/// Implementations are `!Send`-friendly: browser futures run on the
/// single-threaded local executor.
pub trait FormIntake {
    fn submit(&self, payload: &IntakePayload) -> impl Future<Output = Result<Ack, IntakeError>>;
}

// =============================================================================
// PLACEHOLDER
// =============================================================================

/// Local acknowledgement only; no data leaves the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaceholderIntake;

impl FormIntake for PlaceholderIntake {
    async fn submit(&self, payload: &IntakePayload) -> Result<Ack, IntakeError> {
        Ok(Ack { message: payload.source.placeholder_ack().to_owned() })
    }
}

// =============================================================================
// HTTP
// =============================================================================

/// JSON POST to an external form-processing endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpIntake {
    endpoint: String,
}

impl HttpIntake {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FormIntake for HttpIntake {
    async fn submit(&self, payload: &IntakePayload) -> Result<Ack, IntakeError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|e| IntakeError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| IntakeError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            Ok(Ack { message: payload.source.delivered_ack().to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(IntakeError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), IntakeError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(IntakeError::Rejected { status }) }
}

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Intake wired into the component tree through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeClient {
    Placeholder(PlaceholderIntake),
    Http(HttpIntake),
}

impl IntakeClient {
    /// Pick the HTTP intake when `RB_FORM_INTAKE_URL` was set at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_endpoint(option_env!("RB_FORM_INTAKE_URL"))
    }

    /// Blank or missing endpoints fall back to the placeholder.
    #[must_use]
    pub fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(url) => Self::Http(HttpIntake::new(url)),
            None => Self::Placeholder(PlaceholderIntake),
        }
    }
}

impl Default for IntakeClient {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl FormIntake for IntakeClient {
    async fn submit(&self, payload: &IntakePayload) -> Result<Ack, IntakeError> {
        match self {
            Self::Placeholder(p) => p.submit(payload).await,
            Self::Http(h) => h.submit(payload).await,
        }
    }
}
