use super::*;
use crate::net::intake::PlaceholderIntake;
use crate::state::ui::{BookingTrigger, UiState, is_same_booking_session};
use futures::executor::block_on;
use std::sync::Mutex;

// =========================================================================
// MockIntake
// =========================================================================

struct MockIntake {
    outcome: Result<Ack, IntakeError>,
    calls: Mutex<Vec<IntakePayload>>,
}

impl MockIntake {
    fn accepting() -> Self {
        Self { outcome: Ok(Ack { message: "got it".to_owned() }), calls: Mutex::new(Vec::new()) }
    }

    fn failing(err: IntakeError) -> Self {
        Self { outcome: Err(err), calls: Mutex::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<IntakePayload> {
        self.calls.lock().unwrap().clone()
    }
}

impl FormIntake for MockIntake {
    async fn submit(&self, payload: &IntakePayload) -> Result<Ack, IntakeError> {
        self.calls.lock().unwrap().push(payload.clone());
        self.outcome.clone()
    }
}

fn valid_booking() -> BookingFields {
    BookingFields {
        name: "Mike".to_owned(),
        phone: String::new(),
        email: "mike@example.com".to_owned(),
        goal: "More energy".to_owned(),
    }
}

/// Mirrors the booking dialog's submit handler.
fn submit_booking(ui: &mut UiState, fields: &BookingFields, intake: &MockIntake) -> FormStatus {
    let payload = match fields.validate() {
        Ok(p) => p,
        Err(e) => return FormStatus::Invalid(e),
    };
    let started = ui.active_booking_session();
    let status = block_on(deliver(intake, &payload));
    settle_booking(ui, started, &status);
    status
}

/// Mirrors the booking dialog's completion step for a submission that began
/// in session `started`.
fn settle_booking(ui: &mut UiState, started: Option<u32>, status: &FormStatus) {
    if status.closes_dialog() && is_same_booking_session(started, ui.active_booking_session()) {
        ui.set_dialog_open(false);
    }
}

// =========================================================================
// Email shape
// =========================================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_valid_email("hello@rbathletics.ca"));
    assert!(is_valid_email(" first.last+tag@mail.example.com "));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["", "plain", "@example.com", "a@", "a@b", "a@b.", "a@.com", "a b@c.com", "a@b@c.com", "a@b..com"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

// =========================================================================
// Booking validation
// =========================================================================

#[test]
fn booking_validate_trims_and_builds_payload() {
    let fields = BookingFields {
        name: "  Mike ".to_owned(),
        phone: " 555-0100 ".to_owned(),
        email: " mike@example.com ".to_owned(),
        goal: " More energy ".to_owned(),
    };
    let payload = fields.validate().unwrap();
    assert_eq!(payload.source, FormSource::Booking);
    assert_eq!(payload.name, "Mike");
    assert_eq!(payload.phone.as_deref(), Some("555-0100"));
    assert_eq!(payload.email, "mike@example.com");
    assert_eq!(payload.message, "More energy");
}

#[test]
fn booking_phone_is_optional() {
    assert_eq!(valid_booking().validate().unwrap().phone, None);
}

#[test]
fn booking_validate_reports_first_problem() {
    let no_name = BookingFields { name: "  ".to_owned(), ..valid_booking() };
    assert_eq!(no_name.validate(), Err(FieldError::MissingName));

    let no_email = BookingFields { email: String::new(), ..valid_booking() };
    assert_eq!(no_email.validate(), Err(FieldError::MissingEmail));

    let bad_email = BookingFields { email: "mike".to_owned(), ..valid_booking() };
    assert_eq!(bad_email.validate(), Err(FieldError::InvalidEmail));

    let no_goal = BookingFields { goal: String::new(), ..valid_booking() };
    assert_eq!(no_goal.validate(), Err(FieldError::MissingMessage("goal")));
}

// =========================================================================
// Booking submission flow
// =========================================================================

#[test]
fn valid_booking_closes_the_dialog() {
    let mut ui = UiState::default();
    ui.open_booking(BookingTrigger::HeroCta);
    let intake = MockIntake::accepting();

    let status = submit_booking(&mut ui, &valid_booking(), &intake);

    assert!(matches!(status, FormStatus::Sent(_)));
    assert!(!ui.booking_open());
    assert_eq!(intake.calls().len(), 1);
    assert_eq!(intake.calls()[0].name, "Mike");
}

#[test]
fn booking_with_empty_name_leaves_dialog_open() {
    let mut ui = UiState::default();
    ui.open_booking(BookingTrigger::NavButton);
    let intake = MockIntake::accepting();
    let fields = BookingFields { name: String::new(), ..valid_booking() };

    let status = submit_booking(&mut ui, &fields, &intake);

    assert_eq!(status, FormStatus::Invalid(FieldError::MissingName));
    assert!(ui.booking_open());
    assert!(intake.calls().is_empty());
}

#[test]
fn failed_delivery_leaves_dialog_open_with_error() {
    let mut ui = UiState::default();
    ui.open_booking(BookingTrigger::Footer);
    let intake = MockIntake::failing(IntakeError::Rejected { status: 503 });

    let status = submit_booking(&mut ui, &valid_booking(), &intake);

    assert!(ui.booking_open());
    assert!(status.is_error());
    assert_eq!(status.message().as_deref(), Some("Could not send: submission rejected (status 503)"));
}

#[test]
fn placeholder_delivery_yields_stand_in_acknowledgement() {
    let payload = valid_booking().validate().unwrap();
    let status = block_on(deliver(&PlaceholderIntake, &payload));
    assert_eq!(status.message().as_deref(), Some(FormSource::Booking.placeholder_ack()));
}

// =========================================================================
// Contact
// =========================================================================

#[test]
fn contact_validate_requires_message() {
    let fields = ContactFields { name: "Sana".to_owned(), email: "sana@example.com".to_owned(), message: " ".to_owned() };
    assert_eq!(fields.validate(), Err(FieldError::MissingMessage("message")));
    assert_eq!(FieldError::MissingMessage("message").to_string(), "Please fill in the message field.");
}

#[test]
fn contact_submission_does_not_clear_fields() {
    let fields = ContactFields {
        name: "Sana".to_owned(),
        email: "sana@example.com".to_owned(),
        message: "Marathon block".to_owned(),
    };
    let before = fields.clone();
    let payload = fields.validate().unwrap();
    let status = block_on(deliver(&MockIntake::accepting(), &payload));

    assert_eq!(status, FormStatus::Sent(Ack { message: "got it".to_owned() }));
    assert_eq!(fields, before);
    assert_eq!(payload.source, FormSource::Contact);
    assert_eq!(payload.phone, None);
}

// =========================================================================
// FormStatus
// =========================================================================

#[test]
fn form_status_flags() {
    assert!(FormStatus::Pending.is_pending());
    assert!(!FormStatus::Idle.is_pending());
    assert_eq!(FormStatus::Idle.message(), None);
    assert!(FormStatus::Invalid(FieldError::InvalidEmail).is_error());
    assert!(!FormStatus::Sent(Ack { message: String::new() }).is_error());
    assert!(!FormStatus::Failed(IntakeError::Unavailable).closes_dialog());
}

// =========================================================================
// Stale submissions
// =========================================================================

#[test]
fn submission_from_a_dismissed_session_leaves_the_reopened_dialog_open() {
    let mut ui = UiState::default();
    ui.open_booking(BookingTrigger::NavButton);
    let started = ui.active_booking_session();

    // Visitor dismisses while the request is in flight, then reopens.
    ui.set_dialog_open(false);
    ui.open_booking(BookingTrigger::HeroCta);

    let intake = MockIntake::accepting();
    let payload = valid_booking().validate().unwrap();
    let status = block_on(deliver(&intake, &payload));
    assert!(status.closes_dialog());

    settle_booking(&mut ui, started, &status);
    assert!(ui.booking_open());
}

#[test]
fn submission_after_dismissal_does_not_reopen_or_close_anything() {
    let mut ui = UiState::default();
    ui.open_booking(BookingTrigger::Footer);
    let started = ui.active_booking_session();
    ui.set_dialog_open(false);

    settle_booking(&mut ui, started, &FormStatus::Sent(Ack { message: "ok".to_owned() }));
    assert!(!ui.booking_open());
}

#[test]
fn same_session_requires_an_open_dialog() {
    assert!(is_same_booking_session(Some(3), Some(3)));
    assert!(!is_same_booking_session(Some(3), Some(4)));
    assert!(!is_same_booking_session(Some(3), None));
    assert!(!is_same_booking_session(None, None));
}
