use super::*;

const ALL_TRIGGERS: [BookingTrigger; 10] = [
    BookingTrigger::NavButton,
    BookingTrigger::NavCompact,
    BookingTrigger::HeroCta,
    BookingTrigger::ProgramMatch,
    BookingTrigger::PricingCard(0),
    BookingTrigger::PricingCard(1),
    BookingTrigger::PricingCard(2),
    BookingTrigger::QuoteRequest,
    BookingTrigger::QuickLink,
    BookingTrigger::Footer,
];

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_starts_closed_and_dark() {
    let state = UiState::default();
    assert_eq!(state.dialog, DialogState::Closed);
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.booking_open());
    assert_eq!(state.root_class(), "site dark");
}

// =============================================================
// Dialog
// =============================================================

#[test]
fn every_trigger_opens_the_dialog() {
    for trigger in ALL_TRIGGERS {
        let mut state = UiState::default();
        assert!(state.open_booking(trigger), "{trigger:?}");
        assert!(state.booking_open(), "{trigger:?}");
    }
}

#[test]
fn repeated_click_keeps_dialog_open_without_a_second_transition() {
    let mut state = UiState::default();
    assert!(state.open_booking(BookingTrigger::HeroCta));
    assert!(!state.open_booking(BookingTrigger::HeroCta));
    assert!(state.booking_open());
}

#[test]
fn dialog_toggles_indefinitely() {
    let mut state = UiState::default();
    for _ in 0..5 {
        state.open_booking(BookingTrigger::Footer);
        assert!(state.booking_open());
        state.set_dialog_open(false);
        assert!(!state.booking_open());
    }
}

#[test]
fn opening_dialog_does_not_touch_theme() {
    let mut state = UiState::default();
    state.toggle_theme();
    state.open_booking(BookingTrigger::NavButton);
    assert_eq!(state.theme, Theme::Light);
    state.set_dialog_open(false);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn dialog_state_from_open_round_trips() {
    assert_eq!(DialogState::from_open(true), DialogState::Open);
    assert_eq!(DialogState::from_open(false), DialogState::Closed);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn even_number_of_toggles_restores_root_class() {
    let mut state = UiState::default();
    let original = state.root_class();
    for _ in 0..4 {
        state.toggle_theme();
    }
    assert_eq!(state.root_class(), original);
}

#[test]
fn odd_number_of_toggles_flips_root_class() {
    let mut state = UiState::default();
    for _ in 0..3 {
        state.toggle_theme();
    }
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.root_class(), "site");
}

#[test]
fn toggling_theme_does_not_touch_dialog() {
    let mut state = UiState::default();
    state.open_booking(BookingTrigger::QuickLink);
    state.toggle_theme();
    assert!(state.booking_open());
}

#[test]
fn toggle_labels_name_the_target_scheme() {
    assert_eq!(Theme::Dark.toggle_label(TogglePlacement::Hero), "Switch to light");
    assert_eq!(Theme::Light.toggle_label(TogglePlacement::Hero), "Switch to dark");
    assert_eq!(Theme::Dark.toggle_label(TogglePlacement::Footer), "Light mode");
    assert_eq!(Theme::Light.toggle_label(TogglePlacement::Footer), "Dark mode");
}

#[test]
fn attribute_value_matches_scheme() {
    assert_eq!(Theme::Dark.attribute_value(), "dark");
    assert_eq!(Theme::Light.attribute_value(), "light");
}

// =============================================================
// Booking source
// =============================================================

#[test]
fn pricing_trigger_records_the_chosen_plan() {
    let mut state = UiState::default();
    state.open_booking(BookingTrigger::PricingCard(1));
    assert_eq!(state.booking_source, Some(BookingTrigger::PricingCard(1)));
    assert_eq!(state.booking_plan().map(|p| p.name), Some("Coached"));
}

#[test]
fn non_pricing_trigger_has_no_plan() {
    let mut state = UiState::default();
    state.open_booking(BookingTrigger::PricingCard(0));
    state.set_dialog_open(false);
    state.open_booking(BookingTrigger::NavButton);
    assert_eq!(state.booking_plan(), None);
}

#[test]
fn out_of_range_pricing_index_has_no_plan() {
    let mut state = UiState::default();
    state.open_booking(BookingTrigger::PricingCard(99));
    assert!(state.booking_open());
    assert_eq!(state.booking_plan(), None);
}

// =============================================================
// Booking session
// =============================================================

#[test]
fn closed_dialog_has_no_active_session() {
    let state = UiState::default();
    assert_eq!(state.active_booking_session(), None);
}

#[test]
fn reopening_starts_a_new_session() {
    let mut state = UiState::default();
    state.open_booking(BookingTrigger::NavButton);
    let first = state.active_booking_session();
    assert!(first.is_some());

    state.set_dialog_open(false);
    assert_eq!(state.active_booking_session(), None);

    state.open_booking(BookingTrigger::HeroCta);
    let second = state.active_booking_session();
    assert!(second.is_some());
    assert_ne!(first, second);
}

#[test]
fn repeated_open_keeps_the_same_session() {
    let mut state = UiState::default();
    state.open_booking(BookingTrigger::Footer);
    let session = state.active_booking_session();
    state.open_booking(BookingTrigger::QuickLink);
    assert_eq!(state.active_booking_session(), session);
}
