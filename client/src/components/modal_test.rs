use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
}

#[test]
fn other_keys_do_not_dismiss() {
    for key in ["Enter", " ", "Tab", "a", "escape", ""] {
        assert!(!is_dismiss_key(key), "{key:?}");
    }
}

#[test]
fn element_ids_are_scoped_to_the_dialog() {
    assert_eq!(title_id("booking-dialog"), "booking-dialog-title");
    assert_eq!(description_id("booking-dialog"), "booking-dialog-description");
    assert_ne!(title_id("booking-dialog"), title_id("overview-dialog"));
    assert_ne!(title_id("overview-dialog"), description_id("overview-dialog"));
}
