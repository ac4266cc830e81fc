//! Page-local state machines.
//!
//! DESIGN
//! ======
//! Plain value types with synchronous transitions. Components wrap them in
//! signals; the types themselves know nothing about Leptos so every
//! transition is unit-testable.

pub mod accordion;
pub mod form;
pub mod ui;
