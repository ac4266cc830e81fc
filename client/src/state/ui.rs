//! Dialog visibility and theme flags owned by the landing page.
//!
//! DESIGN
//! ======
//! The two flags are independent two-state machines. The landing page holds
//! the only copy and hands children read-only signals plus callbacks.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::content::catalog::{PRICING_PLANS, PricingPlan};

/// Booking dialog visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to the `data-theme` attribute on `<html>`.
    #[must_use]
    pub fn attribute_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Label for a toggle control, which names the scheme it switches *to*.
    #[must_use]
    pub fn toggle_label(self, placement: TogglePlacement) -> &'static str {
        match (placement, self) {
            (TogglePlacement::Hero, Self::Dark) => "Switch to light",
            (TogglePlacement::Hero, Self::Light) => "Switch to dark",
            (TogglePlacement::Footer, Self::Dark) => "Light mode",
            (TogglePlacement::Footer, Self::Light) => "Dark mode",
        }
    }
}

/// Where a theme toggle is rendered; only affects its wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TogglePlacement {
    Hero,
    Footer,
}

/// Every control that opens the booking dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingTrigger {
    NavButton,
    NavCompact,
    HeroCta,
    ProgramMatch,
    /// "Choose <plan>" on the pricing card at this index.
    PricingCard(usize),
    QuoteRequest,
    QuickLink,
    Footer,
}

/// Whether a booking submission started in `started` still owns the dialog
/// on screen in `current`.
#[must_use]
pub fn is_same_booking_session(started: Option<u32>, current: Option<u32>) -> bool {
    started.is_some() && started == current
}

/// Session-local UI flags. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dialog: DialogState,
    pub theme: Theme,
    /// Control that most recently opened the dialog.
    pub booking_source: Option<BookingTrigger>,
    /// Bumped each time the dialog goes from closed to open.
    pub booking_session: u32,
}

impl UiState {
    #[must_use]
    pub fn booking_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Open the booking dialog. Returns `true` if it was closed before.
    pub fn open_booking(&mut self, trigger: BookingTrigger) -> bool {
        let was_closed = !self.dialog.is_open();
        if was_closed {
            self.booking_session = self.booking_session.wrapping_add(1);
        }
        self.dialog = DialogState::Open;
        self.booking_source = Some(trigger);
        was_closed
    }

    /// Session id of the dialog currently on screen, `None` while closed.
    ///
    /// A submission started in one session must not close or acknowledge a
    /// dialog reopened later.
    #[must_use]
    pub fn active_booking_session(&self) -> Option<u32> {
        self.booking_open().then_some(self.booking_session)
    }

    /// Apply an `on_open_change` request from the dialog.
    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog = DialogState::from_open(open);
    }

    /// Plan the visitor picked, when the dialog was opened from a pricing card.
    #[must_use]
    pub fn booking_plan(&self) -> Option<&'static PricingPlan> {
        match self.booking_source {
            Some(BookingTrigger::PricingCard(idx)) => PRICING_PLANS.get(idx),
            _ => None,
        }
    }

    /// Flip the theme and return the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Class list for the page root. `dark` cascades the dark scheme to every
    /// descendant through the stylesheet.
    #[must_use]
    pub fn root_class(&self) -> &'static str {
        if self.theme.is_dark() { "site dark" } else { "site" }
    }
}
