//! Mirror the page theme onto the `<html>` element.
//!
//! The page root already switches its `dark` class reactively; the
//! `data-theme` attribute on `<html>` drives `color-scheme` and the document
//! background in the stylesheet, so overscroll areas, scrollbars, and native
//! form controls follow the same scheme. Nothing is written to storage: the
//! theme resets to dark on every load.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.attribute_value());
                log::debug!("theme applied: {}", theme.attribute_value());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
