//! Smooth in-page scrolling to section anchors.
//!
//! Missing targets are a silent no-op: nothing is thrown and no state
//! changes, matching a native fragment link that points nowhere.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::content::anchors::Anchor;

/// Look `id` up with `find` and hand the element to `scroll` once if found.
///
/// Returns `true` when a target was found and scrolled to.
fn scroll_with<E>(id: &str, find: impl Fn(&str) -> Option<E>, scroll: impl Fn(&E)) -> bool {
    match find(id) {
        Some(el) => {
            scroll(&el);
            true
        }
        None => false,
    }
}

/// Smooth-scroll the element with `id` into view.
///
/// Returns `true` when a target was found and scrolled to.
pub fn scroll_to_id(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let found = scroll_with(
            id,
            |id| web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)),
            |el| {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            },
        );
        if !found {
            log::debug!("scroll target #{id} not found");
        }
        found
    }
    #[cfg(not(feature = "hydrate"))]
    {
        scroll_with(id, |_| None::<()>, |_: &()| {})
    }
}

pub fn scroll_to(anchor: Anchor) -> bool {
    scroll_to_id(anchor.id())
}

/// Click handler body for `<a href="#...">` links: suppress the native jump
/// and scroll smoothly instead.
pub fn follow_anchor(ev: &leptos::ev::MouseEvent, anchor: Anchor) {
    ev.prevent_default();
    scroll_to(anchor);
}
