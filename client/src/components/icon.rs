//! Decorative glyph rendered from the stylesheet's icon sprites.

use leptos::prelude::*;

use crate::content::catalog::Icon;

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let classes = if class.is_empty() {
        format!("icon icon--{}", icon.slug())
    } else {
        format!("icon icon--{} {class}", icon.slug())
    };
    view! { <span class=classes aria-hidden="true"></span> }
}
