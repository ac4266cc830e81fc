//! Rounded label badge.

use leptos::prelude::*;

#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! { <span class="pill">{children()}</span> }
}
