//! Ghost button that flips the page theme.

use leptos::prelude::*;

use crate::state::ui::{Theme, TogglePlacement};

#[component]
pub fn ThemeToggle(theme: Signal<Theme>, placement: TogglePlacement, on_toggle: Callback<()>) -> impl IntoView {
    let class = match placement {
        TogglePlacement::Hero => "btn btn--ghost",
        TogglePlacement::Footer => "btn btn--ghost btn--sm",
    };
    view! {
        <button
            type="button"
            class=class
            on:click=move |_| on_toggle.run(())
        >
            {move || theme.get().toggle_label(placement)}
        </button>
    }
}
