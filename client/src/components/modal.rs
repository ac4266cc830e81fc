//! Dialog shell shared by the booking and overview dialogs.
//!
//! Dismissal: the close button, a click on the backdrop, or Escape all call
//! `on_close`. The panel takes keyboard focus when it mounts so Escape works
//! without the visitor clicking into it first. Clicks inside the panel do not
//! reach the backdrop.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

/// Keys that dismiss an open dialog.
fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

fn title_id(id: &str) -> String {
    format!("{id}-title")
}

fn description_id(id: &str) -> String {
    format!("{id}-description")
}

#[component]
pub fn Modal(
    /// Unique per dialog; prefixes the title and description element ids.
    id: &'static str,
    title: &'static str,
    description: &'static str,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(panel) = panel_ref.get() {
            let _ = panel.focus();
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let panel_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <div class="modal__backdrop" on:click=on_backdrop>
            <div
                node_ref=panel_ref
                id=id
                class=panel_class
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id(id)
                aria-describedby=description_id(id)
                tabindex="-1"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="modal__header">
                    <h2 id=title_id(id) class="modal__title">{title}</h2>
                    <button type="button" class="modal__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <p id=description_id(id) class="modal__description">{description}</p>
                {children()}
            </div>
        </div>
    }
}
