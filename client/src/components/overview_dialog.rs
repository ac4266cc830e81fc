//! "Watch how it works" trigger and its video placeholder dialog.
//!
//! Unlike the booking dialog this one owns its own open flag: nothing else on
//! the page opens or observes it.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::modal::Modal;
use crate::content::catalog::Icon;

#[component]
pub fn OverviewDialog() -> impl IntoView {
    let open = RwSignal::new(false);
    let on_close = Callback::new(move |()| open.set(false));

    view! {
        <button type="button" class="btn btn--outline btn--rounded" on:click=move |_| open.set(true)>
            <IconGlyph icon=Icon::Play class="btn__icon-leading"/>
            "Watch how it works"
        </button>
        <Show when=move || open.get()>
            <Modal
                id="overview-dialog"
                title="Quick overview"
                description="A short walkthrough of how coaching works, from assessment to your first progress check."
                on_close=on_close
                wide=true
            >
                <div class="video-placeholder"></div>
            </Modal>
        </Show>
    }
}
