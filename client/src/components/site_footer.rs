//! Page footer with copyright, booking button, and theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::brand::BrandConfig;
use crate::state::ui::{BookingTrigger, Theme, TogglePlacement};
use crate::util::copyright::{copyright_line, current_year};

#[component]
pub fn SiteFooter(
    brand: BrandConfig,
    theme: Signal<Theme>,
    on_book: Callback<BookingTrigger>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <div>
                    <div class="footer__name">{brand.name}</div>
                    <div>{copyright_line(current_year())}</div>
                </div>
                <div class="footer__actions">
                    <button
                        type="button"
                        class="btn btn--outline btn--sm"
                        on:click=move |_| on_book.run(BookingTrigger::Footer)
                    >
                        "Book a call"
                    </button>
                    <ThemeToggle theme=theme placement=TogglePlacement::Footer on_toggle=on_toggle_theme/>
                </div>
            </div>
        </footer>
    }
}
