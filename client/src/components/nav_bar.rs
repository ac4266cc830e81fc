//! Sticky top navigation with anchor links and booking buttons.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::anchors::{Anchor, NAV_LINKS};
use crate::content::brand::{BrandConfig, LOGO_PATH};
use crate::content::catalog::Icon;
use crate::state::ui::BookingTrigger;
use crate::util::scroll::follow_anchor;

#[component]
pub fn NavBar(brand: BrandConfig, on_book: Callback<BookingTrigger>) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href=Anchor::Top.href() class="nav__brand" on:click=move |ev| follow_anchor(&ev, Anchor::Top)>
                    <img src=LOGO_PATH alt=brand.logo_alt() class="nav__logo"/>
                    <div class="nav__brand-text">
                        <div class="nav__name">{brand.name}</div>
                        <div class="nav__sub">"Personal Training"</div>
                    </div>
                </a>

                <div class="nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let anchor = link.anchor;
                            view! {
                                <a href=anchor.href() class="nav__link" on:click=move |ev| follow_anchor(&ev, anchor)>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav__actions">
                    <button
                        type="button"
                        class="btn btn--outline nav__book"
                        on:click=move |_| on_book.run(BookingTrigger::NavButton)
                    >
                        <IconGlyph icon=Icon::Calendar class="btn__icon-leading"/>
                        "Book a call"
                    </button>
                    <button
                        type="button"
                        class="btn nav__book-compact"
                        on:click=move |_| on_book.run(BookingTrigger::NavCompact)
                    >
                        "Book"
                    </button>
                </div>
            </div>
        </nav>
    }
}
