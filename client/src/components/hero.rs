//! Hero header: positioning copy, primary CTAs, stats, theme toggle, and the
//! 14-day kickoff card.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::overview_dialog::OverviewDialog;
use crate::components::pill::Pill;
use crate::components::stat::Stat;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::anchors::Anchor;
use crate::content::brand::BrandConfig;
use crate::content::catalog::{HERO_STATS, Icon, KICKOFF_STEPS};
use crate::state::ui::{BookingTrigger, Theme, TogglePlacement};
use crate::util::scroll::scroll_to;

#[component]
pub fn Hero(
    brand: BrandConfig,
    theme: Signal<Theme>,
    on_book: Callback<BookingTrigger>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let intro = format!(
        "{} Whether you want fat loss, strength, or performance, you’ll get a structured plan, real coaching, and a culture that keeps you consistent.",
        brand.tagline
    );

    view! {
        <header class="hero">
            <div class="hero__dots" aria-hidden="true"></div>
            <div class="container hero__grid">
                <div class="hero__copy">
                    <div class="hero__pills">
                        <Pill><IconGlyph icon=Icon::MapPin class="pill__icon"/>{brand.city}</Pill>
                        <Pill><IconGlyph icon=Icon::ShieldCheck class="pill__icon"/>"Evidence-based training"</Pill>
                        <Pill><IconGlyph icon=Icon::Users class="pill__icon"/>"Community-first"</Pill>
                    </div>

                    <h1 class="hero__title">
                        "Train with a coach who builds more than muscles: "
                        <span class="hero__title-accent">"builds you."</span>
                    </h1>
                    <p class="hero__intro">{intro}</p>

                    <div class="hero__ctas">
                        <button type="button" class="btn btn--lg" on:click=move |_| on_book.run(BookingTrigger::HeroCta)>
                            "Book a free call"
                            <IconGlyph icon=Icon::ArrowRight class="btn__icon-trailing"/>
                        </button>
                        <button
                            type="button"
                            class="btn btn--lg btn--outline"
                            on:click=move |_| {
                                scroll_to(Anchor::Services);
                            }
                        >
                            "View programs"
                            <IconGlyph icon=Icon::ChevronDown class="btn__icon-trailing"/>
                        </button>
                    </div>

                    <div class="hero__stats">
                        {HERO_STATS.iter().map(|stat| view! { <Stat stat=stat/> }).collect_view()}
                    </div>

                    <div class="hero__theme">
                        <ThemeToggle theme=theme placement=TogglePlacement::Hero on_toggle=on_toggle_theme/>
                    </div>
                </div>

                <div class="card card--feature hero__kickoff">
                    <div class="card__header">
                        <h3 class="card__title card__title--xl">"Your 14-day kickoff"</h3>
                        <p class="card__subtitle">"A simple, structured start that creates momentum."</p>
                    </div>
                    <div class="card__body">
                        <div class="checklist">
                            {KICKOFF_STEPS
                                .iter()
                                .map(|step| view! {
                                    <div class="checklist__item checklist__item--boxed">
                                        <span class="checklist__mark"><IconGlyph icon=Icon::Check/></span>
                                        <span>{*step}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <OverviewDialog/>
                        <div class="callout">
                            <strong>"No guesswork."</strong>
                            " You’ll know what to do each week, why you’re doing it, and how to progress."
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}
