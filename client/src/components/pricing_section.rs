//! Pricing section. The plan flagged `popular` gets the ring and the
//! "Most popular" badge; every "Choose" button opens the booking dialog.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::section_heading::SectionHeading;
use crate::content::anchors::Anchor;
use crate::content::catalog::{Icon, PRICING_PLANS, PricingPlan};
use crate::state::ui::BookingTrigger;

#[component]
pub fn PricingSection(on_book: Callback<BookingTrigger>) -> impl IntoView {
    view! {
        <section id=Anchor::Pricing.id() class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Pricing"
                    title="Simple packages: pick your level of support"
                    desc="Monthly coaching with no long-term contracts. Upgrade or downgrade any time."
                />

                <div class="grid grid--3">
                    {PRICING_PLANS
                        .iter()
                        .enumerate()
                        .map(|(idx, plan)| view! { <PricingCard plan=plan index=idx on_book=on_book/> })
                        .collect_view()}
                </div>

                <div class="banner">
                    <div>
                        <div class="banner__title">"Want in-person sessions?"</div>
                        <div>"In-person pricing depends on session frequency and location."</div>
                    </div>
                    <button
                        type="button"
                        class="btn btn--outline"
                        on:click=move |_| on_book.run(BookingTrigger::QuoteRequest)
                    >
                        "Get a quote"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: &'static PricingPlan, index: usize, on_book: Callback<BookingTrigger>) -> impl IntoView {
    let card_class = if plan.popular { "card card--popular" } else { "card" };
    let cta_class = if plan.popular { "btn btn--block" } else { "btn btn--block btn--outline" };

    view! {
        <article class=card_class>
            <div class="card__header">
                <div class="pricing__title-row">
                    <h3 class="card__title">{plan.name}</h3>
                    {plan.badge().map(|badge| view! { <span class="badge">{badge}</span> })}
                </div>
                <div class="pricing__price">
                    <span class="pricing__amount">{plan.price}</span>
                    <span class="pricing__cadence">{plan.cadence}</span>
                </div>
                <p class="card__subtitle">{plan.note}</p>
            </div>
            <div class="card__body">
                <ul class="bullet-list">
                    {plan
                        .features
                        .iter()
                        .map(|feature| view! {
                            <li class="bullet-list__item"><IconGlyph icon=Icon::Check/>{*feature}</li>
                        })
                        .collect_view()}
                </ul>
                <button
                    type="button"
                    class=cta_class
                    on:click=move |_| on_book.run(BookingTrigger::PricingCard(index))
                >
                    {plan.cta_label()}
                    <IconGlyph icon=Icon::ArrowRight class="btn__icon-trailing"/>
                </button>
            </div>
        </article>
    }
}
