//! Programs section: one card per service offering.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::section_heading::SectionHeading;
use crate::content::anchors::Anchor;
use crate::content::catalog::{Icon, SERVICES, ServiceOffering};
use crate::state::ui::BookingTrigger;
use crate::util::scroll::scroll_to;

#[component]
pub fn ServicesSection(on_book: Callback<BookingTrigger>) -> impl IntoView {
    view! {
        <section id=Anchor::Services.id() class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Programs"
                    title="Coaching options that fit your life"
                    desc="Choose the level of support you want, then we build the plan around your goals, schedule, and starting point."
                />

                <div class="grid grid--4">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=service/> }).collect_view()}
                </div>

                <div class="section__ctas">
                    <button type="button" class="btn btn--lg" on:click=move |_| on_book.run(BookingTrigger::ProgramMatch)>
                        "Get matched to a program"
                        <IconGlyph icon=Icon::ArrowRight class="btn__icon-trailing"/>
                    </button>
                    <button
                        type="button"
                        class="btn btn--lg btn--outline"
                        on:click=move |_| {
                            scroll_to(Anchor::Pricing);
                        }
                    >
                        "See pricing"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static ServiceOffering) -> impl IntoView {
    view! {
        <article class="card">
            <div class="card__header">
                <div class="card__badge-icon"><IconGlyph icon=service.icon/></div>
                <h3 class="card__title">{service.title}</h3>
                <p class="card__subtitle">{service.description}</p>
            </div>
            <ul class="card__body bullet-list">
                {service
                    .bullets
                    .iter()
                    .map(|bullet| view! {
                        <li class="bullet-list__item"><IconGlyph icon=Icon::Check/>{*bullet}</li>
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
