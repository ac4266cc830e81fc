//! FAQ section with a single-expansion, collapsible accordion.
//!
//! Expansion state is local to the accordion and has no effect outside it.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::section_heading::SectionHeading;
use crate::content::anchors::Anchor;
use crate::content::brand::BrandConfig;
use crate::content::catalog::{FAQS, Icon};
use crate::state::accordion::AccordionState;

#[component]
pub fn FaqSection(brand: BrandConfig) -> impl IntoView {
    view! {
        <section id=Anchor::Faq.id() class="section">
            <div class="container container--narrow">
                <SectionHeading
                    eyebrow="FAQ"
                    title="Answers, upfront"
                    desc="If you’ve got questions, you’re normal. Here are the big ones."
                />
                <FaqAccordion brand=brand/>
            </div>
        </section>
    }
}

fn trigger_id(idx: usize) -> String {
    format!("faq-trigger-{idx}")
}

fn panel_id(idx: usize) -> String {
    format!("faq-panel-{idx}")
}

#[component]
pub fn FaqAccordion(brand: BrandConfig) -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::default());

    view! {
        <div class="accordion">
            {FAQS
                .iter()
                .enumerate()
                .map(|(idx, entry)| {
                    let expanded = move || accordion.with(|s| s.is_open(idx));
                    let answer = entry.answer_for(&brand);
                    view! {
                        <div class=move || {
                            if expanded() { "accordion__item accordion__item--open" } else { "accordion__item" }
                        }>
                            <h3 class="accordion__heading">
                                <button
                                    type="button"
                                    id=trigger_id(idx)
                                    class="accordion__trigger"
                                    aria-controls=panel_id(idx)
                                    aria-expanded=move || expanded().to_string()
                                    on:click=move |_| accordion.update(|s| s.toggle(idx))
                                >
                                    <span>{entry.question}</span>
                                    <IconGlyph icon=Icon::ChevronDown class="accordion__chevron"/>
                                </button>
                            </h3>
                            <Show when=expanded>
                                <div
                                    id=panel_id(idx)
                                    class="accordion__content"
                                    role="region"
                                    aria-labelledby=trigger_id(idx)
                                >
                                    {answer.clone()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
