//! Results section: testimonials, outcomes, and the coach's promise.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::section_heading::SectionHeading;
use crate::content::anchors::Anchor;
use crate::content::catalog::{Icon, OUTCOMES, PROMISES, TESTIMONIALS, Testimonial};

#[component]
pub fn ResultsSection() -> impl IntoView {
    view! {
        <section id=Anchor::Results.id() class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Results"
                    title="Real coaching that keeps you consistent"
                    desc="Technique, structure, and a culture that makes showing up easier than skipping."
                />

                <div class="grid grid--3">
                    {TESTIMONIALS.iter().map(|t| view! { <TestimonialCard testimonial=t/> }).collect_view()}
                </div>

                <div class="grid grid--2 section__follow">
                    <article class="card">
                        <div class="card__header">
                            <h3 class="card__title">"What you’ll build"</h3>
                            <p class="card__subtitle">"Not a temporary push: skills and systems you keep."</p>
                        </div>
                        <div class="card__body checklist">
                            {OUTCOMES
                                .iter()
                                .map(|outcome| view! {
                                    <div class="checklist__item">
                                        <span class="checklist__mark"><IconGlyph icon=Icon::Check/></span>
                                        <span>{*outcome}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </article>

                    <article class="card">
                        <div class="card__header">
                            <h3 class="card__title">"Coach’s promise"</h3>
                            <p class="card__subtitle">"Clear plan, honest coaching, and respect."</p>
                        </div>
                        <div class="card__body bullet-list">
                            {PROMISES
                                .iter()
                                .map(|promise| view! {
                                    <div class="bullet-list__item bullet-list__item--top">
                                        <IconGlyph icon=Icon::Check/>
                                        <span>{*promise}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </article>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <article class="card">
            <div class="card__header testimonial__header">
                <div>
                    <h3 class="card__title card__title--sm">{testimonial.name}</h3>
                    <p class="card__subtitle">{testimonial.role}</p>
                </div>
                <div class="testimonial__stars" role="img" aria-label=testimonial.rating_label()>
                    {(0..testimonial.filled_stars())
                        .map(|_| view! { <IconGlyph icon=Icon::Star class="icon--filled"/> })
                        .collect_view()}
                </div>
            </div>
            <p class="card__body testimonial__quote">"“" {testimonial.quote} "”"</p>
        </article>
    }
}
