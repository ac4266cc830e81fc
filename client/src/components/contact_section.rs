//! Contact section: message form, quick links, and location.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::icon::IconGlyph;
use crate::components::section_heading::SectionHeading;
use crate::content::anchors::Anchor;
use crate::content::brand::BrandConfig;
use crate::content::catalog::Icon;
use crate::state::ui::BookingTrigger;

#[component]
pub fn ContactSection(brand: BrandConfig, on_book: Callback<BookingTrigger>) -> impl IntoView {
    view! {
        <section id=Anchor::Contact.id() class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Contact"
                    title="Let’s get you started"
                    desc="Send a message, or book a free call. We’ll map the simplest plan to your goal."
                />

                <div class="grid grid--2 contact__grid">
                    <article class="card">
                        <div class="card__header">
                            <h3 class="card__title">"Message"</h3>
                            <p class="card__subtitle">"Tell us where you are and where you want to be."</p>
                        </div>
                        <div class="card__body">
                            <ContactForm/>
                        </div>
                    </article>

                    <div class="stack">
                        <QuickLinks brand=brand on_book=on_book/>
                        <article class="card">
                            <div class="card__header">
                                <h3 class="card__title">"Location"</h3>
                                <p class="card__subtitle">"In-person sessions and online coaching."</p>
                            </div>
                            <div class="card__body">
                                <div class="location">
                                    <IconGlyph icon=Icon::MapPin/>
                                    <div>
                                        <div class="location__city">{brand.city}</div>
                                        <div class="location__note">"Exact studio address shared when you book."</div>
                                    </div>
                                </div>
                            </div>
                        </article>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuickLinks(brand: BrandConfig, on_book: Callback<BookingTrigger>) -> impl IntoView {
    view! {
        <article class="card">
            <div class="card__header">
                <h3 class="card__title">"Quick links"</h3>
            </div>
            <div class="card__body quick-links">
                <a class="quick-link" href=brand.mailto_href()>
                    <IconGlyph icon=Icon::Mail/>
                    {brand.email}
                </a>
                <a class="quick-link" href=brand.tel_href()>
                    <IconGlyph icon=Icon::Phone/>
                    {brand.phone}
                </a>
                <a
                    class="quick-link"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_book.run(BookingTrigger::QuickLink);
                    }
                >
                    <IconGlyph icon=Icon::Calendar/>
                    "Book a free call"
                    <IconGlyph icon=Icon::ArrowRight class="quick-link__arrow"/>
                </a>
                <a class="quick-link" href=brand.instagram_url() target="_blank" rel="noreferrer">
                    <IconGlyph icon=Icon::Instagram/>
                    {brand.instagram_handle()}
                    <IconGlyph icon=Icon::ArrowRight class="quick-link__arrow"/>
                </a>
            </div>
        </article>
    }
}
