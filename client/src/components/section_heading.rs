//! Centered section heading with optional eyebrow pill and description.

use leptos::prelude::*;

use crate::components::pill::Pill;

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] eyebrow: Option<&'static str>,
    #[prop(optional)] desc: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            {eyebrow.map(|text| view! {
                <div class="section-heading__eyebrow">
                    <Pill>{text}</Pill>
                </div>
            })}
            <h2 class="section-heading__title">{title}</h2>
            {desc.map(|text| view! { <p class="section-heading__desc">{text}</p> })}
        </div>
    }
}
