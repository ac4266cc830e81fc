//! Embedded contact form. Submissions are acknowledged inline and the fields
//! keep their values afterwards.

use leptos::prelude::*;

use crate::components::booking_dialog::FormStatusLine;
use crate::components::icon::IconGlyph;
use crate::content::catalog::Icon;
use crate::net::intake::IntakeClient;
use crate::state::form::{ContactFields, FormStatus, deliver};
use crate::util::notice;

#[component]
pub fn ContactForm() -> impl IntoView {
    let intake = use_context::<IntakeClient>().unwrap_or_default();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_pending() {
            return;
        }
        let fields = ContactFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let payload = match fields.validate() {
            Ok(payload) => payload,
            Err(e) => {
                status.set(FormStatus::Invalid(e));
                return;
            }
        };
        status.set(FormStatus::Pending);
        let intake = intake.clone();
        leptos::task::spawn_local(async move {
            let next = deliver(&intake, &payload).await;
            if let FormStatus::Sent(ack) = &next {
                notice::acknowledge(&ack.message);
            }
            status.set(next);
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__row">
                <div class="field">
                    <label class="field__label" for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        class="field__input"
                        type="text"
                        placeholder="Your name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label class="field__label" for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        class="field__input"
                        type="email"
                        placeholder="you@email.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="field">
                <label class="field__label" for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    class="field__input field__input--area"
                    placeholder="Tell me your goal and current schedule."
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button class="btn form__submit" type="submit" disabled=move || status.get().is_pending()>
                "Send message"
                <IconGlyph icon=Icon::Mail class="btn__icon-trailing"/>
            </button>
            <FormStatusLine status=status/>
        </form>
    }
}
