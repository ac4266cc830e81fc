//! "Book a free strategy call" dialog.
//!
//! Controlled by the landing page: `open` is read-only here and every close
//! request goes through `on_open_change(false)`. The form body is mounted
//! fresh each time the dialog opens, so dismissing discards typed input.
//! A submission still in flight from an earlier opening neither acknowledges
//! nor closes the dialog once it has been dismissed or reopened.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::modal::Modal;
use crate::content::catalog::Icon;
use crate::net::intake::IntakeClient;
use crate::state::form::{BookingFields, FormStatus, deliver};
use crate::state::ui::is_same_booking_session;
use crate::util::notice;

#[component]
pub fn BookingDialog(
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    /// Plan name when the dialog was opened from a pricing card.
    plan: Signal<Option<&'static str>>,
    /// Session of the dialog on screen; `None` while closed.
    session: Signal<Option<u32>>,
) -> impl IntoView {
    let on_close = Callback::new(move |()| on_open_change.run(false));

    view! {
        <Show when=move || open.get()>
            <Modal
                id="booking-dialog"
                title="Book a free strategy call"
                description="Drop your details and we’ll reach out with next steps."
                on_close=on_close
            >
                {move || plan.get().map(|name| view! {
                    <p class="booking__plan">"Interested in: " <strong>{name}</strong></p>
                })}
                <BookingForm on_open_change=on_open_change session=session/>
            </Modal>
        </Show>
    }
}

#[component]
fn BookingForm(on_open_change: Callback<bool>, session: Signal<Option<u32>>) -> impl IntoView {
    let intake = use_context::<IntakeClient>().unwrap_or_default();
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let goal = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_pending() {
            return;
        }
        let fields = BookingFields {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            goal: goal.get_untracked(),
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
        let started = session.get_untracked();
        leptos::task::spawn_local(async move {
            let next = deliver(&intake, &payload).await;
            if !is_same_booking_session(started, session.get_untracked()) {
                #[cfg(feature = "hydrate")]
                log::debug!("dropping booking outcome from a dismissed dialog");
                return;
            }
            if let FormStatus::Sent(ack) = &next {
                notice::acknowledge(&ack.message);
            }
            let close = next.closes_dialog();
            status.set(next);
            if close {
                on_open_change.run(false);
            }
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__row">
                <div class="field">
                    <label class="field__label" for="booking-name">"Name"</label>
                    <input
                        id="booking-name"
                        class="field__input"
                        type="text"
                        placeholder="Your name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label class="field__label" for="booking-phone">"Phone"</label>
                    <input
                        id="booking-phone"
                        class="field__input"
                        type="tel"
                        placeholder="(###) ###-####"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="field">
                <label class="field__label" for="booking-email">"Email"</label>
                <input
                    id="booking-email"
                    class="field__input"
                    type="email"
                    placeholder="you@email.com"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label class="field__label" for="booking-goal">"Goal"</label>
                <textarea
                    id="booking-goal"
                    class="field__input field__input--area"
                    placeholder="Fat loss, muscle, performance, confidence… tell me what you’re aiming for."
                    required
                    prop:value=move || goal.get()
                    on:input=move |ev| goal.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button class="btn form__submit" type="submit" disabled=move || status.get().is_pending()>
                "Submit"
                <IconGlyph icon=Icon::ArrowRight class="btn__icon-trailing"/>
            </button>
            <FormStatusLine status=status/>
            <p class="form__fineprint">"By submitting, you agree to be contacted about coaching."</p>
        </form>
    }
}

/// Inline status under a form's submit button.
#[component]
pub fn FormStatusLine(status: RwSignal<FormStatus>) -> impl IntoView {
    move || {
        let current = status.get();
        current.message().map(|text| {
            let class = if current.is_error() { "form__status form__status--error" } else { "form__status" };
            view! { <p class=class role="status">{text}</p> }
        })
    }
}
