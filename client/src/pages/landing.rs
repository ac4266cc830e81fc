//! Single-page landing site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the only copy of [`UiState`]. Sections get read-only signals
//! for the dialog and theme flags plus callbacks that request transitions,
//! and render in a fixed order under one root whose `dark` class drives the
//! color scheme.

use leptos::prelude::*;

use crate::components::booking_dialog::BookingDialog;
use crate::components::contact_section::ContactSection;
use crate::components::faq_accordion::FaqSection;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::pricing_section::PricingSection;
use crate::components::results_section::ResultsSection;
use crate::components::services_section::ServicesSection;
use crate::components::site_footer::SiteFooter;
use crate::content::anchors::Anchor;
use crate::content::brand::BrandConfig;
use crate::state::ui::{BookingTrigger, UiState};
use crate::util::dark_mode;

#[component]
pub fn LandingPage() -> impl IntoView {
    let brand = use_context::<BrandConfig>().unwrap_or_default();
    let ui = RwSignal::new(UiState::default());

    let dialog_open = Signal::derive(move || ui.with(UiState::booking_open));
    let theme = Signal::derive(move || ui.with(|s| s.theme));
    let booking_plan = Signal::derive(move || ui.with(|s| s.booking_plan().map(|p| p.name)));
    let booking_session = Signal::derive(move || ui.with(UiState::active_booking_session));

    let on_book = Callback::new(move |trigger: BookingTrigger| {
        ui.update(|s| {
            if s.open_booking(trigger) {
                #[cfg(feature = "hydrate")]
                log::debug!("booking dialog opened via {trigger:?}");
            }
        });
    });
    let on_dialog_change = Callback::new(move |open: bool| ui.update(|s| s.set_dialog_open(open)));
    let on_toggle_theme = Callback::new(move |()| {
        ui.update(|s| {
            s.toggle_theme();
        });
    });

    // Keep <html data-theme> in step with the root class (browser only).
    Effect::new(move || dark_mode::apply(theme.get()));

    view! {
        <div class=move || ui.with(UiState::root_class)>
            <div class="page">
                <div id=Anchor::Top.id()></div>
                <NavBar brand=brand on_book=on_book/>
                <BookingDialog open=dialog_open on_open_change=on_dialog_change plan=booking_plan session=booking_session/>
                <Hero brand=brand theme=theme on_book=on_book on_toggle_theme=on_toggle_theme/>
                <ServicesSection on_book=on_book/>
                <ResultsSection/>
                <PricingSection on_book=on_book/>
                <FaqSection brand=brand/>
                <ContactSection brand=brand on_book=on_book/>
                <SiteFooter brand=brand theme=theme on_book=on_book on_toggle_theme=on_toggle_theme/>
            </div>
        </div>
    }
}
