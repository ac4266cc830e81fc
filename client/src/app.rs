//! Root application component with meta tags, routing, and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::brand::BrandConfig;
use crate::net::intake::IntakeClient;
use crate::pages::landing::LandingPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the brand profile and form intake to the tree and routes `/` to
/// the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let brand = BrandConfig::from_build_env();
    provide_context(brand);
    provide_context(IntakeClient::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/rbathletics.css"/>
        <Title text=format!("{} | Personal Training", brand.name)/>
        <Meta name="description" content=brand.tagline/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
