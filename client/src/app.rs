//! Root application component and SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::BRAND;
use crate::net::lead_sink::LeadSinkHandle;
use crate::pages::landing::LandingPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
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
/// Provides the lead sink used by the landing page. Swap the handle here to
/// forward leads somewhere other than the diagnostic log.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(LeadSinkHandle::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/adfunnel.css"/>
        <Title text=BRAND/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
