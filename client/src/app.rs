//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::controller::ClientController;
use crate::net::transport::GlooTransport;
use crate::pages::{dashboard::DashboardPage, laps::LapsPage, login::LoginPage};
use crate::state::{reference::ReferenceState, session::SessionState, ui::UiState};

/// Controller type shared through context by every page.
pub type AppController = ClientController<GlooTransport>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the controller and all shared state contexts and sets up
/// client-side routing. Page-local lists (records, laps) live in their pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let controller = AppController::new(GlooTransport::new(config.api_base.clone()), config.credential_policy);

    provide_context(config);
    provide_context(controller);
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ReferenceState::default()));

    view! {
        <Title text="Lap Tracker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("laps") view=LapsPage/>
            </Routes>
        </Router>
    }
}
