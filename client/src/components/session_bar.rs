//! Header bar for authenticated pages: who is signed in, page links and
//! logout.
//!
//! ERROR HANDLING
//! ==============
//! Logout clears the local session even when the backend call fails; the
//! token is dropped either way and the unauthenticated redirect takes over.

use leptos::prelude::*;

use crate::app::AppController;
use crate::state::session::SessionState;

#[component]
pub fn SessionBar(title: &'static str) -> impl IntoView {
    let controller = expect_context::<AppController>();
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            if let Some(current) = session.get_untracked().current().cloned() {
                if let Err(e) = controller.logout(&current).await {
                    log::warn!("logout request failed: {e}");
                }
            }
            session.update(SessionState::clear);
        });
    };

    view! {
        <header class="session-bar toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="session-bar__nav">
                <a href="/">"Leaderboard"</a>
                <a href="/laps">"My laps"</a>
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{move || session.with(SessionState::display_name)}</span>
            <button class="btn toolbar__logout" type="button" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
