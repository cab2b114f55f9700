//! Leaderboard page: record submission plus the ranked record table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it loads the three
//! reference lists concurrently and the record list; a saved record triggers
//! a fresh record load so the table always mirrors the backend.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::components::leaderboard::Leaderboard;
use crate::components::notice_banner::NoticeBanner;
use crate::components::record_form::RecordForm;
use crate::components::session_bar::SessionBar;
use crate::controller::LIST_LOAD_FAILED;
use crate::state::records::RecordsState;
#[cfg(feature = "hydrate")]
use crate::state::reference::ReferenceState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let session = expect_context::<RwSignal<SessionState>>();
    let records = RwSignal::new(RecordsState::default());

    install_unauth_redirect(session, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        if session.with_untracked(SessionState::is_authenticated) {
            let reference = expect_context::<RwSignal<ReferenceState>>();
            leptos::task::spawn_local(load_reference(controller.clone(), session, reference));
            leptos::task::spawn_local(reload_records(controller.clone(), session, records));
        }
    }

    let on_saved = Callback::new(move |()| {
        leptos::task::spawn_local(reload_records(controller.clone(), session, records));
    });

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=|| view! { <div class="dashboard-page"><p>"Redirecting to login..."</p></div> }
        >
            <div class="dashboard-page">
                <SessionBar title="Leaderboard"/>
                <NoticeBanner/>
                <main class="dashboard-page__body">
                    <RecordForm on_saved=on_saved/>
                    <Leaderboard records=records/>
                </main>
            </div>
        </Show>
    }
}

/// Replace the record list with the backend's current one.
async fn reload_records(controller: AppController, session: RwSignal<SessionState>, records: RwSignal<RecordsState>) {
    records.update(RecordsState::begin_load);
    let state = session.get_untracked();
    match controller.load_records(state.current()).await {
        Ok(items) => records.update(|r| r.replace(items)),
        Err(e) => records.update(|r| r.fail(e.user_message(LIST_LOAD_FAILED))),
    }
}

#[cfg(feature = "hydrate")]
async fn load_reference(controller: AppController, session: RwSignal<SessionState>, reference: RwSignal<ReferenceState>) {
    let state = session.get_untracked();
    controller
        .load_reference_data(state.current(), |kind, items| reference.update(|r| r.set(kind, items)))
        .await;
}
