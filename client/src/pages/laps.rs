//! Personal lap-time page: create, edit and delete single laps.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page re-reads `/api/user` to confirm the token is still
//! accepted, then loads the lap list. Every successful mutation reloads the
//! whole list; nothing is patched locally.
//!
//! ERROR HANDLING
//! ==============
//! A rejected identity refresh drops the session, which hands control to the
//! unauthenticated redirect. Mutation failures surface in the notice banner
//! and leave the form untouched so the user can retry.

#[cfg(test)]
#[path = "laps_test.rs"]
mod laps_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::components::lap_form::LapFormPanel;
use crate::components::lap_list::LapList;
use crate::components::notice_banner::NoticeBanner;
use crate::components::session_bar::SessionBar;
use crate::controller::{
    DELETE_CONFIRM_PROMPT, DeleteOutcome, LAP_DELETE_FAILED, LAP_LOAD_FAILED, LAP_SAVE_FAILED, LIST_LOAD_FAILED,
};
use crate::state::laps::{EditMode, LapForm, LapsState};
use crate::state::session::SessionState;
use crate::state::ui::{Notice, UiState};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser;

/// True when the form is editing the lap that was just deleted.
fn editing_deleted(form: &LapForm, deleted: i64) -> bool {
    form.mode() == EditMode::Update(deleted)
}

#[component]
pub fn LapsPage() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let laps = RwSignal::new(LapsState::default());
    let form = RwSignal::new(LapForm::default());

    install_unauth_redirect(session, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        if session.with_untracked(SessionState::is_authenticated) {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                if refresh_identity(&controller, session).await {
                    reload_laps(controller, session, laps).await;
                }
            });
        }
    }

    let submit_controller = controller.clone();
    let on_submit = Callback::new(move |contents: LapForm| {
        let controller = submit_controller.clone();
        leptos::task::spawn_local(async move {
            let state = session.get_untracked();
            match controller.save_lap(state.current(), &contents).await {
                Ok(()) => {
                    form.update(LapForm::reset);
                    ui.update(UiState::dismiss);
                    reload_laps(controller, session, laps).await;
                }
                Err(e) => ui.update(|u| u.show(Notice::error(e.user_message(LAP_SAVE_FAILED)))),
            }
        });
    });

    let edit_controller = controller.clone();
    let on_edit = Callback::new(move |id: i64| {
        let controller = edit_controller.clone();
        leptos::task::spawn_local(async move {
            let state = session.get_untracked();
            match controller.fetch_lap(state.current(), id).await {
                Ok(lap) => form.set(LapForm::from_lap(&lap)),
                Err(e) => ui.update(|u| u.show(Notice::error(e.user_message(LAP_LOAD_FAILED)))),
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            let state = session.get_untracked();
            match controller.delete_lap(state.current(), id, || browser::confirm(DELETE_CONFIRM_PROMPT)).await {
                Ok(DeleteOutcome::Deleted) => {
                    if form.with_untracked(|f| editing_deleted(f, id)) {
                        form.update(LapForm::reset);
                    }
                    reload_laps(controller, session, laps).await;
                }
                Ok(DeleteOutcome::Cancelled) => {}
                Err(e) => ui.update(|u| u.show(Notice::error(e.user_message(LAP_DELETE_FAILED)))),
            }
        });
    });

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=|| view! { <div class="laps-page"><p>"Redirecting to login..."</p></div> }
        >
            <div class="laps-page">
                <SessionBar title="My laps"/>
                <NoticeBanner/>
                <main class="laps-page__body">
                    <LapFormPanel form=form on_submit=on_submit/>
                    <LapList laps=laps on_edit=on_edit on_delete=on_delete/>
                </main>
            </div>
        </Show>
    }
}

/// Re-read the signed-in user. Returns false (and ends the session) when the
/// backend no longer accepts the token.
#[cfg(feature = "hydrate")]
async fn refresh_identity(controller: &AppController, session: RwSignal<SessionState>) -> bool {
    let Some(current) = session.get_untracked().current().cloned() else {
        return false;
    };
    match controller.current_user(&current).await {
        Ok(user) => {
            session.update(|s| s.refresh_user(user));
            true
        }
        Err(e) => {
            log::warn!("identity refresh failed: {e}");
            session.update(SessionState::clear);
            false
        }
    }
}

async fn reload_laps(controller: AppController, session: RwSignal<SessionState>, laps: RwSignal<LapsState>) {
    laps.update(LapsState::begin_load);
    let state = session.get_untracked();
    match controller.load_laps(state.current()).await {
        Ok(items) => laps.update(|l| l.replace(items)),
        Err(e) => laps.update(|l| l.fail(e.user_message(LIST_LOAD_FAILED))),
    }
}
