//! Login page with separate sign-in and registration forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry route for unauthenticated users. A successful login stores the
//! bearer session and moves to the leaderboard; a successful registration
//! switches back to the login tab (or follows a server-provided redirect).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::components::notice_banner::NoticeBanner;
use crate::config::ClientConfig;
use crate::controller::{LOGIN_FAILED, REGISTER_FAILED};
use crate::state::session::SessionState;
use crate::state::ui::{AuthTab, Notice, UiState};
use crate::util::browser;
use crate::util::validation::optional_username;

/// Contents of the login/register inputs, shared by both tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AuthFields {
    email: String,
    password: String,
    username: String,
}

impl AuthFields {
    /// A successful login keeps the email for the next visit to the page.
    fn clear_secret(&mut self) {
        self.password.clear();
    }

    /// A successful registration resets the whole form.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn tab_class(active: AuthTab, tab: AuthTab) -> &'static str {
    if active == tab { "login-tab login-tab--active" } else { "login-tab" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let email_placeholder = expect_context::<ClientConfig>().credential_policy.email_placeholder();
    let navigate = use_navigate();

    let fields = RwSignal::new(AuthFields::default());

    // Leave as soon as a session exists, whether from this form or earlier.
    Effect::new(move || {
        if session.with(SessionState::is_authenticated) {
            navigate("/", NavigateOptions::default());
        }
    });

    let login_controller = controller.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = login_controller.clone();
        let current = fields.get_untracked();
        leptos::task::spawn_local(async move {
            match controller.login(&current.email, &current.password).await {
                Ok(started) => {
                    log::info!("logged in as {}", started.user.display_name());
                    session.update(|s| s.begin(started));
                    ui.update(UiState::dismiss);
                    fields.update(AuthFields::clear_secret);
                }
                Err(e) => ui.update(|u| u.show(Notice::error(e.user_message(LOGIN_FAILED)))),
            }
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        let current = fields.get_untracked();
        let username = optional_username(&current.username);
        leptos::task::spawn_local(async move {
            match controller.register(&current.email, &current.password, username).await {
                Ok(outcome) => {
                    fields.update(AuthFields::reset);
                    ui.update(|u| {
                        u.select_tab(AuthTab::Login);
                        u.show(Notice::info(outcome.message));
                    });
                    if let Some(target) = outcome.redirect {
                        browser::redirect(&target);
                    }
                }
                Err(e) => ui.update(|u| u.show(Notice::error(e.user_message(REGISTER_FAILED)))),
            }
        });
    };

    let active_tab = move || ui.with(|u| u.auth_tab);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lap Tracker"</h1>
                <div class="login-tabs" role="tablist">
                    <button
                        class=move || tab_class(active_tab(), AuthTab::Login)
                        type="button"
                        on:click=move |_| ui.update(|u| u.select_tab(AuthTab::Login))
                    >
                        "Login"
                    </button>
                    <button
                        class=move || tab_class(active_tab(), AuthTab::Register)
                        type="button"
                        on:click=move |_| ui.update(|u| u.select_tab(AuthTab::Register))
                    >
                        "Register"
                    </button>
                </div>
                <NoticeBanner/>
                <Show
                    when=move || active_tab() == AuthTab::Login
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_register.clone()>
                                <CredentialInputs fields=fields placeholder=email_placeholder/>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Display name (optional)"
                                    prop:value=move || fields.with(|f| f.username.clone())
                                    on:input=move |ev| fields.update(|f| f.username = event_target_value(&ev))
                                />
                                <button class="login-button" type="submit">
                                    "Register"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_login.clone()>
                        <CredentialInputs fields=fields placeholder=email_placeholder/>
                        <button class="login-button" type="submit">
                            "Login"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn CredentialInputs(fields: RwSignal<AuthFields>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            class="login-input"
            type="email"
            placeholder=placeholder
            autocomplete="username"
            prop:value=move || fields.with(|f| f.email.clone())
            on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
        />
        <input
            class="login-input"
            type="password"
            placeholder="Password"
            autocomplete="current-password"
            prop:value=move || fields.with(|f| f.password.clone())
            on:input=move |ev| fields.update(|f| f.password = event_target_value(&ev))
        />
    }
}
