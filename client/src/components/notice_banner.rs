//! Dismissible banner for the latest user-facing message.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let banner = move || {
        ui.get().notice.map(|notice| {
            view! {
                <div class=notice.kind.css_class() role="status">
                    <span class="notice__text">{notice.text}</span>
                    <button
                        class="notice__close"
                        type="button"
                        aria-label="Dismiss"
                        on:click=move |_| ui.update(UiState::dismiss)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    };

    view! { {banner} }
}
