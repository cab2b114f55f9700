//! Record submission form: reference selects, numbered lap-time inputs and
//! a comment.
//!
//! DESIGN
//! ======
//! Lap inputs are rendered from the input count only, so typing into one
//! does not rebuild the list and steal focus. Submitting numbers the inputs
//! 1..N in display order.

use leptos::prelude::*;

use crate::app::AppController;
use crate::components::reference_select::ReferenceSelect;
use crate::controller::{RECORD_SAVE_FAILED, RECORD_SAVED};
use crate::state::records::{MAX_LAP_INPUTS, RecordDraft};
use crate::state::reference::{ReferenceKind, ReferenceState};
use crate::state::session::SessionState;
use crate::state::ui::{Notice, UiState};

#[component]
pub fn RecordForm(on_saved: Callback<()>) -> impl IntoView {
    let controller = expect_context::<AppController>();
    let session = expect_context::<RwSignal<SessionState>>();
    let reference = expect_context::<RwSignal<ReferenceState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(RecordDraft::default());
    let lap_count = Memo::new(move |_| draft.with(|d| d.lap_inputs.len()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        let current = draft.get_untracked();
        leptos::task::spawn_local(async move {
            let state = session.get_untracked();
            match controller.submit_record(state.current(), &current).await {
                Ok(()) => {
                    draft.set(RecordDraft::default());
                    ui.update(|u| u.show(Notice::info(RECORD_SAVED)));
                    on_saved.run(());
                }
                Err(e) => ui.update(|u| u.show(Notice::error(e.user_message(RECORD_SAVE_FAILED)))),
            }
        });
    };

    let lap_inputs = move || {
        (0..lap_count.get())
            .map(|index| {
                view! {
                    <label class="lap-time-input">
                        <span class="form__label">{format!("Lap {}", index + 1)}</span>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="1:23.456"
                            prop:value=move || draft.with(|d| d.lap_inputs.get(index).cloned().unwrap_or_default())
                            on:input=move |ev| draft.update(|d| d.set_lap(index, event_target_value(&ev)))
                        />
                    </label>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <form class="record-form form" on:submit=on_submit>
            <h2>"New record"</h2>
            <ReferenceSelect
                kind=ReferenceKind::GameTitles
                value=Signal::derive(move || draft.with(|d| d.game_title_id.clone()))
                on_change=Callback::new(move |value: String| draft.update(|d| d.game_title_id = value))
                required=true
            />
            <ReferenceSelect
                kind=ReferenceKind::Tracks
                value=Signal::derive(move || draft.with(|d| d.track_id.clone()))
                on_change=Callback::new(move |value: String| {
                    let lists = reference.get_untracked();
                    draft.update(|d| d.select_track(value, &lists));
                })
                required=true
            />
            <ReferenceSelect
                kind=ReferenceKind::CarModels
                value=Signal::derive(move || draft.with(|d| d.car_model_id.clone()))
                on_change=Callback::new(move |value: String| draft.update(|d| d.car_model_id = value))
                required=true
            />
            <fieldset class="form__laps">
                <legend>"Lap times"</legend>
                {lap_inputs}
                <div class="form__lap-actions">
                    <button
                        class="btn"
                        type="button"
                        disabled=move || lap_count.get() >= MAX_LAP_INPUTS
                        on:click=move |_| draft.update(RecordDraft::add_lap)
                    >
                        "+ Lap"
                    </button>
                    <button
                        class="btn"
                        type="button"
                        disabled=move || lap_count.get() <= 1
                        on:click=move |_| draft.update(RecordDraft::remove_lap)
                    >
                        "− Lap"
                    </button>
                </div>
            </fieldset>
            <label class="form__field">
                <span class="form__label">"Comment"</span>
                <textarea
                    class="form__textarea"
                    prop:value=move || draft.with(|d| d.comment.clone())
                    on:input=move |ev| draft.update(|d| d.comment = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit">"Save record"</button>
        </form>
    }
}
