//! Create/update form for single-lap records.

use leptos::prelude::*;

use crate::state::laps::LapForm;

/// Lap form bound to `form`. The submit label and the cancel button follow
/// the form's edit mode; `on_submit` receives a snapshot of the contents.
#[component]
pub fn LapFormPanel(form: RwSignal<LapForm>, on_submit: Callback<LapForm>) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get_untracked());
    };

    view! {
        <form class="record-form form" on:submit=submit>
            <LapTextField label="Game title" form=form get={|f| f.game_title.clone()} set={|f, v| f.game_title = v} />
            <LapTextField label="Car model" form=form get={|f| f.car_model.clone()} set={|f, v| f.car_model = v} />
            <LapTextField label="Track" form=form get={|f| f.track_name.clone()} set={|f, v| f.track_name = v} />
            <LapTextField label="Lap time" form=form get={|f| f.lap_time.clone()} set={|f, v| f.lap_time = v} />
            <label class="form__field">
                <span class="form__label">"Notes"</span>
                <textarea
                    class="form__textarea"
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                ></textarea>
            </label>
            <div class="form__actions">
                <button class="btn btn--primary" type="submit">
                    {move || form.with(LapForm::submit_label)}
                </button>
                <Show when=move || form.with(LapForm::cancel_visible)>
                    <button class="btn" type="button" on:click=move |_| form.update(LapForm::reset)>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[component]
fn LapTextField(
    label: &'static str,
    form: RwSignal<LapForm>,
    get: fn(&LapForm) -> String,
    set: fn(&mut LapForm, String),
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                type="text"
                required=true
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}
