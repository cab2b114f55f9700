//! Select control filled from one reference list.

use leptos::prelude::*;

use crate::state::reference::{ReferenceKind, ReferenceState, SelectOption, select_options};

/// `<select>` over the `kind` list with the placeholder option first.
///
/// Re-renders its options whenever the list is replaced; the selected value
/// is owned by the caller.
#[component]
pub fn ReferenceSelect(
    kind: ReferenceKind,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let reference = expect_context::<RwSignal<ReferenceState>>();

    let options = move || {
        reference
            .with(|state| select_options(state.items(kind)))
            .into_iter()
            .map(|SelectOption { value: option_value, label }| {
                view! { <option value=option_value>{label}</option> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <label class="form__field">
            <span class="form__label">{kind.label()}</span>
            <select
                class="form__select"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options}
            </select>
        </label>
    }
}
