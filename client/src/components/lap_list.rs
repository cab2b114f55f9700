//! Card list for the signed-in user's lap times.

use leptos::prelude::*;

use crate::state::laps::{LapCardView, LapsState};

/// One card per lap with Edit and Delete actions. The whole list is rebuilt
/// from `laps` on every change.
#[component]
pub fn LapList(laps: RwSignal<LapsState>, on_edit: Callback<i64>, on_delete: Callback<i64>) -> impl IntoView {
    let cards = move || {
        laps.with(|state| state.items.iter().map(LapCardView::from_lap).collect::<Vec<_>>())
            .into_iter()
            .map(|card| render_card(card, on_edit, on_delete))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="lap-list">
            <h2>"My lap times"</h2>
            <Show when=move || laps.with(|state| state.loading)>
                <p class="lap-list__loading">"Loading..."</p>
            </Show>
            <Show when=move || laps.with(|state| state.error.is_some())>
                <p class="lap-list__error">{move || laps.with(|state| state.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || laps.with(|state| state.items.is_empty() && !state.loading && state.error.is_none())>
                <p class="lap-list__empty">"No lap times yet."</p>
            </Show>
            <div class="lap-list__cards">{cards}</div>
        </section>
    }
}

fn render_card(card: LapCardView, on_edit: Callback<i64>, on_delete: Callback<i64>) -> impl IntoView {
    let id = card.id;
    view! {
        <article class="lap-card">
            <h3 class="lap-card__title">{card.game_title}</h3>
            <p class="lap-card__meta">{card.car_model} " / " {card.track_name}</p>
            <p class="lap-card__time">{card.lap_time}</p>
            {card.notes.map(|notes| view! { <p class="lap-card__notes">{notes}</p> })}
            <p class="lap-card__date">{card.recorded_at}</p>
            <div class="lap-card__actions">
                <button class="btn" type="button" on:click=move |_| on_edit.run(id)>
                    "Edit"
                </button>
                <button class="btn btn--danger" type="button" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
