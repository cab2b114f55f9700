//! Leaderboard table with its filter form.

use leptos::prelude::*;

use crate::components::reference_select::ReferenceSelect;
use crate::state::records::{LeaderboardRow, RecordFilter, RecordsState, leaderboard_rows};
use crate::state::reference::{ReferenceKind, ReferenceState};

/// Filter selects plus the ranked table. The table is rebuilt from scratch
/// whenever the records, the filter or the reference lists change.
#[component]
pub fn Leaderboard(records: RwSignal<RecordsState>) -> impl IntoView {
    let reference = expect_context::<RwSignal<ReferenceState>>();
    let filter = RwSignal::new(RecordFilter::default());

    let rows = move || {
        let rows = records.with(|r| reference.with(|lists| filter.with(|f| leaderboard_rows(&r.items, f, lists))));
        rows.into_iter().map(render_row).collect::<Vec<_>>()
    };

    view! {
        <section class="leaderboard">
            <h2>"Leaderboard"</h2>
            <form class="leaderboard__filter form form--inline" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <ReferenceSelect
                    kind=ReferenceKind::GameTitles
                    value=Signal::derive(move || filter.with(|f| f.game_title_id.clone()))
                    on_change=Callback::new(move |value: String| filter.update(|f| f.game_title_id = value))
                />
                <ReferenceSelect
                    kind=ReferenceKind::CarModels
                    value=Signal::derive(move || filter.with(|f| f.car_model_id.clone()))
                    on_change=Callback::new(move |value: String| filter.update(|f| f.car_model_id = value))
                />
                <ReferenceSelect
                    kind=ReferenceKind::Tracks
                    value=Signal::derive(move || filter.with(|f| f.track_id.clone()))
                    on_change=Callback::new(move |value: String| filter.update(|f| f.track_id = value))
                />
                <button
                    class="btn"
                    type="button"
                    disabled=move || filter.with(RecordFilter::is_empty)
                    on:click=move |_| filter.set(RecordFilter::default())
                >
                    "Clear"
                </button>
            </form>
            <Show when=move || records.with(|r| r.loading)>
                <p class="leaderboard__loading">"Loading..."</p>
            </Show>
            <Show when=move || records.with(|r| r.error.is_some())>
                <p class="leaderboard__error">{move || records.with(|r| r.error.clone().unwrap_or_default())}</p>
            </Show>
            <table class="leaderboard__table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Driver"</th>
                        <th>"Game"</th>
                        <th>"Track"</th>
                        <th>"Car"</th>
                        <th>"Total"</th>
                        <th>"Laps"</th>
                        <th>"Comment"</th>
                        <th>"Recorded"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

fn render_row(row: LeaderboardRow) -> impl IntoView {
    view! {
        <tr>
            <td>{row.rank}</td>
            <td>{row.user}</td>
            <td>{row.game_title}</td>
            <td>{row.track}</td>
            <td>{row.car_model}</td>
            <td>{row.total_time}</td>
            <td>{row.lap_times}</td>
            <td>{row.comment}</td>
            <td>{row.created_at}</td>
        </tr>
    }
}
