//! Leaderboard records and the record-submission draft.
//!
//! DESIGN
//! ======
//! `RecordsState` is replaced wholesale on every load; filtering and ranking
//! happen on the way to the view, never by mutating the loaded list.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::{LapTimeEntry, NewRecord, RecordSummary};
use crate::state::reference::{ReferenceKind, ReferenceState};
use crate::util::format::{format_timestamp, optional_text};

/// Upper bound on lap-time inputs, whatever a track's `lap_count` says.
pub const MAX_LAP_INPUTS: usize = 100;

/// Loaded leaderboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordsState {
    pub items: Vec<RecordSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RecordsState {
    /// Mark a reload in flight; rows stay visible until it settles.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Full replace after a successful load.
    pub fn replace(&mut self, items: Vec<RecordSummary>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Keep the previous rows and report the failure.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Number lap-time inputs 1..N in input order. Values are passed through
/// untouched, blanks included.
pub fn number_lap_times(values: &[String]) -> Vec<LapTimeEntry> {
    values
        .iter()
        .zip(1_u32..)
        .map(|(time, lap_number)| LapTimeEntry { lap_number, time: time.clone() })
        .collect()
}

/// Contents of the record-submission form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDraft {
    pub game_title_id: String,
    pub track_id: String,
    pub car_model_id: String,
    pub lap_inputs: Vec<String>,
    pub comment: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            game_title_id: String::new(),
            track_id: String::new(),
            car_model_id: String::new(),
            lap_inputs: vec![String::new()],
            comment: String::new(),
        }
    }
}

impl RecordDraft {
    pub fn to_payload(&self) -> NewRecord {
        NewRecord {
            game_title_id: self.game_title_id.clone(),
            track_id: self.track_id.clone(),
            car_model_id: self.car_model_id.clone(),
            lap_times: number_lap_times(&self.lap_inputs),
            comment: self.comment.clone(),
        }
    }

    /// Grow or shrink the lap inputs to `count` (between one and
    /// `MAX_LAP_INPUTS`), keeping already typed values.
    pub fn resize_laps(&mut self, count: usize) {
        self.lap_inputs.resize(count.clamp(1, MAX_LAP_INPUTS), String::new());
    }

    pub fn add_lap(&mut self) {
        if self.lap_inputs.len() < MAX_LAP_INPUTS {
            self.lap_inputs.push(String::new());
        }
    }

    pub fn remove_lap(&mut self) {
        if self.lap_inputs.len() > 1 {
            self.lap_inputs.pop();
        }
    }

    pub fn set_lap(&mut self, index: usize, value: String) {
        if let Some(slot) = self.lap_inputs.get_mut(index) {
            *slot = value;
        }
    }

    /// Select a track and adopt its lap count when the backend provides one.
    pub fn select_track(&mut self, value: String, reference: &ReferenceState) {
        if let Some(count) = reference.find(ReferenceKind::Tracks, &value).and_then(|t| t.lap_count) {
            self.resize_laps(usize::try_from(count).unwrap_or(MAX_LAP_INPUTS));
        }
        self.track_id = value;
    }
}

/// Filter-form selection. Empty values match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub game_title_id: String,
    pub car_model_id: String,
    pub track_id: String,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.game_title_id.is_empty() && self.car_model_id.is_empty() && self.track_id.is_empty()
    }

    /// Records carry names, the filter carries ids; resolve through the
    /// reference lists. An id that no longer resolves matches nothing.
    pub fn matches(&self, record: &RecordSummary, reference: &ReferenceState) -> bool {
        let check = |kind: ReferenceKind, value: &str, field: &str| {
            if value.is_empty() {
                return true;
            }
            reference.find(kind, value).is_some_and(|item| item.name == field)
        };
        check(ReferenceKind::GameTitles, &self.game_title_id, &record.game_title)
            && check(ReferenceKind::CarModels, &self.car_model_id, &record.car_model)
            && check(ReferenceKind::Tracks, &self.track_id, &record.track)
    }
}

/// Display-ready leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub user: String,
    pub game_title: String,
    pub track: String,
    pub car_model: String,
    pub total_time: String,
    pub lap_times: String,
    pub comment: String,
    pub created_at: String,
}

impl LeaderboardRow {
    pub fn from_record(rank: usize, record: &RecordSummary) -> Self {
        Self {
            rank,
            user: record.user.clone(),
            game_title: record.game_title.clone(),
            track: record.track.clone(),
            car_model: record.car_model.clone(),
            total_time: record.total_time.clone(),
            lap_times: record
                .lap_times
                .iter()
                .map(|lap| lap.time.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            comment: optional_text(record.comment.as_deref()).to_owned(),
            created_at: format_timestamp(&record.created_at),
        }
    }
}

/// Apply the filter and rank 1..N in backend order.
pub fn leaderboard_rows(
    records: &[RecordSummary],
    filter: &RecordFilter,
    reference: &ReferenceState,
) -> Vec<LeaderboardRow> {
    records
        .iter()
        .filter(|record| filter.matches(record, reference))
        .enumerate()
        .map(|(index, record)| LeaderboardRow::from_record(index + 1, record))
        .collect()
}
