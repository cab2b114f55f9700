//! Single-lap records and the create/update lap form.
//!
//! The form has exactly two modes: create (no id) and update (id of the lap
//! being edited). The mode drives the submit label and the cancel control.

#[cfg(test)]
#[path = "laps_test.rs"]
mod laps_test;

use crate::net::types::{Lap, LapPayload};
use crate::util::format::{format_timestamp, optional_text};

pub const CREATE_LABEL: &str = "Record";
pub const UPDATE_LABEL: &str = "Update";

/// Loaded lap list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LapsState {
    pub items: Vec<Lap>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LapsState {
    /// Mark a reload in flight; rows stay visible until it settles.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn replace(&mut self, items: Vec<Lap>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Edit toggle of the lap form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update(i64),
}

/// Contents of the lap form plus the id of the lap under edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LapForm {
    pub lap_id: Option<i64>,
    pub game_title: String,
    pub car_model: String,
    pub track_name: String,
    pub lap_time: String,
    pub notes: String,
}

impl LapForm {
    /// Populate the form from an existing lap, switching to update mode.
    pub fn from_lap(lap: &Lap) -> Self {
        Self {
            lap_id: Some(lap.id),
            game_title: lap.game_title.clone(),
            car_model: lap.car_model.clone(),
            track_name: lap.track_name.clone(),
            lap_time: lap.lap_time.clone(),
            notes: optional_text(lap.notes.as_deref()).to_owned(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.lap_id.map_or(EditMode::Create, EditMode::Update)
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            EditMode::Create => CREATE_LABEL,
            EditMode::Update(_) => UPDATE_LABEL,
        }
    }

    pub fn cancel_visible(&self) -> bool {
        matches!(self.mode(), EditMode::Update(_))
    }

    /// Clear every field and return to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> LapPayload {
        LapPayload {
            game_title: self.game_title.clone(),
            car_model: self.car_model.clone(),
            track_name: self.track_name.clone(),
            lap_time: self.lap_time.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Display-ready lap card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LapCardView {
    pub id: i64,
    pub game_title: String,
    pub car_model: String,
    pub track_name: String,
    pub lap_time: String,
    /// `None` hides the notes line entirely.
    pub notes: Option<String>,
    pub recorded_at: String,
}

impl LapCardView {
    pub fn from_lap(lap: &Lap) -> Self {
        Self {
            id: lap.id,
            game_title: lap.game_title.clone(),
            car_model: lap.car_model.clone(),
            track_name: lap.track_name.clone(),
            lap_time: lap.lap_time.clone(),
            notes: lap.notes.clone().filter(|notes| !notes.is_empty()),
            recorded_at: format_timestamp(&lap.recorded_at),
        }
    }
}
