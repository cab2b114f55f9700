//! Reference lists (game titles, car models, tracks) for select controls.
//!
//! DESIGN
//! ======
//! The three lists load independently and each fills two selects (record
//! form and filter form) from the same state, so a slow or failed list never
//! blocks the others.

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;

use crate::net::types::ReferenceItem;

/// Label of the leading empty option in every reference select.
pub const PLACEHOLDER_LABEL: &str = "Please select";

/// Which reference list an endpoint or select refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    GameTitles,
    CarModels,
    Tracks,
}

impl ReferenceKind {
    pub const ALL: [Self; 3] = [Self::GameTitles, Self::CarModels, Self::Tracks];

    pub fn path(self) -> &'static str {
        match self {
            Self::GameTitles => "/api/game-titles",
            Self::CarModels => "/api/car-models",
            Self::Tracks => "/api/tracks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GameTitles => "Game title",
            Self::CarModels => "Car model",
            Self::Tracks => "Track",
        }
    }
}

/// One `<option>` of a reference select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Placeholder first, then one option per item in backend order.
pub fn select_options(items: &[ReferenceItem]) -> Vec<SelectOption> {
    std::iter::once(SelectOption { value: String::new(), label: PLACEHOLDER_LABEL.to_owned() })
        .chain(items.iter().map(|item| SelectOption { value: item.id.to_string(), label: item.name.clone() }))
        .collect()
}

/// Loaded reference lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceState {
    pub game_titles: Vec<ReferenceItem>,
    pub car_models: Vec<ReferenceItem>,
    pub tracks: Vec<ReferenceItem>,
}

impl ReferenceState {
    pub fn items(&self, kind: ReferenceKind) -> &[ReferenceItem] {
        match kind {
            ReferenceKind::GameTitles => &self.game_titles,
            ReferenceKind::CarModels => &self.car_models,
            ReferenceKind::Tracks => &self.tracks,
        }
    }

    /// Replace one list wholesale.
    pub fn set(&mut self, kind: ReferenceKind, items: Vec<ReferenceItem>) {
        match kind {
            ReferenceKind::GameTitles => self.game_titles = items,
            ReferenceKind::CarModels => self.car_models = items,
            ReferenceKind::Tracks => self.tracks = items,
        }
    }

    /// Resolve a select value back to the item it names.
    pub fn find(&self, kind: ReferenceKind, value: &str) -> Option<&ReferenceItem> {
        let id = value.trim().parse::<i64>().ok()?;
        self.items(kind).iter().find(|item| item.id == id)
    }
}
