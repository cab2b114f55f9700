//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `records`, `laps`, etc.) so individual
//! components can depend on small focused models.

pub mod laps;
pub mod records;
pub mod reference;
pub mod session;
pub mod ui;
