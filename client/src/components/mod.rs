//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render forms, lists and page chrome while reading/writing
//! shared state from Leptos context providers. Backend calls go through the
//! `AppController` context; components never build requests themselves.

pub mod lap_form;
pub mod lap_list;
pub mod leaderboard;
pub mod notice_banner;
pub mod record_form;
pub mod reference_select;
pub mod session_bar;
