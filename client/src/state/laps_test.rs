use super::*;

fn suzuka_lap() -> Lap {
    Lap {
        id: 5,
        game_title: "GT7".to_owned(),
        car_model: "NSX".to_owned(),
        track_name: "Suzuka".to_owned(),
        lap_time: "1:23.456".to_owned(),
        notes: None,
        recorded_at: "2025-06-14T12:00:00".to_owned(),
    }
}

#[test]
fn new_form_is_in_create_mode() {
    let form = LapForm::default();
    assert_eq!(form.mode(), EditMode::Create);
    assert_eq!(form.submit_label(), CREATE_LABEL);
    assert!(!form.cancel_visible());
}

#[test]
fn editing_populates_exact_values_and_switches_to_update() {
    let form = LapForm::from_lap(&suzuka_lap());
    assert_eq!(form.lap_id, Some(5));
    assert_eq!(form.track_name, "Suzuka");
    assert_eq!(form.lap_time, "1:23.456");
    assert_eq!(form.notes, "");
    assert_eq!(form.mode(), EditMode::Update(5));
    assert_eq!(form.submit_label(), UPDATE_LABEL);
    assert!(form.cancel_visible());
}

#[test]
fn reset_returns_to_create_mode_with_blank_fields() {
    let mut form = LapForm::from_lap(&suzuka_lap());
    form.reset();
    assert_eq!(form, LapForm::default());
    assert!(!form.cancel_visible());
}

#[test]
fn payload_excludes_id() {
    let payload = serde_json::to_value(LapForm::from_lap(&suzuka_lap()).payload()).unwrap();
    assert!(payload.get("id").is_none());
    assert!(payload.get("lap_id").is_none());
    assert_eq!(payload["track_name"], "Suzuka");
}

#[test]
fn card_hides_empty_notes() {
    let mut lap = suzuka_lap();
    lap.notes = Some(String::new());
    assert_eq!(LapCardView::from_lap(&lap).notes, None);
    lap.notes = Some("wet".to_owned());
    assert_eq!(LapCardView::from_lap(&lap).notes.as_deref(), Some("wet"));
}

#[test]
fn replace_fully_swaps_list() {
    let mut state = LapsState::default();
    state.replace(vec![suzuka_lap(), suzuka_lap()]);
    state.replace(vec![suzuka_lap()]);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn failed_reload_clears_loading_and_keeps_rows() {
    let mut state = LapsState { items: vec![suzuka_lap()], ..LapsState::default() };
    state.begin_load();
    assert!(state.loading);
    assert_eq!(state.items.len(), 1);
    state.fail("Failed to load.".to_owned());
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to load."));
}
