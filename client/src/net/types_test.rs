use super::*;

#[test]
fn login_response_flattens_user_fields_next_to_token() {
    let body = r#"{"token":"abc","id":7,"username":"kmc1234","email":"kmc1234@kamiyama.ac.jp"}"#;
    let parsed: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.token.as_deref(), Some("abc"));
    assert_eq!(parsed.user.id, Some(7));
    assert_eq!(parsed.user.display_name(), "kmc1234");
}

#[test]
fn display_name_falls_back_to_email_then_me() {
    let by_email = User { id: None, username: Some(String::new()), email: Some("a@b.jp".to_owned()) };
    assert_eq!(by_email.display_name(), "a@b.jp");
    assert_eq!(User::default().display_name(), "me");
}

#[test]
fn registration_omits_missing_username() {
    let payload = Registration { email: "e".to_owned(), password: "1234".to_owned(), username: None };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "e", "password": "1234" }));
}

#[test]
fn reference_item_accepts_string_ids_and_optional_lap_count() {
    let items: Vec<ReferenceItem> =
        serde_json::from_str(r#"[{"id":"3","name":"Suzuka","lap_count":5},{"id":4,"name":"Monza"}]"#).unwrap();
    assert_eq!(items[0].id, 3);
    assert_eq!(items[0].lap_count, Some(5));
    assert_eq!(items[1].lap_count, None);
}

#[test]
fn record_summary_tolerates_null_comment_and_missing_fields() {
    let body = r#"{"user":"u","game_title":"GT7","track":"Suzuka","car_model":"NSX","total_time":"03:10.500",
        "lap_times":[{"lap_number":1,"time":"1:35.250"}],"comment":null,"created_at":"2025-06-14T12:00:00"}"#;
    let record: RecordSummary = serde_json::from_str(body).unwrap();
    assert_eq!(record.id, None);
    assert_eq!(record.comment, None);
    assert_eq!(record.lap_times.len(), 1);
}

#[test]
fn lap_rejects_non_numeric_id() {
    let result = serde_json::from_str::<Lap>(r#"{"id":"five"}"#);
    assert!(result.is_err());
}
