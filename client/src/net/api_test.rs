use super::*;

fn response(status: u16, body: &str) -> ApiResponse {
    ApiResponse { status, body: body.to_owned() }
}

#[test]
fn save_lap_request_posts_without_id() {
    let request = save_lap_request("tok", None, &LapPayload::default()).unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/api/laps");
}

#[test]
fn save_lap_request_puts_to_record_path_with_id() {
    let request = save_lap_request("tok", Some(5), &LapPayload::default()).unwrap();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/api/laps/5");
}

#[test]
fn create_and_update_share_payload_shape() {
    let payload = LapPayload { track_name: "Suzuka".to_owned(), ..LapPayload::default() };
    let create = save_lap_request("tok", None, &payload).unwrap();
    let update = save_lap_request("tok", Some(9), &payload).unwrap();
    assert_eq!(create.body, update.body);
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    let request = delete_lap_request("abc", 3);
    assert_eq!(request.authorization().as_deref(), Some("Bearer abc"));
    assert_eq!(records_request(None).authorization(), None);
}

#[test]
fn login_request_carries_no_auth() {
    let credentials = Credentials { email: "e".to_owned(), password: "p".to_owned() };
    let request = login_request(&credentials).unwrap();
    assert_eq!(request.bearer, None);
    assert_eq!(request.body, Some(serde_json::json!({ "email": "e", "password": "p" })));
}

#[test]
fn reference_request_targets_kind_path() {
    assert_eq!(reference_request(ReferenceKind::Tracks, None).path, "/api/tracks");
    assert_eq!(reference_request(ReferenceKind::CarModels, Some("t")).path, "/api/car-models");
}

#[test]
fn check_rejects_non_2xx_with_server_error_verbatim() {
    let err = response(401, r#"{"error":"メールアドレスまたはパスワードが正しくありません"}"#)
        .check()
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 401,
            message: Some("メールアドレスまたはパスワードが正しくありません".to_owned()),
        }
    );
}

#[test]
fn check_rejects_with_no_message_for_non_json_body() {
    let err = response(500, "<html>oops</html>").check().unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 500, message: None });
}

#[test]
fn json_reports_decode_errors_on_2xx() {
    let err = response(200, "not json").json::<Vec<i32>>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn user_message_prefers_specific_text() {
    let rejected = ApiError::Rejected { status: 400, message: Some("taken".to_owned()) };
    assert_eq!(rejected.user_message("Registration failed."), "taken");
    let bare = ApiError::Rejected { status: 400, message: None };
    assert_eq!(bare.user_message("Registration failed."), "Registration failed.");
    assert_eq!(ApiError::Network("refused".to_owned()).user_message("Login failed."), "Login failed.");
    assert_eq!(ApiError::NotLoggedIn.user_message("x"), LOGIN_REQUIRED_MESSAGE);
}

#[test]
fn unserializable_body_is_an_encode_error() {
    let body = std::collections::BTreeMap::from([((1_u8, 2_u8), "tuple keys have no JSON form")]);
    let err = ApiRequest::new(Method::Post, LOGIN_PATH).json(&body).unwrap_err();
    assert!(matches!(err, ApiError::Encode(_)));
    assert_eq!(err.user_message("Login failed."), "Login failed.");
}
