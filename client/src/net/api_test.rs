use super::*;

#[test]
fn ok_response_yields_body() {
    let raw = RawResponse { status: 204, body: String::new() };
    assert!(raw.is_ok());
    assert_eq!(raw.into_result().unwrap(), "");
}

#[test]
fn error_response_carries_detail() {
    let raw = RawResponse { status: 400, body: r#"{"detail":"Incorrect username or password"}"#.to_owned() };
    assert_eq!(
        raw.into_result(),
        Err(ApiError::Status { status: 400, detail: Some("Incorrect username or password".to_owned()) })
    );
}

#[test]
fn decode_reports_malformed_json() {
    let raw = RawResponse { status: 200, body: "not json".to_owned() };
    assert!(matches!(raw.decode::<serde_json::Value>(), Err(ApiError::Decode(_))));
}

#[test]
fn decode_parses_json() {
    let raw = RawResponse { status: 200, body: r#"{"access_token":"abc"}"#.to_owned() };
    let token: crate::net::types::TokenResponse = raw.decode().unwrap();
    assert_eq!(token.access_token, "abc");
}

#[test]
fn ip_from_response_falls_back() {
    assert_eq!(ip_from_response(&serde_json::json!({"ip": "203.0.113.5"})), "203.0.113.5");
    assert_eq!(ip_from_response(&serde_json::json!({})), UNKNOWN_IP);
    assert_eq!(ip_from_response(&serde_json::json!({"ip": ""})), UNKNOWN_IP);
}

#[tokio::test]
async fn requests_are_unavailable_off_browser() {
    let err = execute(&crate::net::endpoints::system_logs(None)).await;
    assert_eq!(err, Err(ApiError::Unavailable));
}
