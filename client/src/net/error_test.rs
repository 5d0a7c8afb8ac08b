use super::*;

#[test]
fn from_status_classifies_special_codes() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized { detail: None });
    assert_eq!(ApiError::from_status(429, Some("slow down".to_owned())), ApiError::RateLimited);
    assert_eq!(
        ApiError::from_status(500, None),
        ApiError::Status { status: 500, detail: None }
    );
}

#[test]
fn status_reports_response_codes_only() {
    assert_eq!(ApiError::from_status(404, None).status(), Some(404));
    assert!(ApiError::from_status(404, None).is_not_found());
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::from_status(400, Some("Username already exists".to_owned()));
    assert_eq!(err.user_message(), "Username already exists");
}

#[test]
fn user_message_falls_back_to_generic_text() {
    assert_eq!(ApiError::Network("boom".to_owned()).user_message(), GENERIC_MESSAGE);
    assert_eq!(ApiError::from_status(500, None).user_message(), GENERIC_MESSAGE);
}

#[test]
fn validation_message_is_shown_verbatim() {
    assert_eq!(ApiError::Validation("Passwords do not match.".to_owned()).user_message(), "Passwords do not match.");
}

#[test]
fn extract_detail_reads_string_and_list_forms() {
    assert_eq!(extract_detail(r#"{"detail":"Incorrect password"}"#), Some("Incorrect password".to_owned()));
    assert_eq!(
        extract_detail(r#"{"detail":[{"msg":"field required"},{"msg":"bad email"}]}"#),
        Some("field required; bad email".to_owned())
    );
    assert_eq!(extract_detail(r#"{"detail":""}"#), None);
    assert_eq!(extract_detail("<html>"), None);
    assert_eq!(extract_detail(r#"{"message":"x"}"#), None);
}
