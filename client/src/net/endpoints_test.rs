use super::*;
use crate::net::types::Role;

#[test]
fn login_posts_form_encoded_credentials() {
    let req = login("alice", "p&ss word");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/token");
    assert_eq!(req.body, Body::Form(vec![pair("username", "alice"), pair("password", "p&ss word")]));
    assert_eq!(req.bearer, None);
}

#[test]
fn path_segments_are_escaped() {
    assert_eq!(user_profile("a b/c").path, "/users/a%20b%2Fc");
    assert_eq!(save_two_factor_secret("bob", "JBSW Y3").path, "/2fa/setup/save-secret/bob/JBSW%20Y3");
}

#[test]
fn bearer_is_attached_and_empty_tokens_dropped() {
    assert_eq!(system_logs(Some("tok")).bearer.as_deref(), Some("tok"));
    assert_eq!(system_logs(Some("")).bearer, None);
    assert_eq!(system_logs(None).bearer, None);
}

#[test]
fn users_query_has_no_question_mark_when_unfiltered() {
    assert_eq!(users(&[], None).path, "/api/users");
    let q = vec![pair("roles", "admin"), pair("roles", "editor")];
    assert_eq!(users(&q, None).path, "/api/users?roles=admin&roles=editor");
}

#[test]
fn status_toggle_sends_is_active() {
    let req = set_user_status("12", false, Some("t")).unwrap();
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/api/users/12/status");
    assert_eq!(req.body, Body::Json(serde_json::json!({"is_active": false})));
}

#[test]
fn create_user_posts_to_collection() {
    let user = NewUser::new("carol", "pw", "c@x.io", Role::Viewer, Vec::new());
    let req = create_user(&user, Some("t")).unwrap();
    assert_eq!(req.path, "/api/users");
    assert_eq!(req.method, Method::Post);
}

#[test]
fn autocomplete_trims_and_encodes_query() {
    assert_eq!(user_autocomplete(" al ice ", None).path, "/api/v1/users/autocomplete?q=al+ice");
}

#[test]
fn otp_body_contains_username_and_code() {
    let req = verify_otp("alice", " 123456 ").unwrap();
    assert_eq!(req.path, "/verify-2fa/alice");
    assert_eq!(req.body, Body::Json(serde_json::json!({"username": "alice", "otp": "123456"})));
}

#[test]
fn url_joins_base_and_passes_absolute_urls_through() {
    assert_eq!(verify_token("abc").url("http://api:8000/"), "http://api:8000/verify-token/abc");
    assert_eq!(public_ip().url("http://api:8000"), PUBLIC_IP_URL);
}

#[test]
fn api_base_has_a_default() {
    assert!(api_base().starts_with("http"));
}

#[test]
fn email_preference_update_targets_project() {
    let req = update_email_preference("4", true, Some("t")).unwrap();
    assert_eq!(req.path, "/api/v1/email-preferences/projects/4");
    assert_eq!(
        req.body,
        Body::Json(serde_json::json!({"receber_notificacoes_alteracoes_interface": true}))
    );
}
