use super::*;
use crate::net::types::Role;

fn profile(first_login: bool, two_factor: bool) -> UserProfile {
    UserProfile {
        username: "alice".to_owned(),
        is_first_login: first_login,
        is_2fa_active: two_factor,
        ..UserProfile::default()
    }
}

#[test]
fn first_login_goes_to_2fa_setup_regardless_of_flag() {
    assert_eq!(route_after_login(&profile(true, true)), "/2fa-setup");
    assert_eq!(route_after_login(&profile(true, false)), "/2fa-setup");
}

#[test]
fn without_2fa_goes_home() {
    assert_eq!(route_after_login(&profile(false, false)), "/home");
}

#[test]
fn admins_without_2fa_also_go_home() {
    let admin = UserProfile { role: Role::Admin, ..profile(false, false) };
    assert_eq!(route_after_login(&admin), "/home");
}

#[test]
fn with_2fa_goes_to_otp() {
    assert_eq!(route_after_login(&profile(false, true)), "/otp-verification");
}

#[test]
fn forbidden_means_password_expired() {
    let failure = classify_login_error(&ApiError::from_status(403, Some("expired".to_owned())));
    assert_eq!(failure, LoginFailure::PasswordExpired);
    assert!(!failure.counts_as_attempt());
}

#[test]
fn too_many_requests_means_rate_limited() {
    assert_eq!(classify_login_error(&ApiError::from_status(429, None)), LoginFailure::RateLimited);
}

#[test]
fn rejection_shows_detail_or_fallback() {
    let with_detail = classify_login_error(&ApiError::from_status(401, Some("Incorrect password".to_owned())));
    assert_eq!(with_detail.message(), "Incorrect password");
    assert!(with_detail.counts_as_attempt());
    let bare = classify_login_error(&ApiError::from_status(400, None));
    assert_eq!(bare.message(), AUTH_FAILED);
}

#[test]
fn transport_failures_are_generic() {
    let failure = classify_login_error(&ApiError::Network("offline".to_owned()));
    assert_eq!(failure, LoginFailure::Unreachable);
    assert_eq!(failure.message(), GENERIC_MESSAGE);
}

#[test]
fn captcha_gates_submit_from_third_failure() {
    assert!(can_submit_login(2, false, false));
    assert!(!can_submit_login(3, false, false));
    assert!(can_submit_login(3, true, false));
    assert!(!can_submit_login(0, false, true));
}

#[test]
fn blank_credentials_never_reach_the_network() {
    assert_eq!(
        validate_credentials("  ", "pw"),
        Err(ApiError::Validation(CREDENTIALS_REQUIRED.to_owned()))
    );
    assert!(validate_credentials("alice", "").is_err());
    assert!(validate_credentials("alice", "pw").is_ok());
}
