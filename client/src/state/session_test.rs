use super::*;

#[test]
fn default_session_is_not_loaded_or_signed_in() {
    let s = SessionState::default();
    assert!(!s.loaded);
    assert!(!s.is_signed_in());
}

#[test]
fn from_stored_marks_loaded() {
    let s = SessionState::from_stored(StoredSession {
        token: Some("t".to_owned()),
        username: Some("alice".to_owned()),
        login_attempts: 1,
    });
    assert!(s.loaded);
    assert!(s.is_signed_in());
    assert_eq!(s.to_stored().login_attempts, 1);
}

#[test]
fn sign_in_resets_attempts() {
    let mut s = SessionState::default();
    s.record_failed_attempt();
    s.record_failed_attempt();
    s.sign_in("tok".to_owned(), "alice");
    assert_eq!(s.login_attempts, 0);
    assert_eq!(s.token(), Some("tok"));
}

#[test]
fn clear_credentials_keeps_attempts() {
    let mut s = SessionState::default();
    s.sign_in("tok".to_owned(), "alice");
    s.record_failed_attempt();
    s.clear_credentials();
    assert!(!s.is_signed_in());
    assert_eq!(s.username, None);
    assert_eq!(s.login_attempts, 1);
}

#[test]
fn remembered_username_is_not_a_session() {
    let mut s = SessionState::default();
    s.remember_username("bob");
    assert!(!s.is_signed_in());
    assert_eq!(s.username_or_empty(), "bob");
}
