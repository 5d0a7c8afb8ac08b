use super::*;

fn store() -> SessionStore<MemoryStore> {
    SessionStore::new(MemoryStore::default())
}

#[test]
fn empty_store_loads_default_session() {
    assert_eq!(store().load(), StoredSession::default());
}

#[test]
fn save_then_load_restores_fields() {
    let mut s = store();
    let session = StoredSession {
        token: Some("tok".to_owned()),
        username: Some("alice".to_owned()),
        login_attempts: 2,
    };
    s.save(&session);
    assert_eq!(s.load(), session);
}

#[test]
fn saving_none_removes_keys() {
    let mut s = store();
    s.save(&StoredSession { token: Some("tok".to_owned()), username: None, login_attempts: 0 });
    s.save(&StoredSession::default());
    assert_eq!(s.store.get(TOKEN_KEY), None);
}

#[test]
fn clear_credentials_keeps_attempt_counter() {
    let mut s = store();
    s.save(&StoredSession { token: Some("t".to_owned()), username: Some("bob".to_owned()), login_attempts: 3 });
    s.record_activity(1_000);
    s.clear_credentials();

    let loaded = s.load();
    assert_eq!(loaded.token, None);
    assert_eq!(loaded.username, None);
    assert_eq!(loaded.login_attempts, 3);
    assert_eq!(s.last_activity(), None);
}

#[test]
fn corrupt_values_fall_back() {
    let mut raw = MemoryStore::default();
    raw.set(LOGIN_ATTEMPTS_KEY, "many");
    raw.set(LAST_ACTIVITY_KEY, "yesterday");
    raw.set(TOKEN_KEY, "");
    let s = SessionStore::new(raw);
    assert_eq!(s.load(), StoredSession::default());
    assert_eq!(s.last_activity(), None);
}

#[test]
fn record_activity_round_trips() {
    let mut s = store();
    s.record_activity(1_700_000_000_123);
    assert_eq!(s.last_activity(), Some(1_700_000_000_123));
}
