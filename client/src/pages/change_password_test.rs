use super::*;

#[test]
fn submit_needs_every_field() {
    assert!(can_submit("alice", "old", "Abc12345!", "Abc12345!", false));
    assert!(!can_submit(" ", "old", "Abc12345!", "Abc12345!", false));
    assert!(!can_submit("alice", "", "Abc12345!", "Abc12345!", false));
}

#[test]
fn submit_needs_strong_matching_password() {
    assert!(!can_submit("alice", "old", "abc", "abc", false));
    assert!(!can_submit("alice", "old", "Abc12345!", "Abc12345?", false));
}

#[test]
fn submit_is_blocked_while_busy() {
    assert!(!can_submit("alice", "old", "Abc12345!", "Abc12345!", true));
}
