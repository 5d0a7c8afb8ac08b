use super::*;

#[test]
fn entry_serializes_with_structured_category() {
    let body = serde_json::to_value(AuditEntry::auto_logout("alice", 0)).unwrap();
    assert_eq!(body["user_username"], "alice");
    assert_eq!(body["log_type"], "auto_logout");
    assert_eq!(
        body["log_description"],
        "User has been logged out due to inactivity at 1970-01-01 00:00:00 UTC"
    );
}

#[test]
fn login_blocked_mentions_ip() {
    let entry = AuditEntry::login_blocked("bob", 0, "unknown IP");
    assert_eq!(entry.log_type, LogCategory::LoginBlocked);
    assert!(entry.log_description.ends_with("from IP address: unknown IP"));
}

#[test]
fn user_created_names_role_and_target() {
    let entry = AuditEntry::user_created("admin", Role::Editor, "carol", 0);
    assert_eq!(entry.user_username, "admin");
    assert!(entry.log_description.starts_with("User has created a new editor user (carol)"));
}

#[test]
fn status_change_uses_matching_verb() {
    assert!(AuditEntry::user_status_changed("a", "b", false, 0).log_description.contains("deactivated"));
    assert!(AuditEntry::user_status_changed("a", "b", true, 0).log_description.contains(" activated"));
}
