use super::*;

fn pref(id: &str, notify: bool) -> EmailPreference {
    EmailPreference { project_id: id.to_owned(), project_name: format!("Project {id}"), notify_interface_changes: notify }
}

#[test]
fn set_preference_returns_previous_value() {
    let mut prefs = vec![pref("1", false), pref("2", true)];
    assert_eq!(set_preference(&mut prefs, "1", true), Some(false));
    assert!(prefs[0].notify_interface_changes);
    assert!(prefs[1].notify_interface_changes);
}

#[test]
fn rollback_restores_the_previous_value() {
    let mut prefs = vec![pref("1", true)];
    let previous = set_preference(&mut prefs, "1", false);
    assert_eq!(previous, Some(true));
    set_preference(&mut prefs, "1", true);
    assert!(prefs[0].notify_interface_changes);
}

#[test]
fn unknown_project_is_ignored() {
    let mut prefs = vec![pref("1", false)];
    assert_eq!(set_preference(&mut prefs, "9", true), None);
    assert!(!prefs[0].notify_interface_changes);
}
