use super::*;

fn project(id: &str, active: bool, flags: &[&str]) -> Project {
    let mut p = Project { id: id.to_owned(), project_name: format!("P{id}"), is_active: active, ..Project::default() };
    for key in flags {
        p.extra.insert((*key).to_owned(), serde_json::Value::Bool(true));
    }
    p
}

#[test]
fn interfaces_follow_the_selected_project() {
    let key = crate::net::interfaces::INTERFACES[0].key;
    let projects = vec![project("1", true, &[key]), project("2", true, &[])];
    let enabled = interfaces_for(&projects, "1");
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].0, key);
    assert!(interfaces_for(&projects, "2").is_empty());
    assert!(interfaces_for(&projects, "missing").is_empty());
}

#[test]
fn inactive_projects_are_not_offered() {
    let kept = active_projects(vec![project("1", true, &[]), project("2", false, &[])]);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "1");
}

#[tokio::test]
async fn load_joins_both_requests_off_browser() {
    let (projects, history) = load(Some("t".to_owned())).await;
    assert_eq!(projects, Err(ApiError::Unavailable));
    assert_eq!(history, Err(ApiError::Unavailable));
}
