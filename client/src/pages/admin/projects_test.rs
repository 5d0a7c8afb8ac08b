use super::*;
use crate::net::interfaces::INTERFACES;

fn with_flags(count: usize) -> Project {
    let mut project = Project { id: "1".to_owned(), project_name: "Alpha".to_owned(), ..Project::default() };
    for iface in INTERFACES.iter().take(count) {
        project.extra.insert(iface.key.to_owned(), serde_json::Value::Bool(true));
    }
    project
}

#[test]
fn interface_summary_counts_enabled_flags() {
    assert_eq!(interface_summary(&with_flags(0)), "None");
    assert_eq!(interface_summary(&with_flags(1)), "1 interface");
    assert_eq!(interface_summary(&with_flags(3)), "3 interfaces");
}

#[tokio::test]
async fn toggle_status_surfaces_transport_failure() {
    let session = SessionState { token: Some("t".to_owned()), ..SessionState::default() };
    assert_eq!(toggle_project_status(&with_flags(0), &session).await, Err(ApiError::Unavailable));
}
