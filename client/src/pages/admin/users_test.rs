use super::*;
use crate::state::collection::FetchRequest;

#[test]
fn status_button_offers_the_opposite_state() {
    let active = User { is_active: true, ..User::default() };
    let inactive = User { is_active: false, ..User::default() };
    assert_eq!(status_button_label(&active), "Deactivate");
    assert_eq!(status_button_label(&inactive), "Activate");
}

#[tokio::test]
async fn toggle_status_surfaces_transport_failure() {
    let user = User { id: "7".to_owned(), username: "bob".to_owned(), is_active: true, ..User::default() };
    let session = SessionState { token: Some("t".to_owned()), username: Some("admin".to_owned()), ..SessionState::default() };
    assert_eq!(toggle_user_status(&user, &session).await, Err(ApiError::Unavailable));
}

fn settle(users: &mut UserCollection) -> FetchRequest {
    let pending = users.take_pending().unwrap();
    users.apply_response(pending.generation, Ok(Vec::new()));
    pending
}

#[test]
fn reset_before_debounce_fires_leaves_one_unfiltered_fetch() {
    let mut users = UserCollection::new();
    settle(&mut users);
    users.update_filters(|f| f.status = StatusFilter::Active);
    settle(&mut users);

    let debounce = Generation::default();
    let typed = debounce.next();

    debounce.invalidate();
    users.reset_filters();
    let reset = users.take_pending().unwrap();
    assert!(reset.query.is_empty());

    assert!(!users.apply_debounced(&debounce, typed, |f| f.search = "alice".to_owned()));
    assert_eq!(users.take_pending(), None);
    assert!(users.filters.search.is_empty());
}

#[test]
fn picked_suggestion_outlives_pending_keystrokes() {
    let mut users = UserCollection::new();
    settle(&mut users);

    let debounce = Generation::default();
    let typed = debounce.next();

    debounce.invalidate();
    users.update_filters(|f| f.search = "alice".to_owned());
    settle(&mut users);

    assert!(!users.apply_debounced(&debounce, typed, |f| f.search = "ali".to_owned()));
    assert_eq!(users.filters.search, "alice");
    assert!(!users.has_pending());
}
