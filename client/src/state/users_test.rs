use super::*;
use crate::net::types::ProjectRef;

#[test]
fn default_filters_serialize_to_nothing() {
    assert!(UserFilters::default().to_query().is_empty());
}

#[test]
fn filters_serialize_in_backend_order() {
    let filters = UserFilters {
        search: "  alice ".to_owned(),
        roles: vec![Role::Admin, Role::Editor],
        projects: vec!["Alpha".to_owned()],
        status: StatusFilter::Active,
        sort: UserSort::RoleDesc,
    };
    assert_eq!(
        filters.to_query(),
        vec![
            pair("search", "alice"),
            pair("status", "true"),
            pair("roles", "admin"),
            pair("roles", "editor"),
            pair("projects", "Alpha"),
            pair("sort_by", "role"),
            pair("order", "desc"),
        ]
    );
}

#[test]
fn reset_after_filtering_triggers_one_unfiltered_fetch() {
    let mut users = UserCollection::new();
    users.take_pending();

    users.update_filters(|f| f.search = "alice".to_owned());
    users.update_filters(|f| f.toggle_role(Role::Admin));
    users.take_pending();

    assert!(users.reset_filters());
    let fetch = users.take_pending().unwrap();
    assert!(fetch.query.is_empty());
    assert_eq!(users.take_pending(), None);
    assert_eq!(users.filters, UserFilters::default());
}

#[test]
fn toggles_add_then_remove() {
    let mut f = UserFilters::default();
    f.toggle_role(Role::Viewer);
    f.toggle_project("Beta");
    assert_eq!(f.roles, vec![Role::Viewer]);
    f.toggle_role(Role::Viewer);
    f.toggle_project("Beta");
    assert_eq!(f, UserFilters::default());
}

#[test]
fn sort_keys_round_trip_and_unknown_is_default() {
    for sort in UserSort::ALL {
        assert_eq!(UserSort::from_key(sort.key()), sort);
    }
    assert_eq!(UserSort::from_key("bogus"), UserSort::UsernameAsc);
}

#[test]
fn autocomplete_needs_two_characters() {
    assert!(!should_autocomplete(" a "));
    assert!(should_autocomplete("al"));
}

#[test]
fn csv_row_fills_placeholders() {
    let user = User { id: "1".to_owned(), username: "bob".to_owned(), ..User::default() };
    assert_eq!(user.csv_row(), vec!["bob", "", "viewer", "Inactive", "No projects"]);
    let user = User {
        projects: vec![ProjectRef { id: None, project_name: "A".to_owned() }, ProjectRef { id: None, project_name: "B".to_owned() }],
        is_active: true,
        ..user
    };
    assert_eq!(user.csv_row()[3], "Active");
    assert_eq!(user.csv_row()[4], "A; B");
}
