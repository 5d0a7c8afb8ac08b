use super::*;

#[test]
fn default_filters_serialize_to_nothing() {
    assert!(ProjectFilters::default().to_query().is_empty());
}

#[test]
fn descending_sort_and_status_are_serialized() {
    let filters = ProjectFilters { search: "al".to_owned(), status: StatusFilter::Inactive, sort: ProjectSort::NameDesc };
    assert_eq!(
        filters.to_query(),
        vec![pair("search", "al"), pair("status", "false"), pair("sort_by", "project_name"), pair("order", "desc")]
    );
}

#[test]
fn csv_row_lists_enabled_interface_labels() {
    let project: Project = serde_json::from_str(
        r#"{"id": 1, "project_name": "Alpha", "sales": true, "stock_areas": true, "project_users": []}"#,
    )
    .unwrap();
    assert_eq!(project.csv_row(), vec!["Alpha", "Active", "No users", "Sales; Stock Areas"]);
}

#[test]
fn reset_schedules_one_unfiltered_fetch() {
    let mut projects = ProjectCollection::new();
    projects.take_pending();
    projects.update_filters(|f| f.search = "x".to_owned());
    projects.take_pending();
    projects.reset_filters();
    assert_eq!(projects.take_pending().map(|p| p.query), Some(Vec::new()));
}
