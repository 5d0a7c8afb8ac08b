use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row(String);

impl ListEntity for Row {
    fn csv_headers() -> &'static [&'static str] {
        &["Name"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![self.0.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Filters {
    search: String,
}

impl ListFilters for Filters {
    fn to_query(&self) -> Vec<(String, String)> {
        if self.search.is_empty() { Vec::new() } else { vec![("search".to_owned(), self.search.clone())] }
    }
}

type Rows = RemoteCollection<Row, Filters>;

#[test]
fn new_collection_schedules_unfiltered_fetch() {
    let mut c = Rows::new();
    assert!(c.loading);
    let first = c.take_pending().unwrap();
    assert!(first.query.is_empty());
    assert_eq!(c.take_pending(), None);
}

#[test]
fn unchanged_filters_do_not_refetch() {
    let mut c = Rows::new();
    c.take_pending();
    assert!(!c.update_filters(|f| f.search.clear()));
    assert!(!c.has_pending());
}

#[test]
fn rapid_changes_coalesce_into_latest_query() {
    let mut c = Rows::new();
    c.take_pending();
    c.update_filters(|f| f.search = "al".to_owned());
    c.update_filters(|f| f.search = "alice".to_owned());
    let pending = c.take_pending().unwrap();
    assert_eq!(pending.query, vec![("search".to_owned(), "alice".to_owned())]);
    assert_eq!(c.take_pending(), None);
}

#[test]
fn stale_response_is_ignored() {
    let mut c = Rows::new();
    let old = c.take_pending().unwrap();
    c.update_filters(|f| f.search = "bob".to_owned());
    let new = c.take_pending().unwrap();

    assert!(c.apply_response(new.generation, Ok(vec![Row("bob".to_owned())])));
    assert!(!c.apply_response(old.generation, Ok(vec![Row("everyone".to_owned())])));
    assert_eq!(c.items, vec![Row("bob".to_owned())]);
    assert!(!c.loading);
}

#[test]
fn error_response_keeps_rows_and_sets_message() {
    let mut c = Rows::new();
    let p = c.take_pending().unwrap();
    c.apply_response(p.generation, Ok(vec![Row("a".to_owned())]));
    c.refresh();
    let p = c.take_pending().unwrap();
    c.apply_response(p.generation, Err(ApiError::from_status(500, Some("db down".to_owned()))));
    assert_eq!(c.error.as_deref(), Some("db down"));
    assert_eq!(c.items.len(), 1);
}

#[test]
fn export_uses_loaded_rows() {
    let mut c = Rows::new();
    let p = c.take_pending().unwrap();
    c.apply_response(p.generation, Ok(vec![Row("x \"y\"".to_owned())]));
    assert_eq!(c.export_csv(), "\"Name\"\n\"x \"\"y\"\"\"");
}

#[test]
fn status_filter_keys_round_trip() {
    for status in StatusFilter::ALL {
        assert_eq!(StatusFilter::from_key(status.key()), status);
    }
    assert_eq!(StatusFilter::All.query_value(), None);
    assert_eq!(StatusFilter::Inactive.query_value(), Some("false"));
}

#[test]
fn debounced_search_superseded_by_reset_never_fetches() {
    let mut c = Rows::new();
    let first = c.take_pending().unwrap();
    c.apply_response(first.generation, Ok(vec![Row("a".to_owned())]));

    c.update_filters(|f| f.search = "bo".to_owned());
    c.take_pending();
    let debounce = Generation::default();
    let ticket = debounce.next();

    debounce.invalidate();
    assert!(c.reset_filters());
    let reset = c.take_pending().unwrap();
    assert!(reset.query.is_empty());

    assert!(!c.apply_debounced(&debounce, ticket, |f| f.search = "bob".to_owned()));
    assert_eq!(c.take_pending(), None);
    assert!(c.filters.search.is_empty());
}

#[test]
fn current_debounced_search_applies() {
    let mut c = Rows::new();
    c.take_pending();
    let debounce = Generation::default();
    let ticket = debounce.next();
    assert!(c.apply_debounced(&debounce, ticket, |f| f.search = "bob".to_owned()));
    assert_eq!(c.take_pending().unwrap().query, vec![("search".to_owned(), "bob".to_owned())]);
}
