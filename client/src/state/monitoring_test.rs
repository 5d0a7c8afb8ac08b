use super::*;

fn system(id: &str, user: Option<&str>, category: LogCategory, at: Option<&str>) -> SystemLog {
    SystemLog {
        id: id.to_owned(),
        user_username: user.map(str::to_owned),
        log_type: category,
        log_description: format!("entry {id}"),
        timestamp: at.map(str::to_owned),
    }
}

fn interface(id: &str, kind: &str, failed: bool, iface: &str, project: &str, at: &str) -> InterfaceLog {
    InterfaceLog {
        id: id.to_owned(),
        user_username: Some("alice".to_owned()),
        alteration_type: Some(kind.to_owned()),
        interface: Some(iface.to_owned()),
        project: Some(project.to_owned()),
        did_fail: failed,
        timestamp: Some(at.to_owned()),
        log_description: None,
    }
}

fn day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn ids<T>(rows: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|r| id(r).to_owned()).collect()
}

#[test]
fn system_logs_sort_newest_first_with_undated_last() {
    let mut logs = vec![
        system("1", None, LogCategory::Login, Some("2024-01-01T10:00:00")),
        system("2", None, LogCategory::Login, None),
        system("3", None, LogCategory::Login, Some("2024-03-01 08:00:00")),
        system("10", None, LogCategory::Login, None),
    ];
    sort_system_logs(&mut logs);
    assert_eq!(ids(&logs, |l| l.id.as_str()), ["3", "1", "10", "2"]);
}

#[test]
fn equal_timestamps_break_ties_by_numeric_id() {
    let mut logs = vec![
        system("9", None, LogCategory::Login, Some("2024-01-01T10:00:00")),
        system("11", None, LogCategory::Login, Some("2024-01-01T10:00:00")),
    ];
    sort_system_logs(&mut logs);
    assert_eq!(ids(&logs, |l| l.id.as_str()), ["11", "9"]);
}

#[test]
fn username_filter_is_case_insensitive_substring() {
    let logs = vec![
        system("1", Some("Alice"), LogCategory::Login, None),
        system("2", Some("bob"), LogCategory::Login, None),
        system("3", None, LogCategory::Login, None),
    ];
    let filters = SystemLogFilters { username: " ALI ".to_owned(), ..SystemLogFilters::default() };
    assert_eq!(ids(&filter_system_logs(&logs, &filters), |l| l.id.as_str()), ["1"]);
    assert_eq!(filter_system_logs(&logs, &SystemLogFilters::default()).len(), 3);
}

#[test]
fn category_filter_matches_exactly() {
    let logs = vec![
        system("1", None, LogCategory::Login, None),
        system("2", None, LogCategory::AutoLogout, None),
    ];
    let filters = SystemLogFilters { category: Some(LogCategory::AutoLogout), ..SystemLogFilters::default() };
    assert_eq!(ids(&filter_system_logs(&logs, &filters), |l| l.id.as_str()), ["2"]);
}

#[test]
fn date_range_is_inclusive_and_drops_undated_rows() {
    let logs = vec![
        system("1", None, LogCategory::Login, Some("2024-01-01T00:00:00")),
        system("2", None, LogCategory::Login, Some("2024-01-31T23:59:59")),
        system("3", None, LogCategory::Login, Some("2024-02-01T00:00:00")),
        system("4", None, LogCategory::Login, None),
    ];
    let filters = SystemLogFilters {
        range: DateRange { start: day("2024-01-01"), end: day("2024-01-31") },
        ..SystemLogFilters::default()
    };
    assert_eq!(ids(&filter_system_logs(&logs, &filters), |l| l.id.as_str()), ["1", "2"]);

    let open_end = SystemLogFilters {
        range: DateRange { start: day("2024-01-15"), end: None },
        ..SystemLogFilters::default()
    };
    assert_eq!(ids(&filter_system_logs(&logs, &open_end), |l| l.id.as_str()), ["2", "3"]);
}

#[test]
fn available_categories_are_distinct() {
    let logs = vec![
        system("1", None, LogCategory::Logout, None),
        system("2", None, LogCategory::Login, None),
        system("3", None, LogCategory::Logout, None),
    ];
    assert_eq!(available_categories(&logs), vec![LogCategory::Login, LogCategory::Logout]);
}

#[test]
fn interface_filters_combine() {
    let logs = vec![
        interface("1", "enable", false, "sap", "Alpha", "2024-01-01T00:00:00"),
        interface("2", "disable", true, "sap", "Alpha", "2024-01-02T00:00:00"),
        interface("3", "enable", true, "crm", "Beta", "2024-01-03T00:00:00"),
    ];
    let failed = InterfaceLogFilters { did_fail: Some(true), ..InterfaceLogFilters::default() };
    assert_eq!(ids(&filter_interface_logs(&logs, &failed), |l| l.id.as_str()), ["2", "3"]);

    let narrow = InterfaceLogFilters {
        did_fail: Some(true),
        interface: Some("sap".to_owned()),
        project: Some("Alpha".to_owned()),
        ..InterfaceLogFilters::default()
    };
    assert_eq!(ids(&filter_interface_logs(&logs, &narrow), |l| l.id.as_str()), ["2"]);

    let kind = InterfaceLogFilters { alteration_type: Some("enable".to_owned()), ..InterfaceLogFilters::default() };
    assert_eq!(ids(&filter_interface_logs(&logs, &kind), |l| l.id.as_str()), ["1", "3"]);
}

#[test]
fn interface_choices_are_sorted_and_deduplicated() {
    let logs = vec![
        interface("1", "enable", false, "sap", "Beta", "2024-01-01T00:00:00"),
        interface("2", "disable", false, "crm", "Alpha", "2024-01-01T00:00:00"),
        interface("3", "enable", false, "sap", "Alpha", "2024-01-01T00:00:00"),
    ];
    let (kinds, interfaces, projects) = interface_filter_choices(&logs);
    assert_eq!(kinds, ["disable", "enable"]);
    assert_eq!(interfaces, ["crm", "sap"]);
    assert_eq!(projects, ["Alpha", "Beta"]);
}

#[test]
fn system_csv_uses_labels_and_formatted_time() {
    let logs = vec![system("7", Some("bob"), LogCategory::AutoLogout, Some("2024-05-06T07:08:09Z"))];
    let csv = system_logs_csv(&logs).render();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(r#""ID","Username","Action","Timestamp","Description""#));
    assert_eq!(lines.next(), Some(r#""7","bob","Automatic logout","2024-05-06 07:08:09","entry 7""#));
}

#[test]
fn interface_csv_marks_failures() {
    let logs = vec![interface("1", "enable", true, "sap", "Alpha", "2024-01-01T00:00:00")];
    let csv = interface_logs_csv(&logs).render();
    assert!(csv.lines().nth(1).is_some_and(|row| row.starts_with(r#""1","alice","enable","Yes","sap","Alpha","#)));
}

#[test]
fn pdf_exports_render_documents() {
    let logs = vec![system("1", Some("bob"), LogCategory::Login, None)];
    assert!(system_logs_pdf(&logs).render().starts_with(b"%PDF-1.4"));
    let ilogs = vec![interface("1", "enable", true, "sap", "Alpha", "2024-01-01T00:00:00")];
    assert_eq!(interface_logs_pdf(&ilogs).page_count(), 1);
}

#[test]
fn stream_keeps_items_when_a_retry_fails() {
    let mut stream = LogStream::<u32>::default();
    assert!(stream.loading);
    stream.finish(Ok(vec![1, 2]));
    assert!(!stream.loading);
    stream.begin();
    assert!(stream.error.is_none());
    stream.finish(Err("boom".to_owned()));
    assert_eq!(stream.items, [1, 2]);
    assert_eq!(stream.error.as_deref(), Some("boom"));
}
