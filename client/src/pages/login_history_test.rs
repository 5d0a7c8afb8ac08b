use super::*;

#[test]
fn not_found_reads_as_empty_history() {
    let result = history_or_empty(Err(ApiError::from_status(404, None)));
    assert_eq!(result.ok(), Some(Vec::new()));
}

#[test]
fn other_failures_are_kept() {
    let result = history_or_empty(Err(ApiError::from_status(500, None)));
    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
}

#[test]
fn entries_pass_through() {
    let rows = vec![LoginHistoryEntry::Text("Signed in".to_owned())];
    assert_eq!(history_or_empty(Ok(rows.clone())).ok(), Some(rows));
}
