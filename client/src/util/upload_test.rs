use super::*;

#[test]
fn csv_extension_is_accepted_case_insensitively() {
    assert_eq!(validate_csv_filename("sales.csv"), Ok(()));
    assert_eq!(validate_csv_filename("SALES.CSV"), Ok(()));
}

#[test]
fn other_files_are_rejected() {
    assert!(validate_csv_filename("sales.xlsx").is_err());
    assert!(validate_csv_filename("csv").is_err());
    assert!(validate_csv_filename(".csv").is_err());
    assert_eq!(validate_csv_filename(""), Err("Please select a file to upload."));
}

#[test]
fn upload_needs_project_interface_and_valid_file() {
    assert!(can_upload(Some("1"), Some("sales"), Some("a.csv"), false));
    assert!(!can_upload(Some("1"), Some("sales"), Some("a.csv"), true));
    assert!(!can_upload(None, Some("sales"), Some("a.csv"), false));
    assert!(!can_upload(Some("1"), Some(""), Some("a.csv"), false));
    assert!(!can_upload(Some("1"), Some("sales"), Some("a.txt"), false));
}
