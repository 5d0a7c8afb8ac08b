use super::*;

#[test]
fn file_name_appends_missing_extension() {
    assert_eq!(file_name("users_list", "csv"), "users_list.csv");
    assert_eq!(file_name("logs.CSV", "csv"), "logs.CSV");
    assert_eq!(file_name("report", "pdf"), "report.pdf");
}

#[test]
fn save_is_a_no_op_off_browser() {
    save_text("a,b", "x.csv", crate::util::csv::CSV_MIME);
}
