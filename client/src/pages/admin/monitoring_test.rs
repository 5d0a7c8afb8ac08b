use super::*;

#[test]
fn date_value_formats_for_date_inputs() {
    assert_eq!(date_value(chrono::NaiveDate::from_ymd_opt(2024, 3, 9)), "2024-03-09");
    assert_eq!(date_value(None), "");
}

#[test]
fn empty_select_value_means_no_filter() {
    assert_eq!(option_or_none(String::new()), None);
    assert_eq!(option_or_none("csv".to_owned()), Some("csv".to_owned()));
}
