use super::*;

#[test]
fn parse_timestamp_accepts_backend_shapes() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5).and_then(|d| d.and_hms_opt(14, 7, 9));
    assert_eq!(parse_timestamp("2024-03-05T14:07:09"), expected);
    assert_eq!(parse_timestamp("2024-03-05 14:07:09"), expected);
    assert_eq!(parse_timestamp("2024-03-05T14:07:09Z"), expected);
    assert_eq!(parse_timestamp("2024-03-05T16:07:09+02:00"), expected);
    assert!(parse_timestamp("2024-03-05T14:07:09.123456").is_some());
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("yesterday"), None);
}

#[test]
fn format_timestamp_normalises_or_passes_through() {
    assert_eq!(format_timestamp("2024-03-05T14:07:09.5"), "2024-03-05 14:07:09");
    assert_eq!(format_timestamp("n/a"), "n/a");
}

#[test]
fn date_input_parses_iso_days() {
    assert_eq!(parse_date_input("2024-01-31"), NaiveDate::from_ymd_opt(2024, 1, 31));
    assert_eq!(parse_date_input(""), None);
}

#[test]
fn describe_instant_formats_utc() {
    assert_eq!(describe_instant(0), "1970-01-01 00:00:00 UTC");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}
