use super::*;

#[test]
fn format_date_rfc3339_utc() {
    assert_eq!(format_date(Some("2023-01-10T09:00:00Z")), "10.01.2023");
}

#[test]
fn format_date_keeps_source_offset() {
    assert_eq!(format_date(Some("2023-03-31T23:30:00.000-05:00")), "31.03.2023");
    assert_eq!(format_date(Some("2023-04-01T01:15:00+03:00")), "01.04.2023");
}

#[test]
fn format_date_accepts_naive_and_date_only() {
    assert_eq!(format_date(Some("2022-12-05T10:00:00")), "05.12.2022");
    assert_eq!(format_date(Some("2022-12-05")), "05.12.2022");
}

#[test]
fn format_date_missing_or_blank_is_placeholder() {
    assert_eq!(format_date(None), EMPTY_CELL);
    assert_eq!(format_date(Some("  ")), EMPTY_CELL);
}

#[test]
fn format_date_unparsable_passes_through() {
    assert_eq!(format_date(Some("yesterday")), "yesterday");
}

#[test]
fn format_deferral_days_appends_unit() {
    assert_eq!(format_deferral_days(30), "30 дней");
    assert_eq!(format_deferral_days(0), "0 дней");
}
