use super::*;

// =============================================================
// parse_api_date
// =============================================================

#[test]
fn parses_plain_iso_date() {
    let dt = parse_api_date("2024-05-03").unwrap();
    assert_eq!((dt.year(), u8::from(dt.month()), dt.day()), (2024, 5, 3));
}

#[test]
fn parses_rfc3339_with_fraction() {
    let dt = parse_api_date("2024-12-31T23:10:00.000Z").unwrap();
    assert_eq!((dt.year(), dt.day(), dt.hour()), (2024, 31, 23));
}

#[test]
fn parses_epoch_millis_text() {
    let dt = parse_api_date("0").unwrap();
    assert_eq!(dt.year(), 1970);
}

#[test]
fn blank_and_garbage_do_not_parse() {
    assert!(parse_api_date("").is_none());
    assert!(parse_api_date("  ").is_none());
    assert!(parse_api_date("mañana").is_none());
}

#[test]
fn out_of_range_millis_do_not_parse() {
    assert!(from_millis(i64::MAX).is_none());
    assert_eq!(format_date_dmy("99999999999999999"), "99999999999999999");
}

// =============================================================
// formatting
// =============================================================

#[test]
fn format_date_dmy_reorders_components() {
    assert_eq!(format_date_dmy("2024-05-03"), "03-05-2024");
    assert_eq!(format_date_dmy("2024-05-03T10:00:00Z"), "03-05-2024");
}

#[test]
fn format_date_dmy_keeps_unparseable_text() {
    assert_eq!(format_date_dmy("sin fecha"), "sin fecha");
}

#[test]
fn millis_formatters_use_utc() {
    // 2023-11-14T22:13:20Z
    assert_eq!(format_millis_dmy(1_700_000_000_000), "14-11-2023");
    assert_eq!(format_millis_datetime(1_700_000_000_000), "14-11-2023 22:13");
}

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000);
}
