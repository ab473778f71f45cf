use super::*;

#[test]
fn count_label_shows_dash_until_known() {
    assert_eq!(count_label(None), "-");
    assert_eq!(count_label(Some(0)), "0");
    assert_eq!(count_label(Some(12)), "12");
}

#[test]
fn counted_maps_failures_to_unknown() {
    assert_eq!(counted("patients", Ok(vec![1, 2, 3])), Some(3));
    assert_eq!(counted::<u8>("patients", Err(ApiError::Unavailable)), None);
}
