use super::*;

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(11, 5), 3);
}

#[test]
fn zero_page_size_is_a_single_page() {
    assert_eq!(total_pages(12, 0), 1);
    assert_eq!(page_slice(&[1, 2, 3], 2, 0), &[1, 2, 3]);
}

#[test]
fn page_slice_returns_window() {
    let items: Vec<u32> = (1..=12).collect();
    assert_eq!(page_slice(&items, 1, SESSIONS_PER_PAGE), &[1, 2, 3, 4, 5]);
    assert_eq!(page_slice(&items, 3, SESSIONS_PER_PAGE), &[11, 12]);
}

#[test]
fn out_of_range_pages_are_clamped() {
    let items: Vec<u32> = (1..=7).collect();
    assert_eq!(page_slice(&items, 0, 5), &[1, 2, 3, 4, 5]);
    assert_eq!(page_slice(&items, 9, 5), &[6, 7]);
    assert_eq!(clamp_page(9, 7, 5), 2);
}

#[test]
fn empty_list_yields_empty_page() {
    let items: Vec<u32> = Vec::new();
    assert!(page_slice(&items, 1, 5).is_empty());
}
