//! Fixed-size client-side pagination.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

pub const SESSIONS_PER_PAGE: usize = 5;

/// Number of pages needed for `len` items; an empty list still has one page.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// Clamp a 1-based page number into range.
pub fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.clamp(1, total_pages(len, per_page))
}

/// Items on 1-based `page`; out-of-range pages are clamped.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 {
        return items;
    }
    let page = clamp_page(page, items.len(), per_page);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    items.get(start..end).unwrap_or(&[])
}
