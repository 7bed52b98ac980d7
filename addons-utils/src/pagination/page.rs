//! Pure pagination math and page-window shaping helpers.

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return start/end indices for a page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = (start + safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Partition a page window into contiguous, order-preserving column chunks.
///
/// Each chunk holds `ceil(len / columns)` items; trailing empty chunks are
/// omitted. Returned pairs carry the chunk's offset within the window so
/// callers can keep numbering continuous across columns.
pub fn column_chunks(window: &[String], columns: usize) -> Vec<(usize, &[String])> {
    let per_column = window.len().div_ceil(columns.max(1)).max(1);

    window
        .chunks(per_column)
        .enumerate()
        .map(|(index, chunk)| (index * per_column, chunk))
        .collect()
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}
