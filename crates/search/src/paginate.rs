//! Result pagination
//!
//! Normalizes page number and size to defaults and bounds, then slices the
//! final ordered list. There are no error conditions: out-of-range input
//! is silently clamped, which is a normalization, not an error.

use rummage_core::PageRequest;

/// Slice one page out of an ordered result list
///
/// - page defaults to 1 when absent or below 1
/// - size defaults to 15 when absent or below 1
/// - page is clamped to the last non-empty page
/// - an empty input yields an empty result for any page/size
pub fn paginate<T: Clone>(items: &[T], page: Option<i32>, size: Option<i32>) -> Vec<T> {
    page_slice(items, &PageRequest::new(page, size)).to_vec()
}

/// Borrowing form of [`paginate`] over a normalized [`PageRequest`]
pub fn page_slice<'a, T>(items: &'a [T], request: &PageRequest) -> &'a [T] {
    let size = request.normalized_size();
    let page = request.normalized_page();

    let max_page = ((items.len() + size - 1) / size).max(1);
    let page = page.min(max_page);

    let from = ((page - 1) * size).min(items.len());
    let to = (from + size).min(items.len());
    &items[from..to]
}
