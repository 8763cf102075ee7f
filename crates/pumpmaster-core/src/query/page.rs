//! Page windowing and paging metadata.

use serde::{Deserialize, Serialize};

use super::params::ListParams;

/// One page of results plus paging metadata.
///
/// `total_count` and `total_pages` describe the filtered-but-unpaged set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Total matching items across all pages.
    pub total_count: u64,
    /// Current page number (1-based).
    pub page: u32,
    /// Effective page size.
    pub page_size: u32,
    /// Total number of pages (0 when nothing matched).
    pub total_pages: u32,
    /// Whether a previous page exists.
    pub has_previous_page: bool,
    /// Whether a next page exists.
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// Assemble a page from pre-windowed data and the unpaged total.
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_count: u64) -> Self {
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count.div_ceil(page_size as u64)) as u32
        };
        Self {
            data,
            total_count,
            page,
            page_size,
            total_pages,
            has_previous_page: page > 1,
            has_next_page: page < total_pages,
        }
    }

    /// Convert each row while keeping the paging metadata intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

/// Window the filtered (and optionally sorted) rows into one page.
///
/// The total is taken before windowing. A page number past the end yields
/// an empty page with intact metadata rather than an error.
pub fn paginate<T>(rows: Vec<T>, params: &ListParams) -> Page<T> {
    let total_count = rows.len() as u64;
    let data: Vec<T> = rows
        .into_iter()
        .skip(params.offset())
        .take(params.page_size as usize)
        .collect();
    Page::new(data, params.page, params.page_size, total_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_of_count_over_size() {
        let page = Page::new(Vec::<u32>::new(), 1, 10, 21);
        assert_eq!(page.total_pages, 3);
        let page = Page::new(Vec::<u32>::new(), 1, 10, 20);
        assert_eq!(page.total_pages, 2);
        let page = Page::new(Vec::<u32>::new(), 1, 7, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn empty_set_has_zero_pages() {
        let page = Page::new(Vec::<u32>::new(), 1, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn navigation_flags_follow_page_position() {
        let page = Page::new(vec![1], 2, 1, 3);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);

        let page = Page::new(vec![1], 3, 1, 3);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);

        let page = Page::new(vec![1], 1, 1, 3);
        assert!(!page.has_previous_page);
        assert!(page.has_next_page);
    }

    #[test]
    fn window_never_exceeds_page_size() {
        let rows: Vec<u32> = (0..25).collect();
        let result = paginate(rows, &ListParams::new(2, 10));
        assert_eq!(result.data, (10..20).collect::<Vec<u32>>());
        assert_eq!(result.total_count, 25);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn page_beyond_end_is_empty_with_correct_metadata() {
        let rows: Vec<u32> = (0..5).collect();
        let result = paginate(rows, &ListParams::new(9, 10));
        assert!(result.data.is_empty());
        assert_eq!(result.total_count, 5);
        assert_eq!(result.total_pages, 1);
        assert!(!result.has_next_page);
        assert!(result.has_previous_page);
    }

    #[test]
    fn map_preserves_metadata() {
        let result = paginate((0..5).collect::<Vec<u32>>(), &ListParams::new(1, 2));
        let mapped = result.map(|n| n.to_string());
        assert_eq!(mapped.data, vec!["0".to_string(), "1".to_string()]);
        assert_eq!(mapped.total_count, 5);
        assert_eq!(mapped.total_pages, 3);
    }
}
