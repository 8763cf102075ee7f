//! List query parameters.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Maximum page size; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    /// Parse a direction string; anything other than `"desc"` is ascending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Parameters for one paginated list request.
///
/// Ephemeral — constructed per request and discarded. `page_size` is
/// clamped to `[1, MAX_PAGE_SIZE]` at construction so the rest of the
/// pipeline never sees an out-of-range value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-based).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// External sort key (optional).
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_direction: SortDirection,
    /// Free-text search term (optional).
    pub search: Option<String>,
    /// Explicit filters in `key1:value1,key2:value2` form (optional).
    pub filter: Option<String>,
}

impl ListParams {
    /// Create parameters for the given page and size, clamping both.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            sort_by: None,
            sort_direction: SortDirection::Asc,
            search: None,
            filter: None,
        }
    }

    /// Set the sort key and direction.
    pub fn with_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(key.into());
        self.sort_direction = direction;
        self
    }

    /// Set the free-text search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the filter string.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Number of rows to skip before the current page window.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped_to_maximum() {
        assert_eq!(ListParams::new(1, 500).page_size, MAX_PAGE_SIZE);
        assert_eq!(ListParams::new(1, 51).page_size, 50);
        assert_eq!(ListParams::new(1, 50).page_size, 50);
    }

    #[test]
    fn page_size_is_clamped_to_minimum() {
        assert_eq!(ListParams::new(1, 0).page_size, 1);
    }

    #[test]
    fn page_number_floors_at_one() {
        assert_eq!(ListParams::new(0, 10).page, 1);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(ListParams::new(1, 10).offset(), 0);
        assert_eq!(ListParams::new(3, 10).offset(), 20);
    }

    #[test]
    fn direction_parses_leniently() {
        assert_eq!(SortDirection::parse_lenient("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_lenient("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_lenient("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::parse_lenient("sideways"), SortDirection::Asc);
    }
}
