//! List query parameter extractor.

use serde::{Deserialize, Serialize};

use pumpmaster_core::error::AppError;
use pumpmaster_core::query::{ListParams, SortDirection};

/// Query parameters accepted by paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQueryParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (default: 10, clamped to 50).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Sort field (optional).
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc".
    pub sort_direction: Option<String>,
    /// Free-text search term (optional).
    pub search: Option<String>,
    /// Filter string `key1:value1,key2:value2` (optional).
    pub filter: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl ListQueryParams {
    /// Converts to engine [`ListParams`], rejecting a zero page number
    /// before the query engine ever runs.
    pub fn into_params(self) -> Result<ListParams, AppError> {
        if self.page < 1 {
            return Err(AppError::validation("Page number must be greater than 0"));
        }

        let mut params = ListParams::new(self.page, self.page_size);
        params.sort_by = self.sort_by;
        params.sort_direction = self
            .sort_direction
            .as_deref()
            .map(SortDirection::parse_lenient)
            .unwrap_or_default();
        params.search = self.search;
        params.filter = self.filter;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(page: u32, page_size: u32) -> ListQueryParams {
        ListQueryParams {
            page,
            page_size,
            sort_by: None,
            sort_direction: None,
            search: None,
            filter: None,
        }
    }

    #[test]
    fn zero_page_is_rejected_not_clamped() {
        assert!(raw(0, 10).into_params().is_err());
    }

    #[test]
    fn oversized_page_size_is_clamped_to_fifty() {
        let params = raw(1, 200).into_params().unwrap();
        assert_eq!(params.page_size, 50);
    }

    #[test]
    fn direction_defaults_to_ascending() {
        let params = raw(1, 10).into_params().unwrap();
        assert_eq!(params.sort_direction, SortDirection::Asc);
    }
}
