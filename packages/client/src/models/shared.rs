use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Pagination metadata included in list responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

/// Common paging parameters for list endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageQuery {
    /// Append the set parameters to a query-string pair list.
    pub(crate) fn push_to(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
    }
}

/// Request body for reordering a course's tutorials or content pages.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    /// Item ids in their new order. Must cover every item exactly once.
    pub ids: Vec<i32>,
}

/// Validate a trimmed title (1-256 Unicode characters).
pub fn validate_title(title: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > 256 {
        return Err(ClientError::Validation(
            "Title must be 1-256 characters".into(),
        ));
    }
    Ok(())
}

/// Validate an ordered ID list for reorder operations (non-empty, no duplicates).
pub fn validate_reorder_ids(ids: &[i32], name: &str) -> Result<()> {
    if ids.is_empty() {
        return Err(ClientError::Validation(format!(
            "{name} list must not be empty"
        )));
    }
    let mut seen = std::collections::HashSet::new();
    for &id in ids {
        if !seen.insert(id) {
            return Err(ClientError::Validation(format!(
                "Duplicate {name} {id} in reorder list"
            )));
        }
    }
    Ok(())
}

/// Validate an entity id received from user input (must be positive).
pub fn validate_id(id: i32, name: &str) -> Result<()> {
    if id <= 0 {
        return Err(ClientError::Validation(format!(
            "{name} must be a positive id, got {id}"
        )));
    }
    Ok(())
}
