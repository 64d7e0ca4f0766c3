//! Post listing filters and the pagination envelope.

use serde::{Deserialize, Serialize};

use super::post::PostDetail;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 6;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalised page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: u64,
    /// Rows per page
    pub limit: u64,
}

impl PageRequest {
    /// Build from raw client values.
    ///
    /// - Missing or non-positive pages become page 1
    /// - Missing or non-positive limits become the default
    /// - Limits are capped at `MAX_PAGE_SIZE`
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1) as u64;
        let limit = limit
            .filter(|l| *l >= 1)
            .map(|l| (l as u64).min(MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self { page, limit }
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Filters for the post listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub page: PageRequest,
    /// Exact category name.
    pub category: Option<String>,
    /// Case-insensitive substring of title, description or content.
    pub keyword: Option<String>,
}

impl PostQuery {
    /// Blank filter values are treated as absent.
    pub fn new(page: PageRequest, category: Option<String>, keyword: Option<String>) -> Self {
        Self {
            page,
            category: category.filter(|c| !c.trim().is_empty()),
            keyword: keyword.filter(|k| !k.trim().is_empty()),
        }
    }
}

/// One page of posts plus the totals needed to page through the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub total_posts: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
    pub posts: Vec<PostDetail>,
    /// `None` (serialized as `null`) on the last page.
    pub next_page: Option<u64>,
}

impl PostPage {
    pub fn new(posts: Vec<PostDetail>, total_posts: u64, request: PageRequest) -> Self {
        let total_pages = total_posts.div_ceil(request.limit);
        let next_page = (request.page < total_pages).then(|| request.page + 1);

        Self {
            total_posts,
            total_pages,
            current_page: request.page,
            limit: request.limit,
            posts,
            next_page,
        }
    }
}
