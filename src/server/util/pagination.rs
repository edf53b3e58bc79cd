//! Page arithmetic and hypermedia link building for list endpoints.
//!
//! Pages are 1-based on the wire. `PageRequest` clamps raw query values into range and
//! `LinkBuilder` renders `self`, `prev` and `next` links of the form
//! `{origin}{base_path}?page={n}&pageSize={size}`.

use url::form_urlencoded;

use crate::model::api::LinkDto;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// A validated page selection.
///
/// `page` is at least 1 and `page_size` lies within `1..=MAX_PAGE_SIZE`. Pages past the
/// last one are allowed and simply select no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a page selection from raw query values, applying defaults and clamping.
    ///
    /// # Arguments
    /// - `page` - Requested 1-based page; missing or below 1 becomes 1
    /// - `page_size` - Requested page size; missing becomes 10, clamped to `[1, 100]`
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE as i64).max(1) as u64;
        let page_size = page_size
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .clamp(1, MAX_PAGE_SIZE as i64) as u64;

        Self { page, page_size }
    }

    /// Zero-based page index as expected by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Whether this page starts before the end of `total` rows.
    ///
    /// Pages past the end are never sent to the database. Their offset can exceed what
    /// SQL accepts, or overflow entirely for very large page numbers.
    pub fn selects_rows(&self, total: u64) -> bool {
        self.index()
            .checked_mul(self.page_size)
            .is_some_and(|offset| offset < total)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Number of pages needed to show `total` items, `ceil(total / page_size)`.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Renders navigation links for one list endpoint.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    origin: String,
    base_path: String,
    /// Extra query parameters repeated on every link, such as list filters.
    query: Vec<(String, String)>,
}

impl LinkBuilder {
    /// Creates a builder for the endpoint at `base_path` served from `origin`.
    ///
    /// # Arguments
    /// - `origin` - `{scheme}://{host}` without a trailing slash
    /// - `base_path` - Endpoint path such as `/api/zonas`
    pub fn new(origin: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            base_path: base_path.into(),
            query: Vec::new(),
        }
    }

    /// Carries a filter parameter into every generated link; `None` is skipped.
    pub fn with_query(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Absolute URL of `page` with the given page size.
    pub fn href(&self, page: u64, page_size: u64) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string());
        for (key, value) in &self.query {
            query.append_pair(key, value);
        }

        format!("{}{}?{}", self.origin, self.base_path, query.finish())
    }

    /// Builds the navigation links of a page.
    ///
    /// - `self` is always present
    /// - `prev` is present when `page > 1`
    /// - `next` is present when `page < total_pages`
    ///
    /// # Arguments
    /// - `request` - The page being rendered
    /// - `total` - Total number of items across all pages
    pub fn page_links(&self, request: PageRequest, total: u64) -> Vec<LinkDto> {
        let last_page = total_pages(total, request.page_size);
        let mut links = vec![self.link("self", request.page, request.page_size)];

        if request.page > 1 {
            links.push(self.link("prev", request.page - 1, request.page_size));
        }

        if request.page < last_page {
            links.push(self.link("next", request.page + 1, request.page_size));
        }

        links
    }

    fn link(&self, rel: &str, page: u64, page_size: u64) -> LinkDto {
        LinkDto {
            rel: rel.to_string(),
            href: self.href(page, page_size),
            method: "GET".to_string(),
        }
    }
}
