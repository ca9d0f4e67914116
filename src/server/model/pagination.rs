//! Pagination and sort contract shared by every course listing.
//!
//! Raw query strings are normalised here so that malformed input silently falls back
//! to defaults instead of rejecting the request.

use crate::model::api::PageQuery;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MIN_PAGE_SIZE: u64 = 5;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Column a course listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Hours,
    StartDate,
}

impl SortField {
    /// Accepts `id`, `hours` and `startdate`; anything else sorts by `id`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("hours") => Self::Hours,
            Some("startdate") => Self::StartDate,
            _ => Self::Id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-insensitive `asc`/`desc`; anything else is ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_uppercase).as_deref() {
            Some("DESC") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// A normalised page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl PageRequest {
    /// Builds a page request from raw query string values.
    ///
    /// - `page`: unparseable or below 1 becomes 1
    /// - `page_size`: unparseable becomes 10, then clamped to `5..=100`
    /// - `sort_by` / `sort_order`: see [`SortField::parse`] and [`SortOrder::parse`]
    pub fn from_raw(
        page: Option<&str>,
        page_size: Option<&str>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        let page = page
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .map(|page| page as u64)
            .unwrap_or(DEFAULT_PAGE);

        let page_size = page_size
            .and_then(|value| value.trim().parse::<i64>().ok())
            .map(|size| size.clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as u64)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            page,
            page_size,
            sort_by: SortField::parse(sort_by),
            sort_order: SortOrder::parse(sort_order),
        }
    }

    pub fn from_query(query: &PageQuery) -> Self {
        Self::from_raw(
            query.page.as_deref(),
            query.page_size.as_deref(),
            query.sort_by.as_deref(),
            query.sort_order.as_deref(),
        )
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// `ceil(total / page_size)`.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }
}

/// One page of results plus the totals needed to render a pager.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: request.total_pages(total),
        }
    }

    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), 0, request)
    }
}
