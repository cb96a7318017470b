//! Query engine: the five month-scoped operations and their response shapes
//!
//! Every operation resolves the month before touching the store, then takes
//! exactly one snapshot read. `combined` derives all four sub-results from
//! the same month-filtered base, so they can never disagree about which
//! records exist.

use super::category::{build_category_counts, CategoryCount};
use super::filter::{filter_by_month, filter_by_search};
use super::histogram::{build_histogram, PriceHistogram};
use super::listing::Pagination;
use super::month::Month;
use super::stats::{compute_statistics, SaleStatistics};
use super::EngineError;
use crate::record::SaleRecord;
use crate::store::RecordStore;
use serde::Serialize;
use std::sync::Arc;

/// Parameters for the listing and combined operations.
#[derive(Debug, Clone)]
pub struct ListingRequest {
    pub month: String,
    pub search: String,
    pub pagination: Pagination,
}

impl ListingRequest {
    /// Month-only request: no search, first page, default page size
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            search: String::new(),
            pagination: Pagination::default(),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.pagination = Pagination::new(page, self.pagination.per_page);
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.pagination = Pagination::new(self.pagination.page, per_page);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

/// One page of the filtered listing. `total` counts every record matching
/// month and search, not just the page returned.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub total: usize,
    pub page: usize,
    #[serde(rename = "perPage")]
    pub per_page: usize,
    pub transactions: Vec<SaleRecord>,
}

/// All four month-scoped results assembled from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedView {
    pub transactions: ListingPage,
    pub statistics: SaleStatistics,
    #[serde(rename = "barChart")]
    pub bar_chart: PriceHistogram,
    #[serde(rename = "pieChart")]
    pub pie_chart: Vec<CategoryCount>,
}

/// Read-only query engine over a record store.
///
/// Stateless across calls; cloning is cheap (shared store handle).
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn RecordStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Paginated, searchable listing for one month.
    pub async fn list(&self, request: &ListingRequest) -> Result<ListingPage, EngineError> {
        let month = resolve_month(&request.month)?;
        let base = self.month_snapshot(month).await?;
        Ok(build_listing(&base, request))
    }

    /// Sale amount and sold/not-sold totals for one month.
    pub async fn statistics(&self, month_name: &str) -> Result<SaleStatistics, EngineError> {
        let month = resolve_month(month_name)?;
        let base = self.month_snapshot(month).await?;
        Ok(compute_statistics(&base))
    }

    /// Price-range histogram for one month.
    pub async fn price_histogram(&self, month_name: &str) -> Result<PriceHistogram, EngineError> {
        let month = resolve_month(month_name)?;
        let base = self.month_snapshot(month).await?;
        Ok(build_histogram(&base))
    }

    /// Per-category counts for one month.
    pub async fn category_breakdown(
        &self,
        month_name: &str,
    ) -> Result<Vec<CategoryCount>, EngineError> {
        let month = resolve_month(month_name)?;
        let base = self.month_snapshot(month).await?;
        Ok(build_category_counts(&base))
    }

    /// Listing, statistics, and both charts in one response.
    ///
    /// The statistics and charts cover the whole month subset; only the
    /// listing additionally applies search and pagination. A store failure
    /// fails the whole call, never a partial view.
    pub async fn combined(&self, request: &ListingRequest) -> Result<CombinedView, EngineError> {
        let month = resolve_month(&request.month)?;
        let base = self.month_snapshot(month).await?;

        Ok(CombinedView {
            transactions: build_listing(&base, request),
            statistics: compute_statistics(&base),
            bar_chart: build_histogram(&base),
            pie_chart: build_category_counts(&base),
        })
    }

    /// One snapshot read, reduced to the requested month
    async fn month_snapshot(&self, month: Month) -> Result<Vec<SaleRecord>, EngineError> {
        let snapshot = self.store.load_all().await?;
        Ok(filter_by_month(&snapshot, month))
    }
}

fn resolve_month(name: &str) -> Result<Month, EngineError> {
    Month::resolve(name).ok_or_else(|| EngineError::InvalidMonth(name.to_string()))
}

fn build_listing(month_filtered: &[SaleRecord], request: &ListingRequest) -> ListingPage {
    let matches = filter_by_search(month_filtered, &request.search);
    let transactions = request.pagination.slice(&matches).to_vec();

    ListingPage {
        total: matches.len(),
        page: request.pagination.page,
        per_page: request.pagination.per_page,
        transactions,
    }
}
