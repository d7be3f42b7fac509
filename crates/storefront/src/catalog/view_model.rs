//! Catalog view-model: fetched products plus the derived visible sequence.

use bramble_core::{Price, Product};
use tracing::instrument;

use super::CatalogClient;

/// Message stored on the view-model when the fetch fails.
///
/// The error is deliberately opaque: detail goes to the log, the caller
/// gets a display string.
const FETCH_ERROR_MESSAGE: &str = "Error fetching products";

/// Sort order for the visible sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the filtered order unchanged.
    #[default]
    Default,
    /// Stable sort by price, ascending.
    PriceLowToHigh,
    /// Stable sort by price, descending.
    PriceHighToLow,
}

/// Category selection: the "all" sentinel or one observed category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Keep only products whose category equals this value.
    Only(String),
}

/// The current search/category/price/sort selections driving the visible
/// subset. Ephemeral UI state; never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive title substring; empty means no text filter.
    pub search: String,
    /// Category restriction.
    pub category: CategoryFilter,
    /// Inclusive lower price bound; `None` means unbounded.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound; `None` means unbounded.
    pub max_price: Option<Price>,
    /// Sort applied after all filters.
    pub sort: SortOrder,
}

/// Owns the fetched product list and the derived, filtered/sorted visible
/// sequence.
///
/// Each setter mutates the criteria and eagerly recomputes the visible
/// sequence, so reads through [`Self::visible`] always reflect the latest
/// inputs. Created in the loading state, matching a page that renders
/// before its first fetch completes.
#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    products: Vec<Product>,
    visible: Vec<Product>,
    criteria: FilterCriteria,
    loading: bool,
    error: Option<String>,
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogViewModel {
    /// Create an empty view-model in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            visible: Vec::new(),
            criteria: FilterCriteria::default(),
            loading: true,
            error: None,
        }
    }

    /// Fetch the catalog once and store the result.
    ///
    /// On success the full list replaces the stored products; on failure an
    /// opaque error message is stored instead. Either way loading completes
    /// and the visible sequence is recomputed. Taking `&mut self` serializes
    /// fetches on one view-model; a completed fetch replaces the list
    /// wholesale, so overlapping fetches through clones are last-write-wins.
    #[instrument(skip_all)]
    pub async fn fetch_catalog(&mut self, client: &CatalogClient) {
        match client.fetch_products().await {
            Ok(products) => {
                self.products = (*products).clone();
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch products");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        self.recompute_visible();
    }

    /// Set the search text and recompute.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
        self.recompute_visible();
    }

    /// Set the category selection and recompute.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.recompute_visible();
    }

    /// Set the price bounds from raw user input and recompute.
    ///
    /// Empty or non-numeric input is an absent bound, never zero.
    pub fn set_price_range(&mut self, min: &str, max: &str) {
        self.criteria.min_price = Price::parse(min);
        self.criteria.max_price = Price::parse(max);
        self.recompute_visible();
    }

    /// Set the sort order and recompute.
    pub fn set_sort_order(&mut self, sort: SortOrder) {
        self.criteria.sort = sort;
        self.recompute_visible();
    }

    /// The product list currently eligible for display.
    #[must_use]
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// The full fetched product list, unfiltered.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Whether the initial fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The fetch error message, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The sorted, de-duplicated categories observed in the fetched list.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Recompute the visible sequence from the stored products and criteria.
    ///
    /// Fixed pipeline: category filter, title substring filter, min-price
    /// filter, max-price filter, then the (stable) sort. The result replaces
    /// the previous sequence in one assignment.
    fn recompute_visible(&mut self) {
        let search = self.criteria.search.to_lowercase();

        let mut filtered: Vec<Product> = self
            .products
            .iter()
            .filter(|p| match &self.criteria.category {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => &p.category == category,
            })
            .filter(|p| search.is_empty() || p.title.to_lowercase().contains(&search))
            .filter(|p| self.criteria.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| self.criteria.max_price.is_none_or(|max| p.price <= max))
            .cloned()
            .collect();

        match self.criteria.sort {
            SortOrder::Default => {}
            SortOrder::PriceLowToHigh => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceHighToLow => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        self.visible = filtered;
    }
}
