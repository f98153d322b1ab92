//! Product query execution.

use crate::catalog::{CategoryTree, Product};
use crate::engine::query::ProductQuery;
use crate::engine::store::ProductStore;
use crate::error::CatalogError;
use crate::price::Price;
use crate::search::{FilterCriteria, PageRequest, SortKey};
use tracing::debug;

/// Raw outcome of one filter query, before assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    /// The fetched page, sorted.
    pub products: Vec<Product>,
    /// Rows matching the price-bounded predicate.
    pub total_count: u64,
    /// Maximum price among rows matching the base predicate only; `None`
    /// when nothing matches even without price bounds.
    pub max_price: Option<Price>,
}

/// Runs the count, page, and price-ceiling queries for one criteria.
pub struct QueryExecutor<'a, S: ?Sized> {
    store: &'a S,
    tree: &'a CategoryTree,
}

impl<'a, S: ProductStore + ?Sized> QueryExecutor<'a, S> {
    pub fn new(store: &'a S, tree: &'a CategoryTree) -> Self {
        Self { store, tree }
    }

    /// Execute the three read queries.
    ///
    /// The price ceiling deliberately uses the base predicate, so narrowing
    /// the price slider never shrinks it; it only moves when a non-price
    /// filter changes. A category set that matches nothing yields an empty
    /// page with a zero count and no ceiling, never an error.
    pub fn execute(
        &self,
        criteria: &FilterCriteria,
        page: &PageRequest,
        sort: SortKey,
    ) -> Result<QueryOutcome, CatalogError> {
        let bounded = ProductQuery::price_bounded(criteria, self.tree);
        let base = ProductQuery::base(criteria, self.tree);

        let total_count = self.store.count(&bounded)?;
        let products = if total_count == 0 {
            Vec::new()
        } else {
            self.store
                .fetch_page(&bounded, sort, page.offset(), page.page_size)?
        };
        let max_price = self.store.max_price(&base)?;

        debug!(
            total_count,
            page = page.page,
            page_size = page.page_size,
            sort = sort.as_str(),
            "filter query executed"
        );

        Ok(QueryOutcome {
            products,
            total_count,
            max_price,
        })
    }
}
