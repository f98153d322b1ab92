//! The product store collaborator seam.

use crate::catalog::Product;
use crate::engine::query::ProductQuery;
use crate::error::StoreError;
use crate::ids::CategoryId;
use crate::price::Price;
use crate::search::SortKey;
use std::collections::HashSet;

/// Read-only query interface the engine requires from its storage
/// collaborator.
///
/// The engine compiles criteria into [`ProductQuery`] values; a backend
/// either translates the query fields into its native query language or
/// evaluates [`ProductQuery::matches`] over a scan. All methods are
/// independent reads with no ordering dependency between them, so a backend
/// may serve them concurrently.
pub trait ProductStore {
    /// Fetch one sorted page of matching products.
    ///
    /// Sorting is availability-first, then the requested key; `offset` rows
    /// are skipped and at most `limit` rows returned.
    fn fetch_page(
        &self,
        query: &ProductQuery,
        sort: SortKey,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Product>, StoreError>;

    /// Count all matching products.
    fn count(&self, query: &ProductQuery) -> Result<u64, StoreError>;

    /// Maximum price among matching products, `None` when nothing matches.
    fn max_price(&self, query: &ProductQuery) -> Result<Option<Price>, StoreError>;

    /// Distinct manufacturer names among matching products, ascending.
    fn manufacturers(&self, query: &ProductQuery) -> Result<Vec<String>, StoreError>;

    /// The set of category ids present on matching products.
    fn category_ids_with_products(
        &self,
        query: &ProductQuery,
    ) -> Result<HashSet<CategoryId>, StoreError>;
}

impl<S: ProductStore + ?Sized> ProductStore for &S {
    fn fetch_page(
        &self,
        query: &ProductQuery,
        sort: SortKey,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Product>, StoreError> {
        (**self).fetch_page(query, sort, offset, limit)
    }

    fn count(&self, query: &ProductQuery) -> Result<u64, StoreError> {
        (**self).count(query)
    }

    fn max_price(&self, query: &ProductQuery) -> Result<Option<Price>, StoreError> {
        (**self).max_price(query)
    }

    fn manufacturers(&self, query: &ProductQuery) -> Result<Vec<String>, StoreError> {
        (**self).manufacturers(query)
    }

    fn category_ids_with_products(
        &self,
        query: &ProductQuery,
    ) -> Result<HashSet<CategoryId>, StoreError> {
        (**self).category_ids_with_products(query)
    }
}
