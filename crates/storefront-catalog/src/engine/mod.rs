//! The filtering/faceting engine.
//!
//! Composes the category tree, the compiled product query, the facet
//! computer, and the query executor behind the two caller-facing
//! operations: filter a product page and compute facets.

mod assemble;
mod executor;
mod facets;
mod query;
mod store;

pub use assemble::assemble_page;
pub use executor::{QueryExecutor, QueryOutcome};
pub use facets::FacetComputer;
pub use query::{compare_products, ProductQuery};
pub use store::ProductStore;

use crate::catalog::{Category, CategoryTree};
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::{Facet, FilterCriteria, PageRequest, ProductPage, SortKey};
use std::collections::HashSet;

/// The catalog filtering engine.
///
/// Owns a snapshot of the flat category list and a product store reference.
/// Stateless across requests: the category tree is rebuilt per call from the
/// snapshot, and criteria are immutable values, so concurrent callers never
/// interfere. There is no write path here.
pub struct CatalogEngine<S> {
    store: S,
    categories: Vec<Category>,
}

impl<S: ProductStore> CatalogEngine<S> {
    /// Create an engine over a store and a category-list snapshot.
    ///
    /// The composition root owns both; the engine holds no global state.
    pub fn new(store: S, categories: Vec<Category>) -> Self {
        Self { store, categories }
    }

    /// Fetch one sorted, paginated page of products matching the criteria,
    /// decorated with the caller's favorites.
    pub fn filter_products(
        &self,
        criteria: &FilterCriteria,
        page: &PageRequest,
        sort: SortKey,
        favorites: &HashSet<ProductId>,
    ) -> Result<ProductPage, CatalogError> {
        let tree = CategoryTree::build(&self.categories);
        let outcome = QueryExecutor::new(&self.store, &tree).execute(criteria, page, sort)?;
        Ok(assemble_page(outcome, page, favorites))
    }

    /// Compute the selectable facet values consistent with the criteria.
    pub fn facets(&self, criteria: &FilterCriteria) -> Result<Vec<Facet>, CatalogError> {
        let tree = CategoryTree::build(&self.categories);
        FacetComputer::new(&self.store, &tree).compute(criteria)
    }
}
