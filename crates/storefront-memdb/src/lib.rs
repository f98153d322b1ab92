//! In-memory product store backend for the storefront catalog engine.
//!
//! Evaluates compiled [`ProductQuery`] values over a full scan of an owned
//! product list. Serves as the reference [`ProductStore`] implementation and
//! the integration-test harness; an indexed backend would translate the
//! query fields into its native query language instead.

use std::collections::{BTreeSet, HashSet};
use storefront_catalog::catalog::Product;
use storefront_catalog::engine::{compare_products, ProductQuery, ProductStore};
use storefront_catalog::search::SortKey;
use storefront_catalog::{CategoryId, Price, StoreError};

/// An in-memory, read-only product store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
}

impl MemoryStore {
    /// Create a store over a product snapshot.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of products in the snapshot (matching or not).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn matching<'a>(&'a self, query: &'a ProductQuery) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(|p| query.matches(p))
    }
}

impl ProductStore for MemoryStore {
    fn fetch_page(
        &self,
        query: &ProductQuery,
        sort: SortKey,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Product>, StoreError> {
        let mut matches: Vec<&Product> = self.matching(query).collect();
        matches.sort_by(|a, b| compare_products(a, b, sort));
        Ok(matches
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    fn count(&self, query: &ProductQuery) -> Result<u64, StoreError> {
        Ok(self.matching(query).count() as u64)
    }

    fn max_price(&self, query: &ProductQuery) -> Result<Option<Price>, StoreError> {
        Ok(self.matching(query).map(|p| p.price).max())
    }

    fn manufacturers(&self, query: &ProductQuery) -> Result<Vec<String>, StoreError> {
        let distinct: BTreeSet<String> = self
            .matching(query)
            .map(|p| p.manufacturer.clone())
            .collect();
        Ok(distinct.into_iter().collect())
    }

    fn category_ids_with_products(
        &self,
        query: &ProductQuery,
    ) -> Result<HashSet<CategoryId>, StoreError> {
        let mut ids = HashSet::new();
        for product in self.matching(query) {
            ids.extend(product.category_ids.iter().cloned());
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::catalog::{Availability, Category, CategoryTree};
    use storefront_catalog::search::FilterCriteria;

    fn store() -> MemoryStore {
        let mut cheap = Product::new("p1", "Oil A", "Shell", "S1", Price::from_cents(1000));
        cheap.category_ids = vec![CategoryId::new("oils")];
        let mut pricey = Product::new("p2", "Oil B", "Castrol", "C1", Price::from_cents(5000));
        pricey.category_ids = vec![CategoryId::new("oils")];
        let mut unavailable = Product::new("p3", "Oil C", "Shell", "S2", Price::from_cents(500));
        unavailable.category_ids = vec![CategoryId::new("oils")];
        unavailable.availability = Availability::NotAvailable;
        MemoryStore::new(vec![cheap, pricey, unavailable])
    }

    fn empty_query() -> ProductQuery {
        let tree = CategoryTree::build(&[Category::root("oils", "Oils")]);
        ProductQuery::base(&FilterCriteria::new(), &tree)
    }

    #[test]
    fn test_fetch_page_sorts_and_pages() {
        let store = store();
        let page = store.fetch_page(&empty_query(), SortKey::PriceAsc, 0, 2).unwrap();
        // Unavailable p3 sorts last despite being cheapest.
        assert_eq!(page[0].id.as_str(), "p1");
        assert_eq!(page[1].id.as_str(), "p2");

        let rest = store.fetch_page(&empty_query(), SortKey::PriceAsc, 2, 2).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id.as_str(), "p3");
    }

    #[test]
    fn test_count_and_max_price() {
        let store = store();
        assert_eq!(store.count(&empty_query()).unwrap(), 3);
        assert_eq!(
            store.max_price(&empty_query()).unwrap(),
            Some(Price::from_cents(5000))
        );
        assert_eq!(MemoryStore::default().max_price(&empty_query()).unwrap(), None);
    }

    #[test]
    fn test_distinct_manufacturers_ascending() {
        let store = store();
        assert_eq!(
            store.manufacturers(&empty_query()).unwrap(),
            vec!["Castrol".to_string(), "Shell".to_string()]
        );
    }

    #[test]
    fn test_category_projection() {
        let store = store();
        let ids = store.category_ids_with_products(&empty_query()).unwrap();
        assert_eq!(ids.len(), 1);
        assert!(ids.contains(&CategoryId::new("oils")));
    }
}
