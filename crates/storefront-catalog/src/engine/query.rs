//! Compiled product query values.
//!
//! Criteria are compiled into immutable `ProductQuery` values by small pure
//! functions; nothing here mutates a shared builder. The base query carries
//! every dimension except the price bounds, because the price ceiling must
//! be computed independently of the caller's own price selection.

use crate::catalog::{Availability, CategoryTree, Product};
use crate::ids::CategoryId;
use crate::price::Price;
use crate::search::{FilterCriteria, SearchTokens, SortKey};
use std::cmp::Ordering;
use std::collections::HashSet;

/// An immutable, fully resolved product predicate.
///
/// Category ids arrive here already descendant-expanded, so membership is a
/// flat set-intersection test.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    /// Expanded category-id set; `None` means no category constraint.
    pub category_ids: Option<HashSet<CategoryId>>,
    /// Manufacturer membership; `None` means no constraint.
    pub manufacturers: Option<Vec<String>>,
    /// Discount sign test: `Some(true)` keeps `discount > 0`, `Some(false)`
    /// keeps `discount == 0`.
    pub discounted: Option<bool>,
    /// Availability membership; `None` means no constraint.
    pub availability: Option<Vec<Availability>>,
    /// Conjunctive search tokens (empty when the search is inactive).
    pub tokens: SearchTokens,
    /// Exclude products with an empty name. Active exactly when the search
    /// string is absent or shorter than the active-search threshold.
    pub exclude_empty_names: bool,
    /// Lower price bound, inclusive.
    pub min_price: Option<Price>,
    /// Upper price bound, inclusive.
    pub max_price: Option<Price>,
}

impl ProductQuery {
    /// Compile the base predicate: every dimension except price bounds.
    pub fn base(criteria: &FilterCriteria, tree: &CategoryTree) -> Self {
        let roots = criteria.category_roots();
        let category_ids = if roots.is_empty() {
            None
        } else {
            Some(tree.expand(&roots))
        };

        Self {
            category_ids,
            manufacturers: if criteria.manufacturers.is_empty() {
                None
            } else {
                Some(criteria.manufacturers.clone())
            },
            discounted: criteria.discounted,
            availability: if criteria.availability.is_empty() {
                None
            } else {
                Some(criteria.availability.clone())
            },
            tokens: criteria.search_tokens(),
            exclude_empty_names: !criteria.has_active_search(),
            min_price: None,
            max_price: None,
        }
    }

    /// Compile the price-bounded predicate: base plus both price bounds.
    pub fn price_bounded(criteria: &FilterCriteria, tree: &CategoryTree) -> Self {
        let mut query = Self::base(criteria, tree);
        query.min_price = criteria.min_price;
        query.max_price = criteria.max_price;
        query
    }

    /// Evaluate the predicate against one product.
    ///
    /// Inactive products never match, regardless of filters.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active {
            return false;
        }
        if self.exclude_empty_names && product.name.is_empty() {
            return false;
        }
        if let Some(category_ids) = &self.category_ids {
            if !product.category_ids.iter().any(|id| category_ids.contains(id)) {
                return false;
            }
        }
        if let Some(manufacturers) = &self.manufacturers {
            if !manufacturers.iter().any(|m| m == &product.manufacturer) {
                return false;
            }
        }
        if let Some(discounted) = self.discounted {
            if product.is_discounted() != discounted {
                return false;
            }
        }
        if let Some(availability) = &self.availability {
            if !availability.contains(&product.availability) {
                return false;
            }
        }
        if !self.tokens.matches(product) {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// Product page ordering: availability ascending always wins, then the
/// requested sort key, then id for a stable order.
pub fn compare_products(a: &Product, b: &Product, sort: SortKey) -> Ordering {
    a.availability
        .cmp(&b.availability)
        .then_with(|| match sort {
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::NameAsc => a.name.cmp(&b.name),
            SortKey::NameDesc => b.name.cmp(&a.name),
        })
        .then_with(|| a.id.cmp(&b.id))
}
