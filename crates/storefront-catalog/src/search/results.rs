//! Facets and paginated result types.

use crate::catalog::{Availability, Product};
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A filterable dimension exposed with its currently selectable values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Stable facet identifier (e.g., "subcategory").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Selectable values, in display order.
    #[serde(rename = "filterValues")]
    pub values: Vec<FacetValue>,
}

/// A single selectable facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacetValue {
    /// Value identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// For tree-shaped facets: whether the value has further children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
}

impl FacetValue {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            has_children: None,
        }
    }

    pub fn with_children_flag(mut self, has_children: bool) -> Self {
        self.has_children = Some(has_children);
        self
    }
}

/// A product decorated with request-scoped flags.
///
/// The shared `Product` is never mutated; decoration happens on the copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub manufacturer: String,
    pub code: String,
    pub price: Price,
    pub discount_percent: u8,
    pub availability: Availability,
    /// Whether the requesting user has favorited this product.
    pub is_favorite: bool,
}

impl ProductView {
    /// Build a view of a product with its decoration.
    pub fn decorate(product: &Product, is_favorite: bool) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            manufacturer: product.manufacturer.clone(),
            code: product.code.clone(),
            price: product.price,
            discount_percent: product.discount_percent,
            availability: product.availability,
            is_favorite,
        }
    }
}

/// One page of filtered products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<ProductView>,
    /// Total rows matching the price-bounded predicate.
    pub total_count: u64,
    /// `ceil(total_count / page_size)`.
    pub total_pages: u64,
    /// Current page, 1-based.
    pub page: u64,
    /// Requested page size.
    pub page_size: u64,
    /// Maximum price reachable under all active non-price filters, raw
    /// (rounding for slider display is the caller's job). `None` when no
    /// product matches the base predicate.
    pub max_price: Option<Price>,
}

/// Pagination math shared by the assembler and its tests.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
