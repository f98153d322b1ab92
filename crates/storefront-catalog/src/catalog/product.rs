//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Stock availability of a product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Availability {
    /// Product is in stock. Sorts before unavailable products.
    #[default]
    Available,
    /// Product is out of stock.
    NotAvailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "AVAILABLE",
            Availability::NotAvailable => "NOT_AVAILABLE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(Availability::Available),
            "NOT_AVAILABLE" => Some(Availability::NotAvailable),
            _ => None,
        }
    }
}

/// A product in the catalog.
///
/// `category_ids` is denormalized by the ingestion collaborator to contain
/// every category the product belongs to at any tree depth, not only leaf
/// categories, so a single set-intersection test answers hierarchical
/// membership once the descendant-id set has been expanded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Manufacturer part code.
    pub code: String,
    /// Current price.
    pub price: Price,
    /// Discount percent, 0-100.
    pub discount_percent: u8,
    /// Full-ancestry category membership.
    pub category_ids: Vec<CategoryId>,
    /// Stock availability.
    pub availability: Availability,
    /// Whether the product is visible in the catalog.
    pub is_active: bool,
}

impl Product {
    /// Create an active, available product with no category membership.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        code: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            code: code.into(),
            price,
            discount_percent: 0,
            category_ids: Vec::new(),
            availability: Availability::Available,
            is_active: true,
        }
    }

    /// Check if the product carries a discount.
    pub fn is_discounted(&self) -> bool {
        self.discount_percent > 0
    }

    /// Check if the product belongs to a category (membership is
    /// pre-expanded, so this is a flat lookup).
    pub fn in_category(&self, id: &CategoryId) -> bool {
        self.category_ids.contains(id)
    }
}
