//! Catalog domain module.
//!
//! Contains categories, the category tree, and products.

mod category;
mod product;

pub use category::{has_descendant_with_products, Category, CategoryNode, CategoryTree};
pub use product::{Availability, Product};
