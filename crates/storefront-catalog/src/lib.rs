//! Faceted catalog filtering and facet-computation engine.
//!
//! This crate is the read-only core of an online-store catalog service:
//!
//! - **Catalog**: categories, the category tree, products
//! - **Search**: free-text tokenization, filter criteria, facets, pages
//! - **Engine**: facet computation, query execution, result assembly
//! - **Request**: validation/normalization of raw transport payloads
//!
//! Storage is a collaborator behind the [`engine::ProductStore`] trait;
//! everything else (auth, cart, checkout, ingestion, transport) lives
//! outside this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let engine = CatalogEngine::new(store, categories);
//!
//! let criteria = FilterCriteria::new()
//!     .with_category("oils")
//!     .with_search("bosch f00");
//!
//! let page = engine.filter_products(
//!     &criteria,
//!     &PageRequest::new(1, 20),
//!     SortKey::PriceAsc,
//!     &favorites,
//! )?;
//! let facets = engine.facets(&criteria)?;
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod engine;
pub mod request;
pub mod search;

pub use error::{CatalogError, StoreError};
pub use ids::*;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, StoreError};
    pub use crate::ids::*;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{Availability, Category, CategoryNode, CategoryTree, Product};

    // Search
    pub use crate::search::{
        Facet, FacetValue, FilterCriteria, PageRequest, ProductPage, ProductView, SearchTokens,
        SortKey,
    };

    // Engine
    pub use crate::engine::{CatalogEngine, ProductQuery, ProductStore, QueryOutcome};

    // Request boundary
    pub use crate::request::{FacetRequest, FilterRequest, NormalizedFilter, ValidationErrors};
}
