//! Result assembly.
//!
//! Merges a query outcome with request-scoped decorations into the
//! caller-facing page. The shared products are never mutated; views are
//! built from copies.

use crate::engine::executor::QueryOutcome;
use crate::ids::ProductId;
use crate::search::{total_pages, PageRequest, ProductPage, ProductView};
use std::collections::HashSet;

/// Assemble the final page from a query outcome and the requesting user's
/// favorite set.
pub fn assemble_page(
    outcome: QueryOutcome,
    page: &PageRequest,
    favorites: &HashSet<ProductId>,
) -> ProductPage {
    let products = outcome
        .products
        .iter()
        .map(|product| ProductView::decorate(product, favorites.contains(&product.id)))
        .collect();

    ProductPage {
        products,
        total_count: outcome.total_count,
        total_pages: total_pages(outcome.total_count, page.page_size),
        page: page.page,
        page_size: page.page_size,
        max_price: outcome.max_price,
    }
}
