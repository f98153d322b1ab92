//! Free-text search tokenization and the per-token match predicate.
//!
//! The predicate list is a deliberate, literal contract: a token matches on
//! a name prefix or after a space, `/`, or `-` inside the name, on a
//! manufacturer prefix or after a space, or anywhere in the part code. Do
//! not "normalize" this into a generic word-boundary tokenizer; the exact
//! separators affect result sets.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Minimum trimmed query length for a search to be considered active.
///
/// Below this threshold the query is ignored for matching, and products with
/// an empty name are excluded from all results. This guards against
/// placeholder catalog rows surfacing while the user is not actively
/// searching. Once the query reaches this length the guard is lifted, even
/// if the query matches nothing. The asymmetry is intentional.
pub const MIN_ACTIVE_SEARCH_LEN: usize = 4;

/// Check whether a raw search string constitutes an active search.
pub fn is_active_search(query: Option<&str>) -> bool {
    query.is_some_and(|q| q.trim().chars().count() >= MIN_ACTIVE_SEARCH_LEN)
}

/// An ordered list of non-empty search tokens.
///
/// Order does not affect matching, only debuggability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchTokens {
    tokens: Vec<String>,
}

impl SearchTokens {
    /// Split a query on whitespace runs, discarding empty tokens.
    pub fn parse(query: &str) -> Self {
        Self {
            tokens: query.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// No tokens at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whole-query predicate: the product must match every token
    /// (conjunction of per-token disjunctions).
    pub fn matches(&self, product: &Product) -> bool {
        self.tokens.iter().all(|token| token_matches(product, token))
    }
}

/// Per-token predicate against a product's text fields, case-insensitive.
fn token_matches(product: &Product, token: &str) -> bool {
    let token = token.to_lowercase();
    let name = product.name.to_lowercase();
    let manufacturer = product.manufacturer.to_lowercase();
    let code = product.code.to_lowercase();

    name.starts_with(&token)
        || name.contains(&format!(" {token}"))
        || name.contains(&format!("/{token}"))
        || name.contains(&format!("-{token}"))
        || manufacturer.starts_with(&token)
        || manufacturer.contains(&format!(" {token}"))
        || code.contains(&token)
}
