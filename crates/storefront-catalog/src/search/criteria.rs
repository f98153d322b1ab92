//! Filter criteria and pagination/sort inputs.

use crate::catalog::Availability;
use crate::ids::CategoryId;
use crate::price::Price;
use crate::search::tokenizer::{is_active_search, SearchTokens};
use serde::{Deserialize, Serialize};

/// Sort options for product pages.
///
/// Whatever key is requested, available products always sort before
/// unavailable ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z (default).
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "priceAsc",
            SortKey::PriceDesc => "priceDesc",
            SortKey::NameAsc => "nameAsc",
            SortKey::NameDesc => "nameDesc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "priceAsc" => Some(SortKey::PriceAsc),
            "priceDesc" => Some(SortKey::PriceDesc),
            "nameAsc" => Some(SortKey::NameAsc),
            "nameDesc" => Some(SortKey::NameDesc),
            _ => None,
        }
    }
}

/// 1-based pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Current page, starting at 1.
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
}

/// Default page size when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Normalized, immutable representation of all active filter dimensions for
/// one request.
///
/// Never mutated after construction: the restricted criteria the facet
/// computer runs with are fresh copies produced by the `without_*`
/// derivations, so facet sub-queries cannot interfere with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Chosen category, drives descendant expansion unless subcategories
    /// are present.
    pub category_id: Option<CategoryId>,
    /// Explicitly chosen subcategories; takes precedence over `category_id`.
    pub subcategory_ids: Vec<CategoryId>,
    /// Lower price bound, inclusive.
    pub min_price: Option<Price>,
    /// Upper price bound, inclusive.
    pub max_price: Option<Price>,
    /// Selected manufacturers.
    pub manufacturers: Vec<String>,
    /// Discount dimension: `Some(true)` for discounted only, `Some(false)`
    /// for non-discounted only, `None` when unset.
    pub discounted: Option<bool>,
    /// Selected availability values.
    pub availability: Vec<Availability>,
    /// Raw search string as entered.
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    pub fn with_subcategories(mut self, ids: Vec<CategoryId>) -> Self {
        self.subcategory_ids = ids;
        self
    }

    pub fn with_price_range(mut self, min: Option<Price>, max: Option<Price>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_manufacturers(mut self, manufacturers: Vec<String>) -> Self {
        self.manufacturers = manufacturers;
        self
    }

    pub fn with_discounted(mut self, discounted: bool) -> Self {
        self.discounted = Some(discounted);
        self
    }

    pub fn with_availability(mut self, availability: Vec<Availability>) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The ids that drive descendant expansion: explicit subcategories win
    /// over the single category; empty when neither is set.
    pub fn category_roots(&self) -> Vec<CategoryId> {
        if !self.subcategory_ids.is_empty() {
            self.subcategory_ids.clone()
        } else if let Some(id) = &self.category_id {
            vec![id.clone()]
        } else {
            Vec::new()
        }
    }

    /// Whether the search string is long enough to take part in matching.
    pub fn has_active_search(&self) -> bool {
        is_active_search(self.search.as_deref())
    }

    /// Tokens of an active search; empty tokens otherwise.
    pub fn search_tokens(&self) -> SearchTokens {
        if self.has_active_search() {
            SearchTokens::parse(self.search.as_deref().unwrap_or_default())
        } else {
            SearchTokens::none()
        }
    }

    /// Copy with the category dimension removed (subcategory facet
    /// self-exclusion).
    pub fn without_category_dimension(&self) -> Self {
        let mut restricted = self.clone();
        restricted.category_id = None;
        restricted.subcategory_ids = Vec::new();
        restricted
    }

    /// Copy with the manufacturer dimension removed (manufacturer facet
    /// self-exclusion).
    pub fn without_manufacturer_dimension(&self) -> Self {
        let mut restricted = self.clone();
        restricted.manufacturers = Vec::new();
        restricted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip() {
        assert_eq!(SortKey::from_str("priceAsc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::from_str("nameDesc"), Some(SortKey::NameDesc));
        assert_eq!(SortKey::from_str("relevance"), None);
        assert_eq!(SortKey::PriceDesc.as_str(), "priceDesc");
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        // Page zero is clamped to one.
        assert_eq!(PageRequest::new(0, 10).page, 1);
    }

    #[test]
    fn test_subcategories_take_precedence() {
        let criteria = FilterCriteria::new()
            .with_category("oils")
            .with_subcategories(vec![CategoryId::new("synthetic")]);
        assert_eq!(criteria.category_roots(), vec![CategoryId::new("synthetic")]);
    }

    #[test]
    fn test_category_roots_empty_when_unset() {
        assert!(FilterCriteria::new().category_roots().is_empty());
    }

    #[test]
    fn test_short_search_yields_no_tokens() {
        let criteria = FilterCriteria::new().with_search("ab");
        assert!(!criteria.has_active_search());
        assert!(criteria.search_tokens().is_empty());

        let criteria = FilterCriteria::new().with_search("bosch");
        assert!(criteria.has_active_search());
        assert_eq!(criteria.search_tokens().tokens(), &["bosch"]);
    }

    #[test]
    fn test_without_derivations_do_not_touch_original() {
        let criteria = FilterCriteria::new()
            .with_category("oils")
            .with_manufacturers(vec!["Bosch".to_string()]);

        let no_category = criteria.without_category_dimension();
        assert!(no_category.category_id.is_none());
        assert_eq!(no_category.manufacturers, criteria.manufacturers);

        let no_manufacturer = criteria.without_manufacturer_dimension();
        assert!(no_manufacturer.manufacturers.is_empty());
        assert_eq!(no_manufacturer.category_id, criteria.category_id);

        // Original untouched.
        assert!(criteria.category_id.is_some());
        assert!(!criteria.manufacturers.is_empty());
    }
}
