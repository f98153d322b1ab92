//! Request normalization boundary.
//!
//! Raw transport payloads land here and are validated into the normalized
//! values the engine consumes. The engine itself assumes pre-validated
//! criteria; malformed input never reaches it. Validation failures collect
//! field-level messages for a 422-equivalent response.

use crate::catalog::Availability;
use crate::ids::CategoryId;
use crate::price::Price;
use crate::search::{FilterCriteria, PageRequest, SortKey, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the requested page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Accepted discount filter strings.
const WITH_DISCOUNT: &str = "with-discount";
const WITHOUT_DISCOUNT: &str = "without-discount";

/// A single field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collected validation failures for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("request validation failed: {} field(s)", errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Raw filter-products request.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterRequest {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub sort: Option<String>,
    pub category_id: Option<String>,
    pub subcategory_ids: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub manufacturers: Vec<String>,
    pub discounts: Vec<String>,
    pub availability: Vec<String>,
    pub search: Option<String>,
}

/// Raw get-facets request: the filter fields minus pagination and sort.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetRequest {
    pub category_id: Option<String>,
    pub subcategory_ids: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub manufacturers: Vec<String>,
    pub discounts: Vec<String>,
    pub availability: Vec<String>,
    pub search: Option<String>,
}

/// A fully normalized filter-products request.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFilter {
    pub criteria: FilterCriteria,
    pub page: PageRequest,
    pub sort: SortKey,
}

impl FilterRequest {
    /// Validate and normalize into engine inputs.
    pub fn normalize(&self) -> Result<NormalizedFilter, ValidationErrors> {
        let mut errors = ValidationErrors { errors: Vec::new() };

        let page = match self.page {
            Some(0) => {
                errors.push("page", "must be at least 1");
                1
            }
            Some(p) => p,
            None => 1,
        };
        let page_size = match self.page_size {
            Some(0) => {
                errors.push("pageSize", "must be at least 1");
                DEFAULT_PAGE_SIZE
            }
            Some(s) if s > MAX_PAGE_SIZE => {
                errors.push("pageSize", format!("must be at most {MAX_PAGE_SIZE}"));
                DEFAULT_PAGE_SIZE
            }
            Some(s) => s,
            None => DEFAULT_PAGE_SIZE,
        };
        let sort = match self.sort.as_deref() {
            None => {
                errors.push("sort", "is required");
                SortKey::default()
            }
            Some(raw) => match SortKey::from_str(raw) {
                Some(sort) => sort,
                None => {
                    errors.push("sort", format!("unknown sort key '{raw}'"));
                    SortKey::default()
                }
            },
        };

        let criteria = build_criteria(
            &mut errors,
            CriteriaFields {
                category_id: self.category_id.as_deref(),
                subcategory_ids: &self.subcategory_ids,
                min_price: self.min_price,
                max_price: self.max_price,
                manufacturers: &self.manufacturers,
                discounts: &self.discounts,
                availability: &self.availability,
                search: self.search.as_deref(),
            },
        );

        errors.into_result(NormalizedFilter {
            criteria,
            page: PageRequest::new(page, page_size),
            sort,
        })
    }
}

impl FacetRequest {
    /// Validate and normalize into filter criteria.
    pub fn normalize(&self) -> Result<FilterCriteria, ValidationErrors> {
        let mut errors = ValidationErrors { errors: Vec::new() };
        let criteria = build_criteria(
            &mut errors,
            CriteriaFields {
                category_id: self.category_id.as_deref(),
                subcategory_ids: &self.subcategory_ids,
                min_price: self.min_price,
                max_price: self.max_price,
                manufacturers: &self.manufacturers,
                discounts: &self.discounts,
                availability: &self.availability,
                search: self.search.as_deref(),
            },
        );
        errors.into_result(criteria)
    }
}

/// Filter fields shared by both request shapes.
struct CriteriaFields<'a> {
    category_id: Option<&'a str>,
    subcategory_ids: &'a [String],
    min_price: Option<f64>,
    max_price: Option<f64>,
    manufacturers: &'a [String],
    discounts: &'a [String],
    availability: &'a [String],
    search: Option<&'a str>,
}

fn build_criteria(errors: &mut ValidationErrors, fields: CriteriaFields<'_>) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();

    criteria.category_id = fields.category_id.map(CategoryId::new);
    criteria.subcategory_ids = fields.subcategory_ids.iter().map(CategoryId::new).collect();

    if let Some(min) = fields.min_price {
        if min < 0.0 {
            errors.push("minPrice", "must not be negative");
        } else {
            criteria.min_price = Some(Price::from_decimal(min));
        }
    }
    if let Some(max) = fields.max_price {
        if max < 0.0 {
            errors.push("maxPrice", "must not be negative");
        } else {
            criteria.max_price = Some(Price::from_decimal(max));
        }
    }
    if let (Some(min), Some(max)) = (criteria.min_price, criteria.max_price) {
        if max < min {
            errors.push("maxPrice", "must not be less than minPrice");
        }
    }

    criteria.manufacturers = fields.manufacturers.to_vec();

    // Only a single discount value is meaningful; the first one wins.
    for value in fields.discounts {
        match value.as_str() {
            WITH_DISCOUNT | WITHOUT_DISCOUNT => {}
            other => errors.push("discounts", format!("unknown discount value '{other}'")),
        }
    }
    criteria.discounted = fields.discounts.first().and_then(|v| match v.as_str() {
        WITH_DISCOUNT => Some(true),
        WITHOUT_DISCOUNT => Some(false),
        _ => None,
    });

    for value in fields.availability {
        match Availability::from_str(value) {
            Some(availability) => criteria.availability.push(availability),
            None => errors.push("availability", format!("unknown availability '{value}'")),
        }
    }

    criteria.search = fields.search.map(str::to_string);
    criteria
}
