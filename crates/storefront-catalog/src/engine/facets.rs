//! Facet computation.
//!
//! Each facet is computed against a restricted query built from a fresh
//! criteria copy that omits the facet's own dimension while keeping all
//! others (self-exclusion), so a filter can never hide its own currently
//! selected options.

use crate::catalog::{has_descendant_with_products, CategoryTree};
use crate::engine::query::ProductQuery;
use crate::engine::store::ProductStore;
use crate::error::CatalogError;
use crate::search::{Facet, FacetValue, FilterCriteria};
use tracing::debug;

/// Facet id/name for the subcategory dimension.
const SUBCATEGORY_FACET: (&str, &str) = ("subcategory", "Subcategory");
/// Facet id/name for the manufacturer dimension.
const MANUFACTURER_FACET: (&str, &str) = ("manufacturer", "Manufacturer");
/// Prefix for synthesized manufacturer value ids.
const MANUFACTURER_VALUE_ID_PREFIX: &str = "id_";

/// Computes selectable facet values for a criteria.
pub struct FacetComputer<'a, S: ?Sized> {
    store: &'a S,
    tree: &'a CategoryTree,
}

impl<'a, S: ProductStore + ?Sized> FacetComputer<'a, S> {
    pub fn new(store: &'a S, tree: &'a CategoryTree) -> Self {
        Self { store, tree }
    }

    /// Compute all emitted facets, in fixed order: subcategories first,
    /// then manufacturers. Empty facets are omitted entirely.
    ///
    /// The discount dimension stays filterable through the criteria but is
    /// intentionally not emitted as a facet.
    pub fn compute(&self, criteria: &FilterCriteria) -> Result<Vec<Facet>, CatalogError> {
        let mut facets = Vec::new();
        if let Some(facet) = self.subcategory_facet(criteria)? {
            facets.push(facet);
        }
        if let Some(facet) = self.manufacturer_facet(criteria)? {
            facets.push(facet);
        }
        debug!(facets = facets.len(), "computed facets");
        Ok(facets)
    }

    /// The subcategory facet.
    ///
    /// With no category chosen, the values are simply the root categories
    /// (no has-products pruning on that branch). With a category chosen,
    /// the values are the direct children of that category whose subtree
    /// contains at least one category with matching products, where
    /// "matching" honors every dimension except category itself.
    fn subcategory_facet(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Option<Facet>, CatalogError> {
        let values = match &criteria.category_id {
            None => self
                .tree
                .roots()
                .into_iter()
                .map(|category| {
                    FacetValue::new(category.id.as_str(), &category.name)
                        .with_children_flag(self.tree.has_children(&category.id))
                })
                .collect::<Vec<_>>(),
            Some(category_id) => {
                let restricted = criteria.without_category_dimension();
                let query = ProductQuery::price_bounded(&restricted, self.tree);
                let mut with_products = self.store.category_ids_with_products(&query)?;
                // Explicitly selected subcategories stay selectable even when
                // no product currently matches them.
                for id in &criteria.subcategory_ids {
                    with_products.insert(id.clone());
                }
                debug!(
                    categories_with_products = with_products.len(),
                    "restricted subcategory query done"
                );

                match self.tree.subtree(category_id) {
                    Some(node) => node
                        .children
                        .iter()
                        .filter(|child| has_descendant_with_products(child, &with_products))
                        .map(|child| {
                            FacetValue::new(child.category.id.as_str(), &child.category.name)
                                .with_children_flag(child.has_children())
                        })
                        .collect(),
                    None => Vec::new(),
                }
            }
        };

        if values.is_empty() {
            return Ok(None);
        }
        let (id, name) = SUBCATEGORY_FACET;
        Ok(Some(Facet {
            id: id.to_string(),
            name: name.to_string(),
            values,
        }))
    }

    /// The manufacturer facet.
    ///
    /// Distinct manufacturers of products matching every dimension except
    /// manufacturer, merged with any selected manufacturers the other
    /// filters currently exclude, sorted case-insensitively. Selected
    /// filters never silently disappear from their own facet.
    fn manufacturer_facet(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Option<Facet>, CatalogError> {
        let restricted = criteria.without_manufacturer_dimension();
        let query = ProductQuery::price_bounded(&restricted, self.tree);
        let mut names = self.store.manufacturers(&query)?;

        for selected in &criteria.manufacturers {
            if !names.contains(selected) {
                names.push(selected.clone());
            }
        }
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        debug!(manufacturers = names.len(), "restricted manufacturer query done");

        if names.is_empty() {
            return Ok(None);
        }
        let (id, name) = MANUFACTURER_FACET;
        Ok(Some(Facet {
            id: id.to_string(),
            name: name.to_string(),
            values: names
                .into_iter()
                .map(|n| FacetValue::new(format!("{MANUFACTURER_VALUE_ID_PREFIX}{n}"), n))
                .collect(),
        }))
    }
}
