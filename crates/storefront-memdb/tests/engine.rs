//! End-to-end tests of the catalog engine over the in-memory backend.

use std::collections::HashSet;
use storefront_catalog::prelude::*;
use storefront_memdb::MemoryStore;

fn categories() -> Vec<Category> {
    vec![
        Category::root("oils", "Oils"),
        Category::child("synthetic", "Synthetic", "oils"),
        Category::child("mineral", "Mineral", "oils"),
        Category::root("filters", "Filters"),
    ]
}

fn product(
    id: &str,
    name: &str,
    manufacturer: &str,
    code: &str,
    cents: i64,
    category_ids: &[&str],
) -> Product {
    let mut p = Product::new(id, name, manufacturer, code, Price::from_cents(cents));
    p.category_ids = category_ids.iter().copied().map(CategoryId::new).collect();
    p
}

fn engine(products: Vec<Product>) -> CatalogEngine<MemoryStore> {
    CatalogEngine::new(MemoryStore::new(products), categories())
}

fn page(
    engine: &CatalogEngine<MemoryStore>,
    criteria: &FilterCriteria,
) -> ProductPage {
    engine
        .filter_products(criteria, &PageRequest::new(1, 20), SortKey::NameAsc, &HashSet::new())
        .unwrap()
}

#[test]
fn category_filter_includes_descendants_and_prunes_empty_subcategories() {
    // Scenario: one product lives under Synthetic (membership denormalized
    // up to Oils); Mineral has no products.
    let engine = engine(vec![product(
        "p1",
        "Synthetic Oil 5W-30",
        "Castrol",
        "C530",
        4999,
        &["synthetic", "oils"],
    )]);
    let criteria = FilterCriteria::new().with_category("oils");

    let page = page(&engine, &criteria);
    assert_eq!(page.total_count, 1);
    assert_eq!(page.products[0].id, ProductId::new("p1"));

    let facets = engine.facets(&criteria).unwrap();
    let subcategories = facets.iter().find(|f| f.id == "subcategory").unwrap();
    assert_eq!(subcategories.values.len(), 1);
    assert_eq!(subcategories.values[0].name, "Synthetic");
    assert_eq!(subcategories.values[0].has_children, Some(false));
    assert!(!subcategories.values.iter().any(|v| v.name == "Mineral"));
}

#[test]
fn search_matches_through_engine() {
    let engine = engine(vec![
        product("p1", "Bosch/F00HN37 filter", "Bosch", "F00HN37", 1500, &["filters"]),
        product("p2", "Mann filter", "Mann", "WK842", 1200, &["filters"]),
    ]);
    let criteria = FilterCriteria::new().with_search("bosch f00");

    let page = page(&engine, &criteria);
    assert_eq!(page.total_count, 1);
    assert_eq!(page.products[0].id, ProductId::new("p1"));
}

#[test]
fn selected_manufacturer_survives_in_its_own_facet() {
    // ACME only makes unavailable products; the availability filter
    // excludes all of them, but the selection must stay listed.
    let mut acme = product("p1", "Acme oil", "ACME", "A1", 1000, &["oils"]);
    acme.availability = Availability::NotAvailable;
    let engine = engine(vec![
        acme,
        product("p2", "Shell oil", "Shell", "S1", 2000, &["oils"]),
    ]);

    let criteria = FilterCriteria::new()
        .with_manufacturers(vec!["ACME".to_string()])
        .with_availability(vec![Availability::Available]);

    let facets = engine.facets(&criteria).unwrap();
    let manufacturers = facets.iter().find(|f| f.id == "manufacturer").unwrap();
    let names: Vec<&str> = manufacturers.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["ACME", "Shell"]);
    assert_eq!(manufacturers.values[0].id, "id_ACME");
}

#[test]
fn price_ceiling_ignores_callers_price_bounds() {
    let engine = engine(vec![
        product("p1", "Cheap oil", "Shell", "S1", 6000, &["oils"]),
        product("p2", "Mid oil", "Shell", "S2", 9000, &["oils"]),
        product("p3", "Premium oil", "Castrol", "C1", 30000, &["oils"]),
    ]);

    let criteria = FilterCriteria::new()
        .with_price_range(Some(Price::from_decimal(50.0)), Some(Price::from_decimal(100.0)));

    let result = page(&engine, &criteria);
    assert_eq!(result.total_count, 2);
    assert_eq!(result.max_price, Some(Price::from_cents(30000)));

    // Identical ceiling without any bounds.
    let unbounded = page(&engine, &FilterCriteria::new());
    assert_eq!(unbounded.max_price, result.max_price);
}

#[test]
fn no_category_yields_root_facet_values() {
    let engine = engine(vec![product("p1", "Oil", "Shell", "S1", 1000, &["oils"])]);
    let facets = engine.facets(&FilterCriteria::new()).unwrap();
    let subcategories = facets.iter().find(|f| f.id == "subcategory").unwrap();

    let names: Vec<&str> = subcategories.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Filters", "Oils"]);
    assert_eq!(subcategories.values[0].has_children, Some(false));
    assert_eq!(subcategories.values[1].has_children, Some(true));
}

#[test]
fn selected_subcategory_stays_selectable_without_matches() {
    // Other filters exclude everything under Mineral, but the user selected
    // it, so it must stay in the facet.
    let engine = engine(vec![product(
        "p1",
        "Synthetic Oil",
        "Castrol",
        "C1",
        4999,
        &["synthetic", "oils"],
    )]);
    let criteria = FilterCriteria::new()
        .with_category("oils")
        .with_subcategories(vec![CategoryId::new("mineral")])
        .with_manufacturers(vec!["Castrol".to_string()]);

    let facets = engine.facets(&criteria).unwrap();
    let subcategories = facets.iter().find(|f| f.id == "subcategory").unwrap();
    let names: Vec<&str> = subcategories.values.iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"Mineral"));
}

#[test]
fn discount_dimension_filters_but_emits_no_facet() {
    let mut discounted = product("p1", "Sale oil", "Shell", "S1", 1000, &["oils"]);
    discounted.discount_percent = 25;
    let engine = engine(vec![
        discounted,
        product("p2", "Plain oil", "Shell", "S2", 2000, &["oils"]),
    ]);

    let criteria = FilterCriteria::new().with_discounted(true);
    let result = page(&engine, &criteria);
    assert_eq!(result.total_count, 1);
    assert_eq!(result.products[0].id, ProductId::new("p1"));

    let facets = engine.facets(&criteria).unwrap();
    assert!(!facets.iter().any(|f| f.id == "discount"));
}

#[test]
fn facet_order_is_subcategories_then_manufacturers() {
    let engine = engine(vec![product("p1", "Oil", "Shell", "S1", 1000, &["oils"])]);
    let facets = engine.facets(&FilterCriteria::new()).unwrap();
    let ids: Vec<&str> = facets.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["subcategory", "manufacturer"]);
}

#[test]
fn empty_category_match_returns_empty_page_without_error() {
    let engine = engine(vec![product("p1", "Oil", "Shell", "S1", 1000, &["oils"])]);
    // Nonexistent category expands to itself alone; nothing matches.
    let criteria = FilterCriteria::new().with_category("does-not-exist");

    let result = page(&engine, &criteria);
    assert_eq!(result.total_count, 0);
    assert!(result.products.is_empty());
    assert_eq!(result.total_pages, 0);
    assert_eq!(result.max_price, None);
}

#[test]
fn availability_sorts_before_requested_key() {
    let mut unavailable_cheap = product("p1", "A oil", "Shell", "S1", 100, &["oils"]);
    unavailable_cheap.availability = Availability::NotAvailable;
    let engine = engine(vec![
        unavailable_cheap,
        product("p2", "B oil", "Shell", "S2", 9000, &["oils"]),
    ]);

    let result = engine
        .filter_products(
            &FilterCriteria::new(),
            &PageRequest::new(1, 20),
            SortKey::PriceAsc,
            &HashSet::new(),
        )
        .unwrap();
    assert_eq!(result.products[0].id, ProductId::new("p2"));
}

#[test]
fn pagination_math_and_favorites() {
    let products: Vec<Product> = (0..45)
        .map(|i| {
            product(
                &format!("p{i:02}"),
                &format!("Oil {i:02}"),
                "Shell",
                &format!("S{i:02}"),
                1000 + i,
                &["oils"],
            )
        })
        .collect();
    let engine = engine(products);
    let favorites: HashSet<ProductId> = [ProductId::new("p10")].into_iter().collect();

    let result = engine
        .filter_products(
            &FilterCriteria::new(),
            &PageRequest::new(2, 10),
            SortKey::NameAsc,
            &favorites,
        )
        .unwrap();
    assert_eq!(result.total_count, 45);
    assert_eq!(result.total_pages, 5);
    assert_eq!(result.products.len(), 10);
    // Page 2 of name-ascending starts at Oil 10.
    assert_eq!(result.products[0].id, ProductId::new("p10"));
    assert!(result.products[0].is_favorite);
    assert!(!result.products[1].is_favorite);
}

#[test]
fn short_search_excludes_unnamed_products_and_long_search_does_not() {
    let unnamed = product("p1", "", "Shell", "ABCD99", 1000, &["oils"]);
    let engine = engine(vec![
        unnamed,
        product("p2", "Named oil", "Shell", "S2", 2000, &["oils"]),
    ]);

    // No search: guard active.
    assert_eq!(page(&engine, &FilterCriteria::new()).total_count, 1);
    // Three characters: still inactive, guard holds.
    let short = FilterCriteria::new().with_search("abc");
    assert_eq!(page(&engine, &short).total_count, 1);
    // Four characters: guard lifted, the unnamed product matches by code.
    let active = FilterCriteria::new().with_search("abcd");
    let result = page(&engine, &active);
    assert_eq!(result.total_count, 1);
    assert_eq!(result.products[0].id, ProductId::new("p1"));
}

#[test]
fn self_exclusion_round_trip_for_manufacturers() {
    // Re-applying a facet value as a filter keeps it listed in its facet.
    let engine = engine(vec![
        product("p1", "Shell oil", "Shell", "S1", 1000, &["oils"]),
        product("p2", "Castrol oil", "Castrol", "C1", 2000, &["oils"]),
    ]);

    let criteria = FilterCriteria::new().with_manufacturers(vec!["Castrol".to_string()]);
    let facets = engine.facets(&criteria).unwrap();
    let manufacturers = facets.iter().find(|f| f.id == "manufacturer").unwrap();
    let names: Vec<&str> = manufacturers.values.iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"Castrol"));
    assert!(names.contains(&"Shell"));
}

#[test]
fn request_normalization_feeds_engine() {
    let engine = engine(vec![product("p1", "Oil", "Shell", "S1", 4999, &["oils"])]);
    let request: FilterRequest = serde_json::from_value(serde_json::json!({
        "sort": "priceAsc",
        "categoryId": "oils",
        "maxPrice": 60.0
    }))
    .unwrap();
    let normalized = request.normalize().unwrap();

    let result = engine
        .filter_products(
            &normalized.criteria,
            &normalized.page,
            normalized.sort,
            &HashSet::new(),
        )
        .unwrap();
    assert_eq!(result.total_count, 1);
}
