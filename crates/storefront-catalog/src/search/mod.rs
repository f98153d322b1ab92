//! Search module.
//!
//! Free-text tokenization, filter criteria, facets, and result pages.

mod criteria;
mod results;
mod tokenizer;

pub use criteria::{FilterCriteria, PageRequest, SortKey, DEFAULT_PAGE_SIZE};
pub use results::{total_pages, Facet, FacetValue, ProductPage, ProductView};
pub use tokenizer::{is_active_search, SearchTokens, MIN_ACTIVE_SEARCH_LEN};
