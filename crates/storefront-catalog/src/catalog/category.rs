//! Category types and the category tree.
//!
//! The category forest is represented as a flat arena plus id-indexed
//! adjacency maps rather than linked node objects, so a tree is cheap to
//! rebuild per request and safe to share between read-only sub-queries.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A product category in the catalog hierarchy.
///
/// Categories are bulk-loaded from the catalog-ingestion collaborator and
/// read-only from the engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Parent category ID (None for root categories).
    pub parent_id: Option<CategoryId>,
    /// Sort order position within parent.
    pub position: i32,
}

impl Category {
    /// Create a root category.
    pub fn root(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            position: 0,
        }
    }

    /// Create a child category.
    pub fn child(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        parent_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: Some(parent_id.into()),
            position: 0,
        }
    }

    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A materialized subtree node; each node carries its own children.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    /// The category at this node.
    pub category: Category,
    /// Direct children, ordered by position.
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Check if this node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Index over the category forest answering descendant-expansion queries.
///
/// Built in O(n) from the flat category list. A `parent_id` referencing a
/// category that does not exist is ignored and the category is treated as a
/// root; stricter validation belongs upstream in the ingestion collaborator.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    arena: Vec<Category>,
    index: HashMap<CategoryId, usize>,
    children: HashMap<CategoryId, Vec<usize>>,
    roots: Vec<usize>,
}

impl CategoryTree {
    /// Build the tree from a flat category list.
    pub fn build(categories: &[Category]) -> Self {
        let arena: Vec<Category> = categories.to_vec();
        let index: HashMap<CategoryId, usize> = arena
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        let mut children: HashMap<CategoryId, Vec<usize>> = HashMap::new();
        let mut roots: Vec<usize> = Vec::new();
        for (i, category) in arena.iter().enumerate() {
            match &category.parent_id {
                Some(parent_id) if index.contains_key(parent_id) => {
                    children.entry(parent_id.clone()).or_default().push(i);
                }
                // Unknown parent: treat as root rather than erroring.
                _ => roots.push(i),
            }
        }

        let by_position = |a: &usize, b: &usize| {
            let (ca, cb) = (&arena[*a], &arena[*b]);
            ca.position.cmp(&cb.position).then_with(|| ca.id.cmp(&cb.id))
        };
        roots.sort_by(by_position);
        for ids in children.values_mut() {
            ids.sort_by(by_position);
        }

        Self {
            arena,
            index,
            children,
            roots,
        }
    }

    /// Look up a category by id.
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.index.get(id).map(|&i| &self.arena[i])
    }

    /// Root categories, ordered by position.
    pub fn roots(&self) -> Vec<&Category> {
        self.roots.iter().map(|&i| &self.arena[i]).collect()
    }

    /// Check if a category has at least one child.
    pub fn has_children(&self, id: &CategoryId) -> bool {
        self.children.get(id).is_some_and(|c| !c.is_empty())
    }

    /// Expand root ids into the flattened set of the roots plus all their
    /// transitive descendants.
    ///
    /// An id with no matching category still appears in the result on its
    /// own; an empty input yields an empty set.
    pub fn expand(&self, root_ids: &[CategoryId]) -> HashSet<CategoryId> {
        let mut expanded = HashSet::new();
        for root_id in root_ids {
            if expanded.insert(root_id.clone()) {
                self.collect_descendants(root_id, &mut expanded);
            }
        }
        expanded
    }

    fn collect_descendants(&self, id: &CategoryId, out: &mut HashSet<CategoryId>) {
        let Some(child_indexes) = self.children.get(id) else {
            return;
        };
        for &i in child_indexes {
            let child = &self.arena[i];
            if out.insert(child.id.clone()) {
                self.collect_descendants(&child.id, out);
            }
        }
    }

    /// Materialize the full subtree under `root_id`.
    ///
    /// Returns `None` if the category does not exist.
    pub fn subtree(&self, root_id: &CategoryId) -> Option<CategoryNode> {
        let &i = self.index.get(root_id)?;
        Some(self.build_node(i))
    }

    fn build_node(&self, i: usize) -> CategoryNode {
        let category = self.arena[i].clone();
        let children = self
            .children
            .get(&category.id)
            .map(|ids| ids.iter().map(|&c| self.build_node(c)).collect())
            .unwrap_or_default();
        CategoryNode { category, children }
    }
}

/// Check whether a subtree node, or any of its descendants, is present in
/// the supplied set of category ids that have at least one matching product.
pub fn has_descendant_with_products(
    node: &CategoryNode,
    ids_with_products: &HashSet<CategoryId>,
) -> bool {
    ids_with_products.contains(&node.category.id)
        || node
            .children
            .iter()
            .any(|child| has_descendant_with_products(child, ids_with_products))
}
