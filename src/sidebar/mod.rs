//! Sidebar navigation trees.
//!
//! A sidebar is an ordered tree of document references and labeled
//! categories, authored by hand as an explicit literal. The renderer
//! consumes it for two purposes: drawing the navigation panel and
//! computing prev/next links for each page.
//!
//! The trees are deliberately not derived by scanning the content
//! directory: explicit authoring keeps navigation order stable across
//! unrelated filesystem changes and makes reordering reviewable.
//!
//! Every referenced document id must exist; a miss is build-fatal and
//! not subject to any fault policy (see [`Sidebars::resolve`]).

use crate::compose::DocIdSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// SidebarNode
// ============================================================================

/// One node of a sidebar tree.
///
/// Serialized untagged: a doc reference is a bare string, a category is
/// `{type: "category", label, items}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Leaf referencing a content document by id.
    Doc(String),
    /// Named grouping, nested to arbitrary depth.
    Category(SidebarCategory),
}

/// A named grouping of sidebar nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarCategory {
    #[serde(rename = "type")]
    kind: CategoryKind,
    /// Display label.
    pub label: String,
    /// Ordered children (leaves or nested categories).
    pub items: Vec<SidebarNode>,
}

/// Tag value fixed to "category" on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CategoryKind {
    #[default]
    Category,
}

impl SidebarNode {
    /// Leaf referencing `id`.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(id.into())
    }

    /// Category labeled `label` containing `items` in order.
    pub fn category(label: impl Into<String>, items: impl Into<Vec<SidebarNode>>) -> Self {
        Self::Category(SidebarCategory {
            kind: CategoryKind::Category,
            label: label.into(),
            items: items.into(),
        })
    }
}

/// Collect every document id in `nodes`, depth-first, in declaration
/// order. This is also the prev/next pagination order.
pub fn doc_ids(nodes: &[SidebarNode]) -> Vec<&str> {
    fn walk<'a>(nodes: &'a [SidebarNode], out: &mut Vec<&'a str>) {
        for node in nodes {
            match node {
                SidebarNode::Doc(id) => out.push(id),
                SidebarNode::Category(cat) => walk(&cat.items, out),
            }
        }
    }

    let mut out = Vec::new();
    walk(nodes, &mut out);
    out
}

/// Maximum nesting depth of `nodes` (a flat list of leaves is depth 1).
pub fn max_depth(nodes: &[SidebarNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            SidebarNode::Doc(_) => 1,
            SidebarNode::Category(cat) => 1 + max_depth(&cat.items),
        })
        .max()
        .unwrap_or(0)
}

/// Previous and next document ids around `id` in pagination order.
///
/// Returns `None` if `id` does not appear in the tree.
pub fn neighbors<'a>(
    nodes: &'a [SidebarNode],
    id: &str,
) -> Option<(Option<&'a str>, Option<&'a str>)> {
    let order = doc_ids(nodes);
    let pos = order.iter().position(|&d| d == id)?;
    let prev = pos.checked_sub(1).map(|i| order[i]);
    let next = order.get(pos + 1).copied();
    Some((prev, next))
}

// ============================================================================
// Sidebars
// ============================================================================

/// The named sidebar mapping handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sidebars {
    #[serde(flatten)]
    trees: BTreeMap<String, Vec<SidebarNode>>,
}

/// Unresolvable sidebar references. Always build-fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("sidebar '{sidebar}' references unknown document(s): {}", .ids.join(", "))]
pub struct MissingDocs {
    /// Sidebar name containing the misses.
    pub sidebar: String,
    /// Every unresolved document id, in tree order.
    pub ids: Vec<String>,
}

impl Sidebars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named tree. Replaces any existing tree with the same name.
    pub fn insert(&mut self, name: impl Into<String>, tree: Vec<SidebarNode>) {
        self.trees.insert(name.into(), tree);
    }

    pub fn get(&self, name: &str) -> Option<&[SidebarNode]> {
        self.trees.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.trees.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarNode])> {
        self.trees
            .iter()
            .map(|(name, tree)| (name.as_str(), tree.as_slice()))
    }

    /// Check every document reference against the known document ids.
    ///
    /// Reports the first sidebar with misses, listing all of its
    /// unresolved ids at once. No fault policy applies here: the
    /// renderer cannot draw navigation for a page that does not exist.
    pub fn resolve(&self, docs: &DocIdSet) -> Result<(), MissingDocs> {
        for (name, tree) in &self.trees {
            let missing: Vec<String> = doc_ids(tree)
                .into_iter()
                .filter(|id| !docs.contains(*id))
                .map(str::to_string)
                .collect();
            if !missing.is_empty() {
                return Err(MissingDocs {
                    sidebar: name.clone(),
                    ids: missing,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// The authored trees
// ============================================================================

/// Name of the documentation sidebar, referenced by the navbar.
pub const TUTORIAL_SIDEBAR: &str = "tutorialSidebar";

/// The hand-authored sidebar mapping for the QuantaDB documentation.
pub fn sidebars() -> Sidebars {
    use SidebarNode as N;

    let tutorial = vec![
        N::doc("intro"),
        N::doc("installation"),
        N::doc("usage"),
        N::doc("crud"),
        N::doc("query-operations"),
        N::doc("transactions"),
        N::doc("error-handling"),
        N::doc("batch-operations"),
        N::category(
            "Features",
            vec![
                N::doc("features/high-performance"),
                N::doc("features/scalable-architecture"),
                N::doc("features/flexible-data-model"),
                N::doc("features/reliable-durable"),
                N::doc("features/easy-integration"),
                N::doc("features/powerful-query-engine"),
                N::doc("features/data-security"),
                N::doc("features/advanced-indexing"),
                N::doc("features/real-time-updates"),
                N::doc("features/type-safety"),
                N::doc("features/lsm_storage"),
                N::doc("features/query_engine"),
                N::doc("features/schema_versioning"),
                N::doc("features/cross-platform"),
                N::doc("features/developer-experience"),
            ],
        ),
    ];

    let mut sidebars = Sidebars::new();
    sidebars.insert(TUTORIAL_SIDEBAR, tutorial);
    sidebars
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::doc_id_set;

    fn small_tree() -> Vec<SidebarNode> {
        vec![
            SidebarNode::doc("intro"),
            SidebarNode::category("Features", vec![SidebarNode::doc("features/x")]),
        ]
    }

    #[test]
    fn test_top_level_leaf_and_nested_category() {
        let tree = small_tree();
        assert_eq!(tree[0], SidebarNode::doc("intro"));
        match &tree[1] {
            SidebarNode::Category(cat) => {
                assert_eq!(cat.label, "Features");
                assert_eq!(cat.items, vec![SidebarNode::doc("features/x")]);
            }
            other => panic!("expected category, got {other:?}"),
        }
        assert_eq!(doc_ids(&tree), vec!["intro", "features/x"]);
        assert_eq!(max_depth(&tree), 2);
    }

    #[test]
    fn test_doc_ids_preserve_order() {
        let tree = sidebars();
        let tree = tree.get(TUTORIAL_SIDEBAR).unwrap();
        let ids = doc_ids(tree);
        assert_eq!(ids.len(), 23);
        assert_eq!(ids[0], "intro");
        assert_eq!(ids[7], "batch-operations");
        assert_eq!(ids[8], "features/high-performance");
        assert_eq!(ids[22], "features/developer-experience");
    }

    #[test]
    fn test_resolve_ok_when_all_ids_known() {
        let tree = sidebars();
        let docs = doc_id_set(doc_ids(tree.get(TUTORIAL_SIDEBAR).unwrap()));
        assert!(tree.resolve(&docs).is_ok());
    }

    #[test]
    fn test_resolve_missing_is_fatal() {
        let mut tree = Sidebars::new();
        tree.insert("docs", small_tree());
        let docs = doc_id_set(["intro"]);

        let err = tree.resolve(&docs).unwrap_err();
        assert_eq!(err.sidebar, "docs");
        assert_eq!(err.ids, vec!["features/x".to_string()]);
        assert!(err.to_string().contains("features/x"));
    }

    #[test]
    fn test_neighbors_follow_flattened_order() {
        let tree = sidebars();
        let tree = tree.get(TUTORIAL_SIDEBAR).unwrap();

        assert_eq!(neighbors(tree, "intro"), Some((None, Some("installation"))));
        // Last top-level doc pages into the first category item
        assert_eq!(
            neighbors(tree, "batch-operations"),
            Some((
                Some("error-handling"),
                Some("features/high-performance")
            ))
        );
        assert_eq!(
            neighbors(tree, "features/developer-experience"),
            Some((Some("features/cross-platform"), None))
        );
        assert_eq!(neighbors(tree, "nonexistent"), None);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(small_tree()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                "intro",
                {"type": "category", "label": "Features", "items": ["features/x"]}
            ])
        );
    }

    #[test]
    fn test_deserializes_from_wire_shape() {
        let tree: Vec<SidebarNode> = serde_json::from_value(serde_json::json!([
            "intro",
            {"type": "category", "label": "Features", "items": ["features/x"]}
        ]))
        .unwrap();
        assert_eq!(tree, small_tree());
    }

    #[test]
    fn test_arbitrary_nesting_depth() {
        let tree = vec![SidebarNode::category(
            "a",
            vec![SidebarNode::category(
                "b",
                vec![SidebarNode::category("c", vec![SidebarNode::doc("deep")])],
            )],
        )];
        assert_eq!(max_depth(&tree), 4);
        assert_eq!(doc_ids(&tree), vec!["deep"]);
    }
}
