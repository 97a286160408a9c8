//! Computes expansion state for freshly built trees and search-filtered views.

use super::TreeNode;

/// A utility struct for expansion defaults and search-driven filtering.
///
/// Both operations are non-mutating and return new trees, so a caller can
/// keep the unfiltered tree around while rendering a filtered view.
pub struct ExpansionPolicy;

impl ExpansionPolicy {
    /// Returns a copy of `tree` with every directory at depth < `max_depth`
    /// expanded and every other directory collapsed. Depth is counted from 0
    /// at the roots.
    pub fn apply_default_expansion(tree: &[TreeNode], max_depth: usize) -> Vec<TreeNode> {
        tree.iter()
            .map(|node| Self::expand_node(node, 0, max_depth))
            .collect()
    }

    fn expand_node(node: &TreeNode, depth: usize, max_depth: usize) -> TreeNode {
        let children = node.children.as_ref().map(|children| {
            children
                .iter()
                .map(|child| Self::expand_node(child, depth + 1, max_depth))
                .collect()
        });
        TreeNode {
            expanded: node.is_directory && depth < max_depth,
            children,
            ..node.clone()
        }
    }

    /// Returns the subset of `tree` whose `name` or `path` contains `query`
    /// case-insensitively.
    ///
    /// A directory is retained if it matches directly or if any descendant
    /// matches; its children are the recursively filtered children, and it
    /// is forced open whenever filtered children exist so the match is
    /// visible without manual expansion. A directory that matches directly
    /// but has no matching children keeps its original `expanded` flag. An
    /// empty or whitespace-only query means "no filter" and returns the
    /// tree unchanged.
    pub fn filter_by_search(tree: &[TreeNode], query: &str) -> Vec<TreeNode> {
        if query.trim().is_empty() {
            return tree.to_vec();
        }
        Self::filter_nodes(tree, &query.to_lowercase())
    }

    fn filter_nodes(nodes: &[TreeNode], needle: &str) -> Vec<TreeNode> {
        let mut kept = Vec::new();
        for node in nodes {
            let matches = node.name.to_lowercase().contains(needle)
                || node.path.to_lowercase().contains(needle);

            match &node.children {
                Some(children) => {
                    let filtered = Self::filter_nodes(children, needle);
                    if !filtered.is_empty() || matches {
                        kept.push(TreeNode {
                            expanded: !filtered.is_empty() || node.expanded,
                            children: Some(filtered),
                            ..node.clone()
                        });
                    }
                }
                None => {
                    if matches {
                        kept.push(node.clone());
                    }
                }
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TreeBuilder;

    fn build(items: &[&str]) -> Vec<TreeNode> {
        TreeBuilder::build(&items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_default_expansion_opens_shallow_directories_only() {
        let tree = build(&["a/b/c.rs", "d/e.rs", "f.rs"]);
        let expanded = ExpansionPolicy::apply_default_expansion(&tree, 1);

        let a = &expanded[0];
        assert!(a.expanded, "depth 0 directory should be expanded");
        let b = &a.children.as_ref().unwrap()[0];
        assert!(!b.expanded, "depth 1 directory should stay collapsed");
        let d = &expanded[1];
        assert!(d.expanded);
        let f = &expanded[2];
        assert!(!f.expanded, "files never count as expanded");
    }

    #[test]
    fn test_default_expansion_zero_depth_collapses_everything() {
        let tree = build(&["a/b.rs"]);
        let expanded = ExpansionPolicy::apply_default_expansion(&tree, 0);
        assert!(!expanded[0].expanded);
    }

    #[test]
    fn test_default_expansion_does_not_mutate_input() {
        let tree = build(&["a/b.rs"]);
        let _ = ExpansionPolicy::apply_default_expansion(&tree, 1);
        assert!(!tree[0].expanded);
    }

    #[test]
    fn test_filter_empty_query_returns_tree_unchanged() {
        let tree = build(&["a/b.rs", "c.rs"]);
        assert_eq!(ExpansionPolicy::filter_by_search(&tree, ""), tree);
        assert_eq!(ExpansionPolicy::filter_by_search(&tree, "   "), tree);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_name_and_path() {
        let tree = build(&["src/Main.rs", "src/lib.rs", "docs/guide.md"]);
        let filtered = ExpansionPolicy::filter_by_search(&tree, "MAIN");

        assert_eq!(filtered.len(), 1);
        let src = &filtered[0];
        assert_eq!(src.path, "src");
        let children = src.children.as_ref().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].path, "src/Main.rs");
    }

    #[test]
    fn test_filter_forces_ancestors_open_on_descendant_match() {
        let tree = build(&["a/b/target.rs", "a/other.rs"]);
        let filtered = ExpansionPolicy::filter_by_search(&tree, "target");

        let a = &filtered[0];
        assert!(a.expanded, "ancestor of a match must be expanded");
        let b = &a.children.as_ref().unwrap()[0];
        assert!(b.expanded);
    }

    #[test]
    fn test_filter_matching_directory_children_match_via_path_prefix() {
        // A child's path embeds the directory name, so a query hitting the
        // directory also retains (and opens) its subtree.
        let tree = build(&["docs/guide.md", "src/main.rs"]);
        let filtered = ExpansionPolicy::filter_by_search(&tree, "docs");

        assert_eq!(filtered.len(), 1);
        let docs = &filtered[0];
        assert_eq!(docs.path, "docs");
        assert!(docs.expanded);
        let children = docs.children.as_ref().unwrap();
        assert_eq!(children.len(), 1, "docs/guide.md matches on its path");
    }

    #[test]
    fn test_filter_matching_empty_directory_keeps_original_expansion() {
        // Only a directory with no retained children falls back to its own
        // expanded flag; build one by hand since the builder always attaches
        // a file beneath each directory.
        let node = TreeNode {
            id: "docs".to_string(),
            name: "docs".to_string(),
            path: "docs".to_string(),
            is_directory: true,
            children: Some(Vec::new()),
            selected: false,
            expanded: false,
        };
        let filtered = ExpansionPolicy::filter_by_search(&[node.clone()], "docs");
        assert_eq!(filtered.len(), 1);
        assert!(!filtered[0].expanded, "collapsed state survives a direct match");

        let open = TreeNode {
            expanded: true,
            ..node
        };
        let filtered = ExpansionPolicy::filter_by_search(&[open], "docs");
        assert!(filtered[0].expanded);
    }

    #[test]
    fn test_filter_drops_non_matching_subtrees() {
        let tree = build(&["a/x.rs", "b/y.rs"]);
        let filtered = ExpansionPolicy::filter_by_search(&tree, "y.rs");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].path, "b");
    }

    #[test]
    fn test_filter_no_matches_yields_empty_forest() {
        let tree = build(&["a/x.rs"]);
        assert!(ExpansionPolicy::filter_by_search(&tree, "zzz").is_empty());
    }
}
