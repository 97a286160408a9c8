//! Builds the hierarchical file tree from a flat file list.

use super::{PathIndex, TreeNode};

/// A utility struct for constructing the tree forest.
///
/// This struct is stateless and provides methods as associated functions.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds an ordered forest of root-level nodes from a flat file list.
    ///
    /// The list is sorted through [`PathIndex`] first, so any relative input
    /// order yields an isomorphic tree. Each path is split on `/`; every
    /// segment except the last becomes (or reuses) a directory node, the
    /// last becomes a file node. If a later path reuses an earlier file's
    /// full path as a prefix, that node is promoted to a directory.
    ///
    /// Malformed paths (empty segments from consecutive or leading `/`) are
    /// passed through as literal segment names rather than rejected. An
    /// empty file list yields an empty forest.
    pub fn build(files: &[String]) -> Vec<TreeNode> {
        let mut roots: Vec<TreeNode> = Vec::new();
        for path in PathIndex::sorted(files) {
            Self::insert(&mut roots, &path);
        }
        roots
    }

    /// Walks `path` segment by segment, reusing a sibling of the same name
    /// at each level and creating the missing nodes.
    fn insert(roots: &mut Vec<TreeNode>, path: &str) {
        let segments: Vec<&str> = path.split('/').collect();
        let mut level = roots;
        let mut prefix = String::with_capacity(path.len());

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                prefix.push('/');
            }
            prefix.push_str(segment);
            let is_last = i + 1 == segments.len();

            let idx = match level.iter().position(|node| node.name == *segment) {
                Some(idx) => {
                    if !is_last && !level[idx].is_directory {
                        // A file entry whose path reappears as a directory
                        // prefix is promoted to a directory.
                        level[idx].is_directory = true;
                        level[idx].children = Some(Vec::new());
                    }
                    idx
                }
                None => {
                    level.push(TreeNode {
                        id: prefix.clone(),
                        name: (*segment).to_string(),
                        path: prefix.clone(),
                        is_directory: !is_last,
                        children: if is_last { None } else { Some(Vec::new()) },
                        selected: false,
                        expanded: false,
                    });
                    level.len() - 1
                }
            };

            if !is_last {
                level = level[idx]
                    .children
                    .as_mut()
                    .expect("directory node always has a children container");
            }
        }
    }
}
