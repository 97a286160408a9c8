pub mod expansion;
pub mod index;
pub mod planner;
pub mod selection;
pub mod tree;

use serde::Serialize;

/// A single node in the file tree handed to the rendering collaborator.
///
/// Nodes are created once per unique path prefix when the tree is built and
/// are rebuilt wholesale whenever the underlying file list changes; node
/// identity does not survive a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Unique across the whole tree; equal to `path`.
    pub id: String,
    /// The last path segment.
    pub name: String,
    /// Full path from the project root, `/`-separated, no trailing separator.
    pub path: String,
    pub is_directory: bool,
    /// `Some` for directories (possibly empty), `None` for files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// Filled in for file nodes when a UI snapshot is generated. Directory
    /// selection is derived on demand via
    /// [`selection::directory_selection_state`], never stored on the node.
    pub selected: bool,
    /// Only meaningful for directories.
    pub expanded: bool,
}

pub use expansion::ExpansionPolicy;
pub use index::PathIndex;
pub use planner::RequestPlanner;
pub use selection::{directory_selection_state, files_under, SelectionState};
pub use tree::TreeBuilder;
