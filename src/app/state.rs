//! Defines the central, mutable state of the session.

use std::collections::HashSet;

use crate::config::AppConfig;
use crate::core::{files_under, ExpansionPolicy, TreeBuilder, TreeNode};

use super::provider::{Project, ProjectSummary};

/// Holds the complete, mutable state of one picker session.
///
/// This struct is wrapped in an `Arc<Mutex<...>>` so command handlers and
/// async provider tasks can share it. All mutations run to completion
/// synchronously; the UI serializes user input, so at most one mutation is
/// ever in flight.
pub struct SessionState {
    /// The application's configuration settings.
    pub config: AppConfig,
    /// The projects known to the service, as last fetched.
    pub projects: Vec<ProjectSummary>,
    /// The name of the currently opened project, if any.
    pub current_project: Option<String>,
    /// The flat file listing of the current project. This is the authority
    /// the selection set is validated against.
    pub files: Vec<String>,
    /// The set of currently selected file paths. Invariant: every entry
    /// exists in `files`; enforced by clearing on project change.
    pub selected_files: HashSet<String>,
    /// The built tree for the current project, including expansion flags.
    pub tree: Vec<TreeNode>,
    /// The current search query for the tree view.
    pub search_query: String,
    /// `true` while a provider call is in flight.
    pub is_loading: bool,
}

impl Default for SessionState {
    /// Creates a default `SessionState`, loading the configuration from disk.
    fn default() -> Self {
        Self {
            config: AppConfig::load().unwrap_or_default(),
            projects: Vec::new(),
            current_project: None,
            files: Vec::new(),
            selected_files: HashSet::new(),
            tree: Vec::new(),
            search_query: String::new(),
            is_loading: false,
        }
    }
}

impl SessionState {
    /// Replaces the active project: installs the new file list, rebuilds the
    /// tree with the default shallow expansion, and clears the selection set
    /// and search query in the same step.
    ///
    /// Path identity is not comparable across projects, so no part of the
    /// old selection may outlive its file list; clearing and rebuilding
    /// happen together before any observer sees the new state.
    pub fn load_project(&mut self, project: Project) {
        tracing::info!(
            project = %project.name,
            files = project.files.len(),
            "Loading project"
        );
        self.selected_files.clear();
        self.search_query.clear();
        self.files = project.files;
        self.current_project = Some(project.name);
        let tree = TreeBuilder::build(&self.files);
        self.tree =
            ExpansionPolicy::apply_default_expansion(&tree, self.config.default_expansion_depth);
    }

    /// Resets all state related to the opened project.
    pub fn clear_project(&mut self) {
        self.current_project = None;
        self.files.clear();
        self.selected_files.clear();
        self.tree.clear();
        self.search_query.clear();
    }

    /// Flips membership of `path` in the selection set. Idempotent flip, no
    /// special cases.
    pub fn toggle_file(&mut self, path: &str) {
        if !self.selected_files.remove(path) {
            self.selected_files.insert(path.to_string());
        }
    }

    /// Toggles every file under the directory `path`.
    ///
    /// If every file under the directory is already selected, all of them
    /// are removed; otherwise all of them are added. A partial selection
    /// therefore resolves to "select all" on the next toggle — the cycle is
    /// deliberately two-state, not a none/partial/all rotation. Directories
    /// with no files underneath are a no-op.
    pub fn toggle_directory(&mut self, path: &str) {
        let under: Vec<String> = files_under(path, &self.files).cloned().collect();
        if under.is_empty() {
            tracing::debug!(directory = %path, "Directory toggle matched no files");
            return;
        }

        let all_selected = under.iter().all(|file| self.selected_files.contains(file));
        if all_selected {
            for file in &under {
                self.selected_files.remove(file);
            }
        } else {
            self.selected_files.extend(under);
        }
    }

    /// Selects the full current file list.
    pub fn select_all(&mut self) {
        self.selected_files = self.files.iter().cloned().collect();
    }

    /// Clears the selection set entirely.
    pub fn deselect_all(&mut self) {
        self.selected_files.clear();
    }

    /// Flips the `expanded` flag on the directory node with the given id.
    /// Ids of file nodes (and unknown ids) are ignored.
    pub fn toggle_node_expansion(&mut self, id: &str) {
        fn toggle(nodes: &mut [TreeNode], id: &str) -> bool {
            for node in nodes {
                if node.id == id {
                    if node.is_directory {
                        node.expanded = !node.expanded;
                    }
                    return true;
                }
                if let Some(children) = node.children.as_mut() {
                    if toggle(children, id) {
                        return true;
                    }
                }
            }
            false
        }
        toggle(&mut self.tree, id);
    }

    /// Sets the search query used to filter the rendered tree.
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }
}
