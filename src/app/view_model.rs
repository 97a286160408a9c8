//! Responsible for transforming the `SessionState` into a `UiState` view model.
//!
//! This module acts as a presentation layer, preparing data specifically for
//! consumption by the rendering collaborator: it applies the search filter to
//! the stored tree and stamps the per-file selection flags. Directory
//! tri-state is deliberately not baked into the snapshot; renderers call
//! [`crate::core::directory_selection_state`] per node so the value can never
//! go stale between selection changes and tree rebuilds.

use serde::Serialize;
use std::collections::HashSet;

use crate::core::{ExpansionPolicy, TreeNode};

use super::provider::ProjectSummary;
use super::state::SessionState;

/// A serializable snapshot of the session for the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    pub projects: Vec<ProjectSummary>,
    pub current_project: Option<String>,
    pub tree: Vec<TreeNode>,
    pub total_files: usize,
    pub selected_files_count: usize,
    pub search_query: String,
    pub is_loading: bool,
}

/// Creates the complete `UiState` from the current `SessionState`.
pub fn generate_ui_state(state: &SessionState) -> UiState {
    let filtered = ExpansionPolicy::filter_by_search(&state.tree, &state.search_query);
    let tree = mark_selected(filtered, &state.selected_files);

    UiState {
        projects: state.projects.clone(),
        current_project: state.current_project.clone(),
        tree,
        total_files: state.files.len(),
        selected_files_count: state.selected_files.len(),
        search_query: state.search_query.clone(),
        is_loading: state.is_loading,
    }
}

/// Stamps the `selected` flag onto file nodes from the selection set.
fn mark_selected(nodes: Vec<TreeNode>, selected: &HashSet<String>) -> Vec<TreeNode> {
    nodes
        .into_iter()
        .map(|mut node| {
            if node.is_directory {
                node.children = node.children.map(|children| mark_selected(children, selected));
            } else {
                node.selected = selected.contains(&node.path);
            }
            node
        })
        .collect()
}
