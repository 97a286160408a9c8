//! Contains all the command handlers that are callable from the UI layer.
//!
//! Each function corresponds to a discrete user action. The handlers mutate
//! the `SessionState`, talk to the [`ProjectProvider`] where needed, and
//! send `UserEvent`s back to the UI. Selection and tree mutations run to
//! completion synchronously; only provider calls suspend, and the state
//! mutex is never held across an await.

use std::sync::{Arc, Mutex};

use super::events::UserEvent;
use super::helpers::with_state_and_notify;
use super::provider::ProjectProvider;
use super::proxy::EventProxy;
use super::state::SessionState;
use crate::core::RequestPlanner;

/// Fetches the project list from the service and stores it in the session.
pub async fn refresh_projects<P: EventProxy>(
    provider: Arc<dyn ProjectProvider>,
    proxy: P,
    state: Arc<Mutex<SessionState>>,
) {
    with_state_and_notify(&state, &proxy, |s| s.is_loading = true);

    match provider.list_projects().await {
        Ok(projects) => {
            tracing::info!(count = projects.len(), "Fetched project list");
            with_state_and_notify(&state, &proxy, |s| {
                s.projects = projects;
                s.is_loading = false;
            });
        }
        Err(e) => {
            tracing::warn!("Failed to fetch project list: {e}");
            with_state_and_notify(&state, &proxy, |s| s.is_loading = false);
            proxy.send_event(UserEvent::Error(format!("Failed to load projects: {e}")));
        }
    }
}

/// Opens a project: fetches its metadata and installs the file list, which
/// atomically clears the previous selection and rebuilds the tree.
pub async fn open_project<P: EventProxy>(
    name: String,
    provider: Arc<dyn ProjectProvider>,
    proxy: P,
    state: Arc<Mutex<SessionState>>,
) {
    with_state_and_notify(&state, &proxy, |s| s.is_loading = true);

    match provider.project_metadata(&name).await {
        Ok(project) => {
            with_state_and_notify(&state, &proxy, |s| {
                s.load_project(project);
                s.is_loading = false;
            });
        }
        Err(e) => {
            tracing::warn!(project = %name, "Failed to open project: {e}");
            with_state_and_notify(&state, &proxy, |s| s.is_loading = false);
            proxy.send_event(UserEvent::Error(format!("Failed to open '{name}': {e}")));
        }
    }
}

/// Closes the current project and resets all derived state.
pub fn clear_project<P: EventProxy>(proxy: P, state: Arc<Mutex<SessionState>>) {
    with_state_and_notify(&state, &proxy, |s| s.clear_project());
}

/// Flips the selection of a single file.
pub fn toggle_file_selection<P: EventProxy>(
    path: String,
    proxy: P,
    state: Arc<Mutex<SessionState>>,
) {
    with_state_and_notify(&state, &proxy, |s| s.toggle_file(&path));
}

/// Toggles every file under a directory (two-state: partial resolves to
/// select-all, a full selection collapses to none).
pub fn toggle_directory_selection<P: EventProxy>(
    path: String,
    proxy: P,
    state: Arc<Mutex<SessionState>>,
) {
    with_state_and_notify(&state, &proxy, |s| s.toggle_directory(&path));
}

/// Selects every file in the current project.
pub fn select_all_files<P: EventProxy>(proxy: P, state: Arc<Mutex<SessionState>>) {
    with_state_and_notify(&state, &proxy, |s| s.select_all());
}

/// Clears the selection.
pub fn deselect_all_files<P: EventProxy>(proxy: P, state: Arc<Mutex<SessionState>>) {
    with_state_and_notify(&state, &proxy, |s| s.deselect_all());
}

/// Updates the tree search query.
pub fn set_search_query<P: EventProxy>(query: String, proxy: P, state: Arc<Mutex<SessionState>>) {
    with_state_and_notify(&state, &proxy, |s| s.set_search_query(&query));
}

/// Flips the expansion of a directory node.
pub fn toggle_node_expansion<P: EventProxy>(
    id: String,
    proxy: P,
    state: Arc<Mutex<SessionState>>,
) {
    with_state_and_notify(&state, &proxy, |s| s.toggle_node_expansion(&id));
}

/// Fetches the aggregated content for the current selection.
///
/// The request is planned by [`RequestPlanner`]: a full selection is sent as
/// the empty-list sentinel so the server can short-circuit. The result is
/// delivered as a [`UserEvent::ContentReady`] event.
pub async fn fetch_selected_content<P: EventProxy>(
    provider: Arc<dyn ProjectProvider>,
    proxy: P,
    state: Arc<Mutex<SessionState>>,
) {
    let (project, paths) = {
        let state_guard = state
            .lock()
            .expect("Mutex was poisoned. This should not happen.");

        let Some(project) = state_guard.current_project.clone() else {
            proxy.send_event(UserEvent::Error("No project loaded".to_string()));
            return;
        };
        if state_guard.selected_files.is_empty() {
            proxy.send_event(UserEvent::Error("No files selected".to_string()));
            return;
        }
        (
            project,
            RequestPlanner::plan(&state_guard.selected_files, &state_guard.files),
        )
    };

    tracing::info!(
        project = %project,
        paths = paths.len(),
        "Requesting content (0 paths = whole project)"
    );
    with_state_and_notify(&state, &proxy, |s| s.is_loading = true);

    let result = provider.project_content(&project, &paths).await;
    with_state_and_notify(&state, &proxy, |s| s.is_loading = false);

    match result {
        Ok(content) if content.is_empty() => {
            proxy.send_event(UserEvent::Error(
                "No content received from server".to_string(),
            ));
        }
        Ok(content) => proxy.send_event(UserEvent::ContentReady(content)),
        Err(e) => proxy.send_event(UserEvent::Error(format!("Failed to fetch content: {e}"))),
    }
}
