//! Decides which path list to send to the content service.

use std::collections::HashSet;

/// A utility struct for planning content requests.
///
/// This struct is stateless and provides methods as associated functions.
pub struct RequestPlanner;

impl RequestPlanner {
    /// Returns the path list for a content request. An empty list is the
    /// sentinel for "fetch the entire project", letting the server
    /// short-circuit and keeping the request payload small.
    ///
    /// The sentinel fires exactly when `|selected| == |all_files|`. This is
    /// a cardinality comparison, not a set-equality check; it stays sound
    /// because the session clears the selection whenever the file list
    /// changes, so the two can never drift apart within one project.
    /// Explicit lists are sorted for deterministic requests.
    pub fn plan(selected: &HashSet<String>, all_files: &[String]) -> Vec<String> {
        if selected.len() == all_files.len() {
            return Vec::new();
        }
        let mut paths: Vec<String> = selected.iter().cloned().collect();
        paths.sort_unstable();
        paths
    }
}
