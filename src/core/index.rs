//! Normalizes the flat file list before tree construction.

/// A utility struct for ordering raw path lists.
///
/// This struct is stateless and provides methods as associated functions.
pub struct PathIndex;

impl PathIndex {
    /// Returns a lexicographically sorted copy of `paths`.
    ///
    /// Sorting is case sensitive and the input is left untouched. Duplicate
    /// entries are preserved; the tree builder folds them into one node.
    pub fn sorted(paths: &[String]) -> Vec<String> {
        let mut sorted = paths.to_vec();
        sorted.sort_unstable();
        sorted
    }
}
