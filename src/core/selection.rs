//! Derives directory selection state from the flat file list and the
//! selection set.

use serde::Serialize;
use std::collections::HashSet;

/// The tri-state of a directory checkbox.
///
/// Derived on demand, never stored on a tree node; recomputing per render
/// avoids staleness when the selection changes without a tree rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    None,
    Partial,
    All,
}

/// Iterates the entries of `all_files` that live under `directory`: the
/// exact path itself, or anything prefixed by `directory` plus a separator.
///
/// A plain prefix test is not enough; `src` must not claim `src-old/main.rs`.
pub fn files_under<'a>(
    directory: &str,
    all_files: &'a [String],
) -> impl Iterator<Item = &'a String> {
    let directory = directory.to_string();
    all_files.iter().filter(move |file| {
        file.strip_prefix(directory.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Computes the tri-state for `directory` from the current selection.
///
/// An empty match set (including a `directory` that does not appear in
/// `all_files` at all) resolves to [`SelectionState::None`]; the path is
/// treated as vacuously unselected rather than as a distinct error.
pub fn directory_selection_state(
    directory: &str,
    all_files: &[String],
    selected: &HashSet<String>,
) -> SelectionState {
    let mut total = 0usize;
    let mut picked = 0usize;
    for file in files_under(directory, all_files) {
        total += 1;
        if selected.contains(file) {
            picked += 1;
        }
    }

    if total == 0 || picked == 0 {
        SelectionState::None
    } else if picked == total {
        SelectionState::All
    } else {
        SelectionState::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn files(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn selected(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_files_under_requires_separator_boundary() {
        let all = files(&["src/main.rs", "src-old/main.rs", "src"]);
        let found: Vec<&str> = files_under("src", &all).map(String::as_str).collect();
        assert_eq!(found, vec!["src/main.rs", "src"]);
    }

    #[test]
    fn test_resolve_none_when_nothing_selected() {
        let all = files(&["b/c.ts", "b/d.ts"]);
        assert_eq!(
            directory_selection_state("b", &all, &HashSet::new()),
            SelectionState::None
        );
    }

    #[test]
    fn test_resolve_all_when_every_file_selected() {
        let all = files(&["b/c.ts", "b/d.ts", "a.ts"]);
        let sel = selected(&["b/c.ts", "b/d.ts"]);
        assert_eq!(
            directory_selection_state("b", &all, &sel),
            SelectionState::All
        );
    }

    #[test]
    fn test_resolve_partial_when_some_selected() {
        let all = files(&["b/c.ts", "b/d.ts"]);
        let sel = selected(&["b/c.ts"]);
        assert_eq!(
            directory_selection_state("b", &all, &sel),
            SelectionState::Partial
        );
    }

    #[test]
    fn test_resolve_unknown_path_is_none() {
        let all = files(&["b/c.ts"]);
        let sel = selected(&["b/c.ts"]);
        assert_eq!(
            directory_selection_state("nope", &all, &sel),
            SelectionState::None
        );
    }

    proptest! {
        /// Tri-state consistency: `All` iff every file under the directory
        /// is selected, `None` iff no file is, `Partial` otherwise.
        #[test]
        fn prop_resolve_matches_set_arithmetic(
            all in proptest::collection::vec("[a-c]/[a-c]\\.rs", 0..12),
            picks in proptest::collection::vec(any::<bool>(), 12),
            dir in "[a-c]",
        ) {
            let sel: HashSet<String> = all
                .iter()
                .zip(picks.iter())
                .filter(|(_, pick)| **pick)
                .map(|(path, _)| path.clone())
                .collect();

            let under: Vec<_> = files_under(&dir, &all).cloned().collect();
            let picked = under.iter().filter(|f| sel.contains(*f)).count();

            let expected = if under.is_empty() || picked == 0 {
                SelectionState::None
            } else if picked == under.len() {
                SelectionState::All
            } else {
                SelectionState::Partial
            };

            prop_assert_eq!(directory_selection_state(&dir, &all, &sel), expected);
        }

        /// The resolver is a pure function: repeated calls agree and the
        /// inputs are left untouched.
        #[test]
        fn prop_resolve_is_deterministic(
            all in proptest::collection::vec("[a-b]/[a-b]\\.rs", 0..8),
            dir in "[a-b]",
        ) {
            let sel: HashSet<String> = all.iter().take(all.len() / 2).cloned().collect();
            let first = directory_selection_state(&dir, &all, &sel);
            let second = directory_selection_state(&dir, &all, &sel);
            prop_assert_eq!(first, second);
        }
    }
}
