//! Transitive descendant expansion.

use std::collections::BTreeSet;

use drivelinks_core::types::FolderId;

use super::index::FolderIndex;

/// Expand `seeds` into themselves plus every folder reachable through the
/// index adjacency.
///
/// A folder reached along several paths (multi-parent folders, or a cycle in
/// the source data) is visited once.
pub fn expand<'a, I>(index: &FolderIndex, seeds: I) -> BTreeSet<FolderId>
where
    I: IntoIterator<Item = &'a FolderId>,
{
    let mut closure = BTreeSet::new();
    let mut pending: Vec<FolderId> = seeds.into_iter().cloned().collect();

    while let Some(id) = pending.pop() {
        if closure.contains(&id) {
            continue;
        }
        for child in index.children(&id) {
            if !closure.contains(child) {
                pending.push(child.clone());
            }
        }
        closure.insert(id);
    }

    closure
}
