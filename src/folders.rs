//! Folder extraction from changed-path listings

use std::collections::BTreeSet;

/// Return the parent folder of a repository-relative path.
///
/// The final path segment is removed; a root-level file has no parent
/// segment and maps to the empty string, which stands for the repository
/// root.
pub fn parent_folder(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent,
        None => "",
    }
}

/// Collapse a changed-path sequence into the distinct set of parent folders.
///
/// Empty and whitespace-only entries are discarded first, so a trailing
/// blank line from the diff listing never becomes a phantom folder. The
/// returned `BTreeSet` iterates in ascending byte-lexicographic order,
/// which downstream sorting relies on as the canonical tie-break order.
pub fn distinct_folders<'a, I>(paths: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    paths
        .into_iter()
        .filter(|path| !path.trim().is_empty())
        .map(|path| parent_folder(path).to_string())
        .collect()
}
