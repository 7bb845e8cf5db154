//! # Output Views
//!
//! The seven ordered views derived from one run's folder set:
//!
//! | view                          | contents                               |
//! |-------------------------------|----------------------------------------|
//! | `distinct_folders`            | every changed folder, canonical order  |
//! | `folders_with_metadata`       | folders with a usable sort key         |
//! | `folders_without_metadata`    | the complement                         |
//! | `folders_sorted_alpha_asc`    | full set, lexicographic ascending      |
//! | `folders_sorted_alpha_desc`   | full set, lexicographic descending     |
//! | `folders_sorted_meta_asc`     | metadata subset, sort key ascending    |
//! | `folders_sorted_meta_desc`    | metadata subset, sort key descending   |
//!
//! Every view is a pure function of the distinct folder set and the
//! classification: identical inputs always produce byte-identical views.
//! Metadata sorts are stable over the alphabetical canonical order, so
//! equal sort keys tie-break alphabetically instead of drifting between
//! runs.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::metadata::{Classification, SortKey};

/// The seven ordered output views for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderViews {
    pub distinct_folders: Vec<String>,
    pub folders_with_metadata: Vec<String>,
    pub folders_without_metadata: Vec<String>,
    pub folders_sorted_alpha_asc: Vec<String>,
    pub folders_sorted_alpha_desc: Vec<String>,
    pub folders_sorted_meta_asc: Vec<String>,
    pub folders_sorted_meta_desc: Vec<String>,
}

impl FolderViews {
    /// Build all views from the distinct folder set and its classification.
    ///
    /// Fails only when metadata sort keys mix the numeric and string
    /// classes; every other input yields views.
    pub fn build(distinct: &BTreeSet<String>, classification: &Classification) -> Result<Self> {
        // BTreeSet iteration is already ascending lexicographic
        let alpha_asc: Vec<String> = distinct.iter().cloned().collect();
        let mut alpha_desc = alpha_asc.clone();
        alpha_desc.reverse();

        let with_metadata: Vec<String> = classification
            .with_metadata
            .iter()
            .map(|(folder, _)| folder.clone())
            .collect();

        let meta_asc = sorted_by_key(&classification.with_metadata, false)?;
        let meta_desc = sorted_by_key(&classification.with_metadata, true)?;

        Ok(Self {
            distinct_folders: alpha_asc.clone(),
            folders_with_metadata: with_metadata,
            folders_without_metadata: classification.without_metadata.clone(),
            folders_sorted_alpha_asc: alpha_asc,
            folders_sorted_alpha_desc: alpha_desc,
            folders_sorted_meta_asc: meta_asc,
            folders_sorted_meta_desc: meta_desc,
        })
    }

    /// Strip a literal leading prefix from every path in every view.
    ///
    /// This is textual removal, not a path-boundary-aware strip: the prefix
    /// `"services/"` turns `"services/a"` into `"a"`. Paths that do not
    /// start with the prefix are left alone, so the operation is idempotent.
    pub fn strip_prefix(&mut self, prefix: &str) {
        for view in [
            &mut self.distinct_folders,
            &mut self.folders_with_metadata,
            &mut self.folders_without_metadata,
            &mut self.folders_sorted_alpha_asc,
            &mut self.folders_sorted_alpha_desc,
            &mut self.folders_sorted_meta_asc,
            &mut self.folders_sorted_meta_desc,
        ] {
            for path in view.iter_mut() {
                if let Some(rest) = path.strip_prefix(prefix) {
                    *path = rest.to_string();
                }
            }
        }
    }

    /// Serialize the aggregate JSON artifact (compact, no interior spaces).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Sort the metadata subset by sort key, ascending or descending.
///
/// Entries must arrive in the canonical alphabetical order; the sort is
/// stable, so equal keys keep that order in both directions. Mixing numeric
/// and string keys across folders is a fatal type-consistency error, never
/// a silent coercion.
fn sorted_by_key(entries: &[(String, SortKey)], descending: bool) -> Result<Vec<String>> {
    ensure_homogeneous(entries)?;

    let mut ordered: Vec<&(String, SortKey)> = entries.iter().collect();
    ordered.sort_by(|a, b| {
        let cmp = compare_keys(&a.1, &b.1);
        if descending {
            cmp.reverse()
        } else {
            cmp
        }
    });

    Ok(ordered.into_iter().map(|(folder, _)| folder.clone()).collect())
}

/// Reject sort-key sets that mix the numeric and string classes.
fn ensure_homogeneous(entries: &[(String, SortKey)]) -> Result<()> {
    let Some((_, first)) = entries.first() else {
        return Ok(());
    };

    for (folder, key) in &entries[1..] {
        match (first, key) {
            (SortKey::Number(_), SortKey::Text(text)) => {
                return Err(Error::SortKeyMismatch {
                    folder: folder.clone(),
                    detail: format!("expected numeric key, found string {text:?}"),
                })
            }
            (SortKey::Text(_), SortKey::Number(n)) => {
                return Err(Error::SortKeyMismatch {
                    folder: folder.clone(),
                    detail: format!("expected string key, found number {n}"),
                })
            }
            _ => {}
        }
    }

    Ok(())
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        // Mixed classes are rejected by ensure_homogeneous before sorting
        _ => Ordering::Equal,
    }
}
