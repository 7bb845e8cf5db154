//! Property-based tests for the view-building pipeline.
//!
//! These tests use proptest to generate random changed-path listings and
//! verify that the set, partition, and ordering invariants hold for all
//! possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::folders::{distinct_folders, parent_folder};
    use crate::metadata::{Classification, SortKey};
    use crate::views::FolderViews;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn path_strategy() -> impl Strategy<Value = String> {
        // Repo-relative paths, including blank lines and root-level files
        prop_oneof![
            "[a-z]{1,4}(/[a-z]{1,4}){0,2}/[a-z]{1,6}\\.[a-z]{1,3}",
            "[a-z]{1,6}\\.[a-z]{1,3}",
            Just(String::new()),
            Just("   ".to_string()),
        ]
    }

    /// Split a folder set into a with/without-metadata classification,
    /// assigning numeric keys to the first `with` folders in order.
    fn classify_first_n(distinct: &BTreeSet<String>, n: usize) -> Classification {
        let mut classification = Classification::default();
        for (i, folder) in distinct.iter().enumerate() {
            if i < n {
                classification
                    .with_metadata
                    .push((folder.clone(), SortKey::Number((i % 3) as f64)));
            } else {
                classification.without_metadata.push(folder.clone());
            }
        }
        classification
    }

    proptest! {
        /// Property: duplicates and blank lines never inflate the distinct count
        #[test]
        fn distinct_count_matches_unique_parents(paths in prop::collection::vec(path_strategy(), 0..30)) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let set = distinct_folders(refs.iter().copied());

            let expected: BTreeSet<String> = refs
                .iter()
                .filter(|p| !p.trim().is_empty())
                .map(|p| parent_folder(p).to_string())
                .collect();
            prop_assert_eq!(set, expected);
        }

        /// Property: with/without metadata partition the distinct set exactly
        #[test]
        fn partition_is_exact(
            paths in prop::collection::vec(path_strategy(), 0..30),
            n in 0usize..30,
        ) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let distinct = distinct_folders(refs.iter().copied());
            let classification = classify_first_n(&distinct, n);

            let views = FolderViews::build(&distinct, &classification).unwrap();

            let mut union: BTreeSet<&String> = views.folders_with_metadata.iter().collect();
            let without: BTreeSet<&String> = views.folders_without_metadata.iter().collect();
            prop_assert!(union.is_disjoint(&without));
            union.extend(without);

            let all: BTreeSet<&String> = distinct.iter().collect();
            prop_assert_eq!(union, all);
        }

        /// Property: alpha descending is the element-for-element reverse of ascending
        #[test]
        fn alpha_desc_reverses_asc(paths in prop::collection::vec(path_strategy(), 0..30)) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let distinct = distinct_folders(refs.iter().copied());
            let classification = classify_first_n(&distinct, 0);

            let views = FolderViews::build(&distinct, &classification).unwrap();
            let mut reversed = views.folders_sorted_alpha_asc.clone();
            reversed.reverse();
            prop_assert_eq!(views.folders_sorted_alpha_desc, reversed);
        }

        /// Property: metadata sorts are permutations of the with-metadata view
        #[test]
        fn meta_sorts_cover_metadata_subset(
            paths in prop::collection::vec(path_strategy(), 0..30),
            n in 0usize..30,
        ) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let distinct = distinct_folders(refs.iter().copied());
            let classification = classify_first_n(&distinct, n);

            let views = FolderViews::build(&distinct, &classification).unwrap();

            let with: BTreeSet<&String> = views.folders_with_metadata.iter().collect();
            let asc: BTreeSet<&String> = views.folders_sorted_meta_asc.iter().collect();
            let desc: BTreeSet<&String> = views.folders_sorted_meta_desc.iter().collect();
            prop_assert_eq!(views.folders_sorted_meta_asc.len(), with.len());
            prop_assert_eq!(&asc, &with);
            prop_assert_eq!(&desc, &with);
        }

        /// Property: building views twice from the same input is byte-identical
        #[test]
        fn views_are_deterministic(
            paths in prop::collection::vec(path_strategy(), 0..30),
            n in 0usize..30,
        ) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let distinct = distinct_folders(refs.iter().copied());
            let classification = classify_first_n(&distinct, n);

            let first = FolderViews::build(&distinct, &classification).unwrap();
            let second = FolderViews::build(&distinct, &classification).unwrap();
            prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        }

        /// Property: stripping a prefix from an already-normalized view is a no-op
        #[test]
        fn strip_prefix_is_idempotent_once_normalized(
            paths in prop::collection::vec(path_strategy(), 0..30),
            prefix in "[a-z]{1,4}/",
        ) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let distinct = distinct_folders(refs.iter().copied());
            let classification = classify_first_n(&distinct, 0);

            let mut views = FolderViews::build(&distinct, &classification).unwrap();
            views.strip_prefix(&prefix);

            // A single strip can re-expose the prefix (e.g. "a/a/x" with
            // prefix "a/"); idempotence is only promised once it is gone
            prop_assume!(views.distinct_folders.iter().all(|p| !p.starts_with(&prefix)));

            let once = views.clone();
            views.strip_prefix(&prefix);
            prop_assert_eq!(views, once);
        }
    }
}
