//! # Folder Matrix Library
//!
//! This library computes the set of changed top-level folders between a git
//! working tree and a comparison reference (a branch or tag), enriches each
//! folder with optional per-folder YAML metadata, and produces sorted and
//! filtered views of that folder set for automation pipelines — typically
//! to drive matrix builds from a CI diff.
//!
//! ## Quick Example
//!
//! ```
//! use folder_matrix::folders::distinct_folders;
//! use folder_matrix::metadata::Classification;
//! use folder_matrix::views::FolderViews;
//!
//! // Collapse a raw diff listing into distinct parent folders
//! let distinct = distinct_folders(["svc-a/main.go", "svc-a/go.mod", "svc-b/main.go", ""]);
//! assert_eq!(distinct.len(), 2);
//!
//! // Without metadata configuration every folder lands in the same bucket
//! let classification = Classification {
//!     without_metadata: distinct.iter().cloned().collect(),
//!     ..Default::default()
//! };
//! let views = FolderViews::build(&distinct, &classification).unwrap();
//! assert_eq!(views.folders_sorted_alpha_asc, vec!["svc-a", "svc-b"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The per-run `RunConfig` context object,
//!   validated up front and passed immutably to every stage.
//! - **Filtering (`filter`)**: Substring include/exclude filtering of the
//!   raw changed-path listing.
//! - **Folder Extraction (`folders`)**: Parent-folder derivation and
//!   collapse into a distinct, canonically ordered set.
//! - **Metadata Resolution (`metadata`)**: Per-folder YAML descriptor
//!   lookup with a per-run read-through cache and a named
//!   present-but-falsy-counts-as-absent policy.
//! - **Views (`views`)**: The seven deterministic output orderings and the
//!   prefix normalizer applied across all of them.
//! - **Git plumbing (`git`)**: System-git invocations for reference
//!   resolution and the name-only diff.
//!
//! ## Execution Flow
//!
//! The `pipeline` module sequences one run:
//!
//! 1. Resolve the comparison target (`default` branch / `latest` tag
//!    sentinels included); a failure here degrades to an empty change set.
//! 2. Obtain the name-only diff listing.
//! 3. Filter paths, then collapse them to distinct folders.
//! 4. Resolve per-folder metadata and classify.
//! 5. Build the seven output views and normalize paths.
//!
//! The `output` module then emits the views as GitHub-Actions-style
//! outputs plus one aggregate JSON object.

pub mod config;
pub mod error;
pub mod filter;
pub mod folders;
pub mod git;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod views;

#[cfg(test)]
mod views_proptest;
