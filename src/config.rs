//! # Run Configuration
//!
//! This module defines `RunConfig`, the per-run context object handed to
//! every pipeline stage. All configuration is resolved and validated up
//! front; no stage mutates it afterwards.
//!
//! ## Key Components
//!
//! - **`ComparisonTarget`**: which reference the working tree is diffed
//!   against — a branch or a tag, each with a sentinel value (`"default"`
//!   for the remote HEAD branch, `"latest"` for the most recent tag) that
//!   is resolved to a concrete ref by the git module at pipeline start.
//!
//! - **`MetadataConfig`**: descriptor file name plus the keyword to read
//!   from it. Present only when both halves are configured; when absent the
//!   metadata resolver is skipped entirely and every folder is classified
//!   as having no metadata.
//!
//! - **`RunConfig::from_options`**: the single validation gate. Mutually
//!   exclusive options (`branch`/`tag`, `include`/`exclude` patterns) fail
//!   here, before any git command runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::{FilterMode, PatternFilter};

/// Sentinel branch value resolved to the remote HEAD branch.
pub const DEFAULT_BRANCH: &str = "default";

/// Sentinel tag value resolved to the most recent tag.
pub const LATEST_TAG: &str = "latest";

/// The reference the working tree is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonTarget {
    /// A branch name, or [`DEFAULT_BRANCH`] for the remote HEAD branch.
    Branch(String),
    /// A tag name, or [`LATEST_TAG`] for the most recent tag.
    Tag(String),
}

/// Descriptor lookup configuration for the metadata resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Name of the per-folder YAML descriptor file (e.g. `meta.yaml`).
    pub file_name: String,
    /// Key to read from the descriptor as the sort key (e.g. `priority`).
    pub keyword: String,
}

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository root the run operates in.
    pub root: PathBuf,
    /// Reference to diff against.
    pub target: ComparisonTarget,
    /// Descriptor lookup settings; `None` skips metadata resolution.
    pub metadata: Option<MetadataConfig>,
    /// Optional substring filter over the raw changed-path listing.
    pub filter: Option<PatternFilter>,
    /// Optional literal prefix stripped from every path in every view.
    pub strip_prefix: Option<String>,
}

impl RunConfig {
    /// Build and validate a run configuration from raw option values.
    ///
    /// Exactly one of `branch`/`tag` must be given, and at most one of
    /// `include_patterns`/`exclude_patterns`. Violations are configuration
    /// errors and abort before any diff is computed.
    #[allow(clippy::too_many_arguments)]
    pub fn from_options(
        root: PathBuf,
        branch: Option<String>,
        tag: Option<String>,
        meta_file_name: Option<String>,
        keyword: Option<String>,
        include_patterns: Option<String>,
        exclude_patterns: Option<String>,
        strip_prefix: Option<String>,
    ) -> Result<Self> {
        // GitHub Actions exports an INPUT_* variable for every declared
        // input, empty when unset, so an empty option value means "not
        // given" across the whole surface.
        let branch = branch.filter(|v| !v.is_empty());
        let tag = tag.filter(|v| !v.is_empty());
        let meta_file_name = meta_file_name.filter(|v| !v.is_empty());
        let keyword = keyword.filter(|v| !v.is_empty());
        let include_patterns = include_patterns.filter(|v| !v.is_empty());
        let exclude_patterns = exclude_patterns.filter(|v| !v.is_empty());
        let strip_prefix = strip_prefix.filter(|v| !v.is_empty());

        let target = match (branch, tag) {
            (Some(_), Some(_)) => {
                return Err(Error::Config {
                    message: "--comparing-branch and --comparing-tag are mutually exclusive"
                        .to_string(),
                    hint: Some("pass only one comparison target".to_string()),
                })
            }
            (Some(branch), None) => ComparisonTarget::Branch(branch),
            (None, Some(tag)) => ComparisonTarget::Tag(tag),
            (None, None) => {
                return Err(Error::Config {
                    message: "no comparison target given".to_string(),
                    hint: Some(
                        "pass --comparing-branch <BRANCH|default> or --comparing-tag <TAG|latest>"
                            .to_string(),
                    ),
                })
            }
        };

        let filter = match (include_patterns, exclude_patterns) {
            (Some(_), Some(_)) => {
                return Err(Error::Config {
                    message: "--include-patterns and --exclude-patterns are mutually exclusive"
                        .to_string(),
                    hint: Some("pass only one pattern list".to_string()),
                })
            }
            (Some(spec), None) => Some(PatternFilter::from_comma_list(FilterMode::Include, &spec)),
            (None, Some(spec)) => Some(PatternFilter::from_comma_list(FilterMode::Exclude, &spec)),
            (None, None) => None,
        };

        // Metadata resolution needs both halves; a lone file name or keyword
        // classifies everything as without-metadata.
        let metadata = match (meta_file_name, keyword) {
            (Some(file_name), Some(keyword)) => Some(MetadataConfig { file_name, keyword }),
            _ => None,
        };

        Ok(Self {
            root,
            target,
            metadata,
            filter,
            strip_prefix,
        })
    }
}
