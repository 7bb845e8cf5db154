//! Pipeline orchestration
//!
//! Sequences the stages of one run: resolve the comparison target, obtain
//! the raw diff listing, filter it, collapse to distinct folders, resolve
//! metadata, build the ordered views, and normalize paths.
//!
//! Reference resolution and the diff invocation are the degradable edge of
//! the pipeline: when either fails the run continues with an empty
//! changed-path set and produces all-empty views instead of aborting. All
//! later stages operate on in-memory data and only fail on configuration
//! or type-consistency errors.

use log::{error, info};

use crate::config::RunConfig;
use crate::error::Result;
use crate::folders;
use crate::git;
use crate::metadata::MetadataResolver;
use crate::views::FolderViews;

/// Execute one complete run and return the final output views.
pub fn execute(config: &RunConfig) -> Result<FolderViews> {
    let raw_paths = match resolve_and_diff(config) {
        Ok(paths) => paths,
        Err(e) => {
            error!("diff unavailable, continuing with empty change set: {e}");
            Vec::new()
        }
    };

    let retained: Vec<&str> = match &config.filter {
        Some(filter) => filter.apply(&raw_paths),
        None => raw_paths.iter().map(String::as_str).collect(),
    };

    let distinct = folders::distinct_folders(retained);
    info!("{} distinct changed folder(s)", distinct.len());

    // Classification and sorting always see un-normalized paths; descriptor
    // lookups need the real filesystem location.
    let mut resolver = MetadataResolver::new(&config.root, config.metadata.as_ref());
    let classification = resolver.classify(&distinct)?;

    let mut views = FolderViews::build(&distinct, &classification)?;

    if let Some(prefix) = &config.strip_prefix {
        views.strip_prefix(prefix);
    }

    Ok(views)
}

/// Resolve the comparison target and list the changed files against it.
fn resolve_and_diff(config: &RunConfig) -> Result<Vec<String>> {
    let target = git::resolve_target(&config.root, &config.target)?;
    info!("comparing working tree against {target}");
    git::diff_name_only(&config.root, &target)
}
