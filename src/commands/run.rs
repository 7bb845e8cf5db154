//! Run command implementation
//!
//! The run command executes the full pipeline: resolve the comparison
//! reference, diff, filter, extract distinct folders, resolve per-folder
//! metadata, build the seven ordered views, and emit them to the output
//! channel (`$GITHUB_OUTPUT` when set, stdout otherwise).

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use folder_matrix::config::RunConfig;
use folder_matrix::{output, pipeline};

/// Arguments for the run command
///
/// Each option also reads the GitHub Actions `INPUT_*` environment
/// variable of the same name, so the binary can be dropped straight into
/// a composite action.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Branch to compare with ("default" resolves the remote HEAD branch)
    #[arg(long, value_name = "BRANCH", env = "INPUT_COMPARING_BRANCH")]
    pub comparing_branch: Option<String>,

    /// Tag to compare with ("latest" resolves the most recent tag)
    #[arg(long, value_name = "TAG", env = "INPUT_COMPARING_TAG")]
    pub comparing_tag: Option<String>,

    /// Name of the per-folder YAML metadata file
    #[arg(long, value_name = "NAME", env = "INPUT_META_FILE_NAME")]
    pub meta_file_name: Option<String>,

    /// Keyword to look for in the metadata file
    #[arg(long, value_name = "KEY", env = "INPUT_KEYWORD")]
    pub keyword: Option<String>,

    /// Comma-separated substrings; keep only paths containing one of them
    #[arg(long, value_name = "PATTERNS", env = "INPUT_INCLUDE_PATTERNS")]
    pub include_patterns: Option<String>,

    /// Comma-separated substrings; drop paths containing any of them
    #[arg(long, value_name = "PATTERNS", env = "INPUT_EXCLUDE_PATTERNS")]
    pub exclude_patterns: Option<String>,

    /// Literal prefix removed from every path in every output view
    #[arg(long, value_name = "PREFIX", env = "INPUT_STRIP_PATH_PREFIX")]
    pub strip_path_prefix: Option<String>,

    /// Repository root to operate in
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub root: PathBuf,
}

/// Execute the run command
pub fn execute(args: RunArgs) -> Result<()> {
    let config = RunConfig::from_options(
        args.root,
        args.comparing_branch,
        args.comparing_tag,
        args.meta_file_name,
        args.keyword,
        args.include_patterns,
        args.exclude_patterns,
        args.strip_path_prefix,
    )?;

    let views = pipeline::execute(&config)?;
    output::emit(&views)?;

    Ok(())
}
