//! Git plumbing for the pipeline
//!
//! Uses the system git command, which automatically handles SSH keys,
//! credential helpers, and anything else configured in ~/.gitconfig.
//! The pipeline only consumes path listings and resolved ref names; diff
//! content is never inspected.

use std::path::Path;
use std::process::Command;

use log::warn;

use crate::config::{ComparisonTarget, DEFAULT_BRANCH, LATEST_TAG};
use crate::error::{Error, Result};

/// Run a git command in `root` and return its stdout as a string.
fn run_git(root: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .map_err(|e| Error::GitCommand {
            command: format!("git {}", args.join(" ")),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitCommand {
            command: format!("git {}", args.join(" ")),
            stderr: stderr.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// List the files changed between the working tree and `target`.
///
/// Runs `git diff <target> --name-only`, one repository-relative path per
/// line. Blank lines are passed through; the folder extractor discards them.
pub fn diff_name_only(root: &Path, target: &str) -> Result<Vec<String>> {
    let stdout = run_git(root, &["diff", target, "--name-only"])?;
    Ok(stdout.lines().map(str::to_string).collect())
}

/// Determine the remote HEAD (primary) branch name.
///
/// Parses `git remote show origin` for the `HEAD branch:` line. When origin
/// is missing or the line cannot be found, falls back to `main` with a
/// warning rather than failing the run.
pub fn default_branch(root: &Path) -> Result<String> {
    let stdout = match run_git(root, &["remote", "show", "origin"]) {
        Ok(stdout) => stdout,
        Err(e) => {
            warn!("could not query origin for the default branch, falling back to 'main': {e}");
            return Ok("main".to_string());
        }
    };

    for line in stdout.lines() {
        if let Some(branch) = line.trim().strip_prefix("HEAD branch:") {
            let branch = branch.trim();
            if !branch.is_empty() {
                return Ok(branch.to_string());
            }
        }
    }

    warn!("could not determine default branch from origin, falling back to 'main'");
    Ok("main".to_string())
}

/// Find the most recent tag reachable from HEAD.
pub fn latest_tag(root: &Path) -> Result<String> {
    let stdout = run_git(root, &["describe", "--tags", "--abbrev=0"])?;
    let tag = stdout.trim();
    if tag.is_empty() {
        return Err(Error::GitCommand {
            command: "git describe --tags --abbrev=0".to_string(),
            stderr: "no tags found".to_string(),
        });
    }
    Ok(tag.to_string())
}

/// Resolve a comparison target to a concrete ref name.
///
/// The `default` branch sentinel and `latest` tag sentinel are resolved via
/// git; literal branch and tag names pass through untouched.
pub fn resolve_target(root: &Path, target: &ComparisonTarget) -> Result<String> {
    match target {
        ComparisonTarget::Branch(name) if name == DEFAULT_BRANCH => default_branch(root),
        ComparisonTarget::Branch(name) => Ok(name.clone()),
        ComparisonTarget::Tag(name) if name == LATEST_TAG => latest_tag(root),
        ComparisonTarget::Tag(name) => Ok(name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_literal_branch_passes_through() {
        // Literal names never touch git, so no repo is needed
        let target = ComparisonTarget::Branch("develop".to_string());
        let resolved = resolve_target(&PathBuf::from("."), &target).unwrap();
        assert_eq!(resolved, "develop");
    }

    #[test]
    fn test_resolve_literal_tag_passes_through() {
        let target = ComparisonTarget::Tag("v1.2.3".to_string());
        let resolved = resolve_target(&PathBuf::from("."), &target).unwrap();
        assert_eq!(resolved, "v1.2.3");
    }

    #[test]
    fn test_run_git_failure_reports_command() {
        let temp = tempfile::TempDir::new().unwrap();
        // Not a repository, so diff must fail with a GitCommand error
        let err = diff_name_only(temp.path(), "main").unwrap_err();
        match err {
            Error::GitCommand { command, .. } => {
                assert!(command.contains("diff main --name-only"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_latest_tag_fails_without_repo() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(latest_tag(temp.path()).is_err());
    }

    #[test]
    fn test_default_branch_falls_back_without_origin() {
        let temp = tempfile::TempDir::new().unwrap();
        // Querying origin fails outside a repository; the sentinel still
        // resolves to something usable
        assert_eq!(default_branch(temp.path()).unwrap(), "main");
    }
}
