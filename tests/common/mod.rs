//! Shared test fixtures: throwaway git repositories with a known diff.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run a git command in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn git {args:?}: {e}"));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initialize a repository with a `main` branch and identity configured.
pub fn init_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["checkout", "-b", "main"]);
}

/// Write a file, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Commit everything currently in the working tree.
pub fn commit_all(dir: &Path, message: &str) {
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-m", message]);
}

/// Build the standard fixture: a base commit on `main` carrying the
/// descriptor files, and a `feature` branch whose commit changes files
/// under `a/`, `b/`, and `c/`.
///
/// Descriptors: `a` has `priority: 2`, `c` has `priority: 1`, `b` has no
/// descriptor. The descriptors live in the base commit, so they never show
/// up in the diff themselves.
pub fn priority_fixture(dir: &Path) {
    init_repo(dir);
    write_file(dir, "README.md", "# fixture\n");
    write_file(dir, "a/meta.yaml", "priority: 2\n");
    write_file(dir, "c/meta.yaml", "priority: 1\n");
    commit_all(dir, "base");

    git(dir, &["checkout", "-b", "feature"]);
    write_file(dir, "a/x.txt", "x\n");
    write_file(dir, "a/y.txt", "y\n");
    write_file(dir, "b/z.txt", "z\n");
    write_file(dir, "c/w.txt", "w\n");
    commit_all(dir, "change services");
}
