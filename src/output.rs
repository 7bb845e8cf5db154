//! # Output Emission
//!
//! Writes the final views to the automation pipeline's output channel.
//!
//! When `$GITHUB_OUTPUT` is set (the GitHub Actions convention), each view
//! is appended to that file as a heredoc block:
//!
//! ```text
//! distinct_folders<<UUID
//! ["a","b"]
//! UUID
//! ```
//!
//! The delimiter is a fresh UUID per output so values can never collide
//! with it. One extra `json_output` key carries the aggregate JSON object
//! with all seven views. Without `$GITHUB_OUTPUT` the aggregate JSON goes
//! to stdout, which is what local runs and tests consume.
//!
//! Every serialized value is compact JSON with no interior whitespace, so
//! downstream consumers can treat a value as a single token.

use std::fs::OpenOptions;
use std::io::{self, Write};

use log::info;
use uuid::Uuid;

use crate::error::Result;
use crate::views::FolderViews;

/// The environment variable naming the GitHub Actions output file.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Emit all outputs for one run.
pub fn emit(views: &FolderViews) -> Result<()> {
    match std::env::var_os(GITHUB_OUTPUT_ENV) {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            write_outputs(&mut file, views)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", views.to_json()?)?;
            Ok(())
        }
    }
}

/// Write the seven per-view outputs plus the aggregate `json_output`.
pub fn write_outputs<W: Write>(writer: &mut W, views: &FolderViews) -> Result<()> {
    let pairs = [
        ("distinct_folders", &views.distinct_folders),
        ("folders_with_metadata", &views.folders_with_metadata),
        ("folders_without_metadata", &views.folders_without_metadata),
        ("folders_sorted_alpha_asc", &views.folders_sorted_alpha_asc),
        ("folders_sorted_alpha_desc", &views.folders_sorted_alpha_desc),
        ("folders_sorted_meta_asc", &views.folders_sorted_meta_asc),
        ("folders_sorted_meta_desc", &views.folders_sorted_meta_desc),
    ];

    for (name, view) in pairs {
        set_output(writer, name, &serde_json::to_string(view)?)?;
    }

    set_output(writer, "json_output", &views.to_json()?)
}

/// Write one `name<<DELIM` heredoc block.
fn set_output<W: Write>(writer: &mut W, name: &str, value: &str) -> Result<()> {
    info!("setting output {name}");
    let delimiter = Uuid::new_v4();
    writeln!(writer, "{name}<<{delimiter}")?;
    writeln!(writer, "{value}")?;
    writeln!(writer, "{delimiter}")?;
    Ok(())
}
