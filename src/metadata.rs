//! # Metadata Resolution
//!
//! For each changed folder, the resolver attempts to load a named YAML
//! descriptor file from that folder and extract a sort key at the
//! configured keyword. The outcome per folder is exactly one of:
//!
//! - **Has metadata**: the descriptor parsed and the keyword holds a
//!   non-empty scalar value (number or string).
//! - **No metadata**: the descriptor file is missing, unreadable, fails to
//!   parse, lacks the keyword, or holds an empty/falsy value. These cases
//!   are deliberately indistinguishable in the output; they differ only in
//!   the diagnostic that gets logged. None of them aborts the run.
//!
//! The "present but falsy counts as absent" rule is a named policy,
//! [`is_absent_or_empty`], so it can be tested directly rather than living
//! implicitly inside the classification loop.
//!
//! Descriptor reads go through a per-run read-through cache keyed by the
//! resolved file path. The cache lives only as long as the resolver; nothing
//! is persisted across runs.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde_yaml::{Mapping, Value};

use crate::config::MetadataConfig;
use crate::error::{Error, Result};

/// A folder's resolved sort key.
///
/// YAML integers and floats form a single numeric class compared as `f64`;
/// strings compare byte-lexicographically. The two classes are incomparable
/// with each other, which the sorter reports as a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Convert an extracted descriptor value into a sort key.
    ///
    /// Callers must have already screened the value with
    /// [`is_absent_or_empty`]. Non-scalar values (mappings, sequences,
    /// booleans) have no natural ordering and are rejected.
    pub fn try_from_value(folder: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => {
                // serde_yaml numbers are always representable as f64
                let n = n.as_f64().ok_or_else(|| Error::SortKeyMismatch {
                    folder: folder.to_string(),
                    detail: format!("numeric key {n} is not representable"),
                })?;
                Ok(SortKey::Number(n))
            }
            Value::String(s) => Ok(SortKey::Text(s.clone())),
            other => Err(Error::SortKeyMismatch {
                folder: folder.to_string(),
                detail: format!("sort key has no natural ordering: {other:?}"),
            }),
        }
    }
}

/// Named absence policy: a missing value, or a present-but-falsy one,
/// does not count as metadata.
///
/// Falsy values are null, `false`, numeric zero, the empty string, and
/// empty sequences/mappings.
pub fn is_absent_or_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Sequence(seq)) => seq.is_empty(),
        Some(Value::Mapping(map)) => map.is_empty(),
        Some(Value::Tagged(tagged)) => is_absent_or_empty(Some(&tagged.value)),
    }
}

/// Per-run read-through cache of parsed descriptor files.
///
/// Keyed by resolved file path, so differently-named folders pointing at
/// the same descriptor only pay for one read. `None` entries record
/// missing or unparseable files, so repeated failures are not re-read
/// either.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: HashMap<PathBuf, Option<Mapping>>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached descriptor, loading and caching it on first access.
    pub fn get_or_load(&mut self, path: &Path) -> Option<&Mapping> {
        if !self.entries.contains_key(path) {
            let loaded = load_descriptor(path);
            self.entries.insert(path.to_path_buf(), loaded);
        }
        self.entries[path].as_ref()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Read and parse one descriptor file.
///
/// All failure modes collapse to `None` with a logged diagnostic: a missing
/// or unreadable file, YAML that does not parse, and a document whose top
/// level is not a mapping.
fn load_descriptor(path: &Path) -> Option<Mapping> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("descriptor {} not readable: {}", path.display(), e);
            return None;
        }
    };

    match serde_yaml::from_str::<Value>(&text) {
        Ok(Value::Mapping(map)) => Some(map),
        Ok(other) => {
            warn!(
                "descriptor {} is not a mapping (found {:?})",
                path.display(),
                other
            );
            None
        }
        Err(e) => {
            warn!("descriptor {} failed to parse: {}", path.display(), e);
            None
        }
    }
}

/// Partition of the distinct folder set by metadata availability.
///
/// Both sequences follow the canonical iteration order of the folder set
/// (ascending lexicographic), which makes the partition deterministic and
/// gives the metadata sort its stable tie-break order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// Folders whose descriptor yielded a usable sort key.
    pub with_metadata: Vec<(String, SortKey)>,
    /// Folders without metadata, for any of the absence reasons.
    pub without_metadata: Vec<String>,
}

/// Resolves descriptor metadata for each folder in a run.
pub struct MetadataResolver<'a> {
    root: &'a Path,
    config: Option<&'a MetadataConfig>,
    cache: DescriptorCache,
}

impl<'a> MetadataResolver<'a> {
    /// Create a resolver rooted at the repository root.
    ///
    /// When `config` is `None` (descriptor name or keyword unconfigured),
    /// resolution is skipped and every folder classifies as
    /// without-metadata.
    pub fn new(root: &'a Path, config: Option<&'a MetadataConfig>) -> Self {
        Self {
            root,
            config,
            cache: DescriptorCache::new(),
        }
    }

    /// Classify every folder in the set.
    ///
    /// Per-folder descriptor failures are recovered locally; the only error
    /// this returns is a sort key with no natural ordering, which is a
    /// type-consistency failure the sorter could not repair.
    pub fn classify(&mut self, folders: &BTreeSet<String>) -> Result<Classification> {
        let mut classification = Classification::default();

        for folder in folders {
            match self.resolve(folder)? {
                Some(key) => classification.with_metadata.push((folder.clone(), key)),
                None => classification.without_metadata.push(folder.clone()),
            }
        }

        Ok(classification)
    }

    /// Resolve one folder's sort key, or `None` when it has no metadata.
    fn resolve(&mut self, folder: &str) -> Result<Option<SortKey>> {
        let Some(config) = self.config else {
            return Ok(None);
        };

        // The empty folder is the repository root itself
        let path = if folder.is_empty() {
            self.root.join(&config.file_name)
        } else {
            self.root.join(folder).join(&config.file_name)
        };

        let Some(record) = self.cache.get_or_load(&path) else {
            return Ok(None);
        };

        let value = record.get(config.keyword.as_str());
        if is_absent_or_empty(value) {
            return Ok(None);
        }
        let Some(value) = value else {
            return Ok(None);
        };

        SortKey::try_from_value(folder, value).map(Some)
    }
}
