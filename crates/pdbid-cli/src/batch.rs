//! # Batch Subcommand
//!
//! Resolves a manifest of ranges, each independently. The manifest is a
//! YAML (or JSON) list of entries with a `lower` and an optional `upper`:
//!
//! ```yaml
//! - lower: "1a*"
//! - lower: "9zz0"
//!   upper: "9zzz"
//! - lower: 1000        # rejected: bounds must be strings
//! ```
//!
//! Bounds are taken as raw values, so an unquoted number is reported as a
//! type error rather than coerced. An entry that is not a mapping, has no
//! `lower`, or holds a YAML-tagged value is rejected on its own; the rest
//! of the manifest is still resolved. The exit code is 1 if any entry was
//! rejected.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use pdbid_core::{resolve_value, ResolveError};
use serde::Serialize;
use serde_json::Value;
use serde_yaml::Value as YamlValue;

use crate::{write_json, OutputFormat};

/// Arguments for the batch subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Manifest file, or `-` for standard input.
    pub manifest: PathBuf,
}

/// One manifest entry, with bounds as raw values.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub lower: Value,
    pub upper: Option<Value>,
}

/// Why a manifest entry could not be read as a pair of bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry must be a mapping with a `lower` key, found {0}")]
    NotAMapping(&'static str),
    #[error("entry has no `lower` bound")]
    MissingLower,
    #[error("{field} holds a tagged value ({tag}), which is not supported")]
    Tagged { field: &'static str, tag: String },
    #[error("{field} cannot be represented: {reason}")]
    Unrepresentable { field: &'static str, reason: String },
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum EntryResult {
    Resolved {
        index: usize,
        lower: String,
        upper: String,
        count: usize,
    },
    Rejected {
        index: usize,
        error: String,
    },
}

/// Parse a manifest from YAML or JSON text.
///
/// Only the outer list is checked here. Each element is read separately,
/// so one malformed entry does not hide the others.
pub fn parse_manifest(text: &str) -> anyhow::Result<Vec<Result<BatchEntry, EntryError>>> {
    let items: Vec<YamlValue> =
        serde_yaml::from_str(text).context("manifest must be a list of {lower, upper} entries")?;
    Ok(items.iter().map(read_entry).collect())
}

fn read_entry(item: &YamlValue) -> Result<BatchEntry, EntryError> {
    let YamlValue::Mapping(map) = item else {
        return Err(EntryError::NotAMapping(yaml_type_name(item)));
    };
    let lower = map.get("lower").ok_or(EntryError::MissingLower)?;
    let upper = map.get("upper");
    Ok(BatchEntry {
        lower: to_json("lower", lower)?,
        upper: upper.map(|v| to_json("upper", v)).transpose()?,
    })
}

fn to_json(field: &'static str, value: &YamlValue) -> Result<Value, EntryError> {
    if let YamlValue::Tagged(tagged) = value {
        return Err(EntryError::Tagged {
            field,
            tag: tagged.tag.to_string(),
        });
    }
    serde_json::to_value(value).map_err(|e| EntryError::Unrepresentable {
        field,
        reason: e.to_string(),
    })
}

fn yaml_type_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}

/// Execute the batch subcommand.
pub fn run_batch<W: Write>(args: &BatchArgs, format: OutputFormat, out: &mut W) -> anyhow::Result<u8> {
    let text = read_manifest(&args.manifest)?;
    let entries = parse_manifest(&text)?;
    tracing::info!(entries = entries.len(), manifest = %args.manifest.display(), "resolving batch");

    let results: Vec<EntryResult> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Ok(entry) => resolve_entry(index, entry),
            Err(e) => {
                tracing::debug!(index, "entry unreadable: {e}");
                EntryResult::Rejected {
                    index,
                    error: e.to_string(),
                }
            }
        })
        .collect();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, EntryResult::Rejected { .. }))
        .count();

    match format {
        OutputFormat::Text => {
            for result in &results {
                match result {
                    EntryResult::Resolved {
                        index,
                        lower,
                        upper,
                        count,
                    } => writeln!(out, "#{index}: {lower}..={upper} ({count} identifiers)")?,
                    EntryResult::Rejected { index, error } => {
                        writeln!(out, "#{index}: rejected: {error}")?
                    }
                }
            }
        }
        OutputFormat::Json => write_json(out, &results)?,
    }

    if rejected > 0 {
        tracing::warn!(rejected, "some batch entries were rejected");
        return Ok(1);
    }
    Ok(0)
}

fn resolve_entry(index: usize, entry: &BatchEntry) -> EntryResult {
    match resolve_value(&entry.lower, entry.upper.as_ref()) {
        Ok(range) => EntryResult::Resolved {
            index,
            lower: range.lower().to_string(),
            upper: range.upper().to_string(),
            count: range.len(),
        },
        Err(e) => {
            log_rejection(index, &e);
            EntryResult::Rejected {
                index,
                error: e.to_string(),
            }
        }
    }
}

fn log_rejection(index: usize, error: &ResolveError) {
    tracing::debug!(index, kind = ?error.format_kind(), "entry rejected: {error}");
}

fn read_manifest(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading manifest from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading manifest {}", path.display()))
}
