//! # pdbid-cli — PDB Identifier Range CLI
//!
//! Provides the `pdbid` command-line interface over `pdbid-core`.
//!
//! ## Subcommands
//!
//! - `pdbid resolve` — Canonicalize a pair of bounds and report the range.
//! - `pdbid list` — Print every identifier in a range, in order.
//! - `pdbid random` — Sample identifiers uniformly, optionally within a range.
//! - `pdbid batch` — Resolve a YAML/JSON manifest of ranges.
//!
//! ```bash
//! pdbid resolve 1a*
//! pdbid list 9zz0 9zzz
//! pdbid --format json random --count 5 --seed 7
//! pdbid batch ranges.yaml
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers. Handlers write to a
//!   caller-supplied writer and return an exit code.
//! - Resolution logic lives in `pdbid-core`; nothing here reinterprets bounds.

pub mod batch;
pub mod list;
pub mod random;
pub mod resolve;

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
