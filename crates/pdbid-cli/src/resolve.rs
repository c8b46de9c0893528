//! # Resolve Subcommand
//!
//! Canonicalizes a pair of bounds and reports the resulting range and its
//! size, without enumerating it.

use std::io::Write;

use anyhow::Context;
use clap::Args;
use pdbid_core::IdRange;
use serde::Serialize;

use crate::{write_json, OutputFormat};

/// A pair of raw range bounds as given on the command line.
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Lower bound: full (`1abc`), partial (`1a`), wildcarded (`1a*`) or `*`.
    pub lower: String,

    /// Upper bound, same forms as LOWER. Defaults to `9zzz`.
    pub upper: Option<String>,
}

impl RangeArgs {
    /// Resolve the bounds into a canonical range.
    pub fn to_range(&self) -> anyhow::Result<IdRange> {
        pdbid_core::resolve(&self.lower, self.upper.as_deref()).with_context(|| {
            format!(
                "cannot resolve range {:?}..{:?}",
                self.lower,
                self.upper.as_deref().unwrap_or("9zzz")
            )
        })
    }
}

/// Arguments for the resolve subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub range: RangeArgs,
}

#[derive(Serialize)]
struct ResolvedRange {
    lower: String,
    upper: String,
    count: usize,
}

/// Execute the resolve subcommand.
pub fn run_resolve<W: Write>(
    args: &ResolveArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<u8> {
    let range = args.range.to_range()?;
    tracing::debug!(%range, "resolved");
    match format {
        OutputFormat::Text => writeln!(out, "{range} ({} identifiers)", range.len())?,
        OutputFormat::Json => write_json(
            out,
            &ResolvedRange {
                lower: range.lower().to_string(),
                upper: range.upper().to_string(),
                count: range.len(),
            },
        )?,
    }
    Ok(0)
}
