//! # List Subcommand
//!
//! Prints every identifier of a range in increasing order, streaming from
//! the lazy range iterator.

use std::io::Write;

use clap::Args;
use pdbid_core::PdbId;

use crate::resolve::RangeArgs;
use crate::{write_json, OutputFormat};

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Print at most this many identifiers.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Execute the list subcommand.
pub fn run_list<W: Write>(args: &ListArgs, format: OutputFormat, out: &mut W) -> anyhow::Result<u8> {
    let range = args.range.to_range()?;
    let ids = range.iter().take(args.limit.unwrap_or(usize::MAX));
    tracing::info!(%range, limit = ?args.limit, "listing identifiers");
    match format {
        OutputFormat::Text => {
            for id in ids {
                writeln!(out, "{id}")?;
            }
        }
        OutputFormat::Json => {
            let ids: Vec<PdbId> = ids.collect();
            write_json(out, &ids)?;
        }
    }
    Ok(0)
}
