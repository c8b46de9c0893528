//! # pdbid CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pdbid_cli::batch::{run_batch, BatchArgs};
use pdbid_cli::list::{run_list, ListArgs};
use pdbid_cli::random::{run_random, RandomArgs};
use pdbid_cli::resolve::{run_resolve, ResolveArgs};
use pdbid_cli::OutputFormat;

/// PDB identifier range toolkit.
///
/// Resolves wildcarded or partial four-symbol structure identifiers into
/// canonical ranges and enumerates them in order.
#[derive(Parser, Debug)]
#[command(name = "pdbid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Canonicalize two bounds and report the range size.
    Resolve(ResolveArgs),

    /// Print every identifier in a range, in order.
    List(ListArgs),

    /// Sample identifiers uniformly at random.
    Random(RandomArgs),

    /// Resolve every range in a YAML or JSON manifest.
    Batch(BatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(&args, cli.format, &mut out),
        Commands::List(args) => run_list(&args, cli.format, &mut out),
        Commands::Random(args) => run_random(&args, cli.format, &mut out),
        Commands::Batch(args) => run_batch(&args, cli.format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_resolve_with_absent_upper() {
        let cli = Cli::try_parse_from(["pdbid", "resolve", "1a*"]).unwrap();
        if let Commands::Resolve(args) = cli.command {
            assert_eq!(args.range.lower, "1a*");
            assert!(args.range.upper.is_none());
        } else {
            panic!("expected resolve");
        }
    }

    #[test]
    fn cli_parse_list_with_limit() {
        let cli = Cli::try_parse_from(["pdbid", "list", "1000", "1fff", "--limit", "5"]).unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.range.upper.as_deref(), Some("1fff"));
            assert_eq!(args.limit, Some(5));
        } else {
            panic!("expected list");
        }
    }

    #[test]
    fn cli_parse_random_options() {
        let cli = Cli::try_parse_from([
            "pdbid", "random", "--count", "3", "--lower", "4", "--seed", "11",
        ])
        .unwrap();
        if let Commands::Random(args) = cli.command {
            assert_eq!(args.count, 3);
            assert_eq!(args.lower.as_deref(), Some("4"));
            assert!(args.upper.is_none());
            assert_eq!(args.seed, Some(11));
        } else {
            panic!("expected random");
        }
    }

    #[test]
    fn cli_parse_random_defaults_to_one() {
        let cli = Cli::try_parse_from(["pdbid", "random"]).unwrap();
        if let Commands::Random(args) = cli.command {
            assert_eq!(args.count, 1);
        }
    }

    #[test]
    fn cli_parse_batch_stdin() {
        let cli = Cli::try_parse_from(["pdbid", "batch", "-"]).unwrap();
        assert!(matches!(cli.command, Commands::Batch(_)));
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli = Cli::try_parse_from(["pdbid", "-vv", "list", "1", "--format", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["pdbid", "resolve", "1"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn cli_parse_rejects_bad_format() {
        assert!(Cli::try_parse_from(["pdbid", "--format", "xml", "resolve", "1"]).is_err());
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["pdbid"]).is_err());
    }

    #[test]
    fn cli_parse_wildcard_token_is_positional() {
        let cli = Cli::try_parse_from(["pdbid", "list", "*", "*"]).unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.range.lower, "*");
            assert_eq!(args.range.upper.as_deref(), Some("*"));
        }
    }
}
