//! tailor - draft sewing patterns from body measurements
//!
//! Usage:
//!   tailor draft -n <name> -g <garment> -m field=value ...   Draft from body measurements
//!   tailor draft -n <name> -g <garment> -s <size> --size-table <csv>
//!   tailor garments                                          List garments and fields
//!   tailor sizes <csv>                                       List sizes in a table

mod cli;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::{DraftArgs, cmd_draft, cmd_garments, cmd_sizes};

#[derive(Parser)]
#[command(version, about = "Draft sewing patterns from body measurements")]
struct Cli {
    /// Log derived geometry (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draft a garment and write `<name>.<format>`
    Draft(DraftArgs),
    /// List garments and their measurement fields
    Garments,
    /// List the sizes in a CSV size table
    Sizes {
        /// CSV size table
        table: PathBuf,
    },
}

/// Logs go to stderr; stdout carries command output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Draft(args) => cmd_draft(args),
        Command::Garments => {
            cmd_garments();
            Ok(())
        }
        Command::Sizes { table } => cmd_sizes(table),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
