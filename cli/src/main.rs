//! GovCodec CLI — decode governance proposal actions from the command line.
//!
//! # Commands
//! ```
//! govcodec decode    --file <proposal.json> [--json]
//! govcodec decode    --target <addr> --signature <sig> --calldata <hex> [--value <wei>]
//! govcodec summary   --file <proposal.json>
//! govcodec contracts
//! ```
//!
//! Proposal files carry either four column arrays
//! (`{"targets": [...], "values": [...], "signatures": [...], "calldatas": [...]}`)
//! or an array of descriptor objects.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd_decode;

#[derive(Parser)]
#[command(
    name = "govcodec",
    about = "Decode governance proposal actions into human-readable form",
    version
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a proposal's actions (from a file or a single inline descriptor)
    Decode {
        /// Path to a proposal JSON file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Inline: target contract address
        #[arg(long)]
        target: Option<String>,
        /// Inline: ETH value in wei
        #[arg(long, default_value = "0")]
        value: String,
        /// Inline: canonical function signature
        #[arg(long, default_value = "")]
        signature: String,
        /// Inline: 0x-prefixed calldata
        #[arg(long, default_value = "0x")]
        calldata: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the one-line batch summary and flagged recipient addresses
    Summary {
        /// Path to a proposal JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// List the registered contracts
    Contracts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Decode {
            file,
            target,
            value,
            signature,
            calldata,
            json,
        } => cmd_decode::run_decode(file, target, value, signature, calldata, json),
        Commands::Summary { file } => cmd_decode::run_summary(&file),
        Commands::Contracts => cmd_decode::run_contracts(),
    }
}
