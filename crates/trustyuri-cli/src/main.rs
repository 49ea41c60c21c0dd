//! trustyuri CLI - mint and check content-verifiable identifiers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod input;
mod logging;

use commands::{canonicalize, check, hash, mint};
use config::TrustyConfig;
use logging::LogArgs;

#[derive(Parser)]
#[command(name = "trustyuri")]
#[command(about = "Mint and verify trusty URIs")]
struct Cli {
    /// TOML file overriding the built-in configuration
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a file or URL matches the artifact code in its name
    Check {
        /// Local path or HTTP(S) URL ending in an artifact code
        reference: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mint a trusty URI for an N-Quads graph
    Mint {
        /// Input N-Quads file (or stdin if not provided)
        input: Option<String>,
        /// Base identifier the graph was written under
        #[arg(long)]
        base: String,
        /// Write the rewritten graph here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Report the minted URI as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the FA artifact code of a file
    Hash {
        /// Input file
        input: String,
    },
    /// Show the canonical form of a graph as it is hashed when minting
    Canonicalize {
        /// Input N-Quads file (or stdin if not provided)
        input: Option<String>,
        /// Base identifier the graph was written under
        #[arg(long)]
        base: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_global_subscriber(cli.log);

    let result = TrustyConfig::load(cli.config.as_deref()).and_then(|config| {
        tracing::debug!(
            publication_prefix = %config.publication_prefix,
            temp_prefix = %config.temp_prefix,
            "configuration loaded"
        );
        match cli.command {
            Commands::Check { reference, json } => check::run(&config, reference, json),
            Commands::Mint {
                input,
                base,
                output,
                json,
            } => mint::run(&config, input, base, output, json),
            Commands::Hash { input } => hash::run(input),
            Commands::Canonicalize { input, base } => canonicalize::run(&config, input, base),
        }
    });

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
