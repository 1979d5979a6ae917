//! Ricochet CLI - inspect boards and play local games.

// Allow unwrap in tests and print in the CLI binary
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Ricochet - a timed sliding robot puzzle
#[derive(Parser, Debug)]
#[command(name = "ricochet")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a board with randomly placed robots
    Board {
        /// Board setup number (default: 1)
        #[arg(long, default_value = "1")]
        setup: u8,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Color robots with ANSI escapes
        #[arg(long)]
        color: bool,
    },

    /// Play a local game, reading moves from stdin
    Play {
        /// Player names, comma separated; the first one hosts
        #[arg(short, long, required = true, value_delimiter = ',')]
        players: Vec<String>,

        /// Settings file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of rounds, overrides the settings file
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Random seed, overrides the settings file
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Print or save the default settings
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Board { setup, seed, color } => cli::board::execute(setup, seed, color),

        Commands::Play {
            players,
            config,
            rounds,
            seed,
            format,
        } => cli::play::execute(players, config, rounds, seed, format),

        Commands::Config { out } => cli::config::execute(out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
