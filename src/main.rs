//! Solit CLI - play peg solitaire in the terminal or drive it from a script.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Solit - peg solitaire on the 7x7 cross board
#[derive(Parser, Debug)]
#[command(name = "solit")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal (mouse or arrow keys)
    Play {
        /// Random seed for peg colors (default: 345345345)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Zoom level in percent, 50-300 (default: 100)
        #[arg(short, long, default_value = "100")]
        zoom: u16,
    },

    /// Apply a sequence of clicks and print the resulting board
    Run {
        /// Random seed for peg colors (default: 345345345)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Only print the final board
        #[arg(short, long)]
        quiet: bool,

        /// Clicks as row,col (0-based), or - for a click beside the board
        #[arg(value_parser = cli::parse_click)]
        clicks: Vec<cli::Click>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { seed, zoom } => cli::play::execute(seed, zoom),

        Commands::Run {
            seed,
            format,
            quiet,
            clicks,
        } => cli::run::execute(seed, format, quiet, &clicks),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
