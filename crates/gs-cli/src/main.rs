//! CLI frontend for the Grey Stratum narrative engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stratum",
    about = "Grey Stratum — narrative missions with stat checks",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single stat check (attribute + 1d6 vs difficulty + 6)
    Check {
        /// Attribute being tested: PHY, INT or DEF
        #[arg(short, long)]
        attribute: String,

        /// Current attribute value
        #[arg(short, long, allow_negative_numbers = true)]
        value: i32,

        /// Check difficulty
        #[arg(short, long)]
        difficulty: u32,

        /// Use this die result instead of rolling (1-6)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=6))]
        roll: Option<u32>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a content file for broken scene links and unknown meters
    Validate {
        /// Content file (default: bundled sample mission)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Play a mission interactively
    Play {
        /// Content file (default: bundled sample mission)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pause before revealing a check result, in milliseconds
        #[arg(long, default_value = "500")]
        delay: u64,
    },

    /// Print the bundled sample mission as JSON
    Sample,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            attribute,
            value,
            difficulty,
            roll,
            seed,
            json,
        } => commands::check::run(&attribute, value, difficulty, roll, seed, json),
        Commands::Validate { content } => commands::validate::run(content.as_deref()),
        Commands::Play {
            content,
            seed,
            delay,
        } => commands::play::run(content.as_deref(), seed, delay),
        Commands::Sample => commands::sample::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
