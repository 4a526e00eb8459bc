//! CLI frontend for the Caveward adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "caveward",
    about = "Caveward — an LLM-narrated cave-crawl adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding save files
    #[arg(short, long, default_value = "saves", global = true)]
    data_dir: PathBuf,

    /// Character id to load and save under
    #[arg(short, long, default_value = "hero", global = true)]
    character: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure in a line-based loop
    Play {
        /// RNG seed for deterministic dice
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the current progress snapshot as JSON
    State,

    /// Delete the character's save file
    Reset,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(&cli.data_dir, &cli.character, seed),
        Commands::State => commands::state::run(&cli.data_dir, &cli.character),
        Commands::Reset => commands::reset::run(&cli.data_dir, &cli.character),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
