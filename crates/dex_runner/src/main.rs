//! Yudu dex data runner.
//!
//! One-shot batch tools over the Yudu MUD data files: build the yudex
//! index from per-Pokémon files, renumber its ids, or split the move
//! list into per-type text files.
//!
//! Usage:
//!   cargo run -p dex_runner -- build-dex
//!   cargo run -p dex_runner -- renumber --index yudu_pokedex.json
//!   cargo run -p dex_runner -- split-moves --json

mod cmd;

use clap::{Parser, Subcommand};
use cmd::{build, renumber, split};

#[derive(Parser)]
#[command(name = "dex_runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate per-Pokémon files into the yudex index
    BuildDex(build::BuildArgs),

    /// Rewrite yudex ids as a fresh 1..N sequence
    Renumber(renumber::RenumberArgs),

    /// Split the move list into one text file per type
    SplitMoves(split::SplitArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::BuildDex(args)) => {
            build::execute(args);
        }
        Some(Commands::Renumber(args)) => {
            renumber::execute(args);
        }
        Some(Commands::SplitMoves(args)) => {
            split::execute(args);
        }
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help().unwrap();
        }
    }
}
