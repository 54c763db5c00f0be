use clap::Args;
use std::path::PathBuf;

use yudex_pipeline::build_dex;

/// Default locations follow the Yudu project layout.
const DEFAULT_SOURCE_DIR: &str = "data/pokemon";
const DEFAULT_OUTPUT: &str = "yudu_pokedex.json";

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory of per-Pokémon JSON files
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Destination index file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the run report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: BuildArgs) {
    println!("Building yudex from: {}", args.source_dir.display());

    let report = match build_dex(&args.source_dir, &args.output) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }

    println!("\n=== Yudex Build Summary ===");
    println!("Entries:      {}", report.entries);
    if report.skipped_bad_name > 0 {
        println!("Bad names:    {}", report.skipped_bad_name);
    }
    if report.skipped_unreadable > 0 {
        println!("Unreadable:   {}", report.skipped_unreadable);
    }
    println!("Output:       {}", args.output.display());
    println!("===========================");
}
