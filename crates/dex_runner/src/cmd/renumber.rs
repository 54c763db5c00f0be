use clap::Args;
use std::path::PathBuf;

use yudex_pipeline::renumber;

const DEFAULT_INDEX: &str = "yudu_pokedex.json";

#[derive(Args, Debug)]
pub struct RenumberArgs {
    /// Yudex index file to renumber in place
    #[arg(long, default_value = DEFAULT_INDEX)]
    pub index: PathBuf,

    /// Print the run report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RenumberArgs) {
    let report = match renumber(&args.index) {
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

    println!("\n=== Renumber Summary ===");
    println!("Renumbered:   {}", report.renumbered);
    if report.skipped > 0 {
        println!("Skipped:      {}", report.skipped);
    }
    println!("Index:        {}", args.index.display());
    println!("========================");
}
