use clap::Args;
use std::path::PathBuf;

use yudex_pipeline::split_moves;

const DEFAULT_INPUT: &str = "data/move_list.json";
const DEFAULT_OUT_DIR: &str = "data/move_lists_by_type";

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Move-list JSON file
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory receiving one .txt file per type
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Print the run report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SplitArgs) {
    println!("Splitting move list: {}", args.input.display());

    let report = match split_moves(&args.input, &args.out_dir) {
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

    println!("\n=== Move Split Summary ===");
    println!("Types:        {}", report.types);
    println!("Files:        {}", report.files_written);
    if report.missing_type > 0 {
        println!("No type:      {}", report.missing_type);
    }
    if report.missing_name > 0 {
        println!("No name:      {}", report.missing_name);
    }
    println!("Out dir:      {}", args.out_dir.display());
    println!("==========================");
}
