//! Command-line entry point for the SEP index generator.
//!
//! # Responsibility
//! - Parse arguments, bootstrap logging, run the collect/render pipeline.
//! - Map every failure to a non-zero exit with the offending record named.

use clap::Parser;
use sepindex_cli::{collect_seps, write_index_file, ErrorPolicy};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "sepindex",
    version,
    about = "Generate the SEP 0 index document from a directory of SEP files."
)]
struct Args {
    /// Directory containing SEP files, or a single SEP file.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Where to write the generated index.
    #[arg(long, default_value = "sep-0000.rst")]
    output: PathBuf,

    /// Exclude records that fail to parse instead of aborting the run.
    #[arg(long)]
    skip_invalid: bool,

    /// Log verbosity: trace|debug|info|warn|error.
    #[arg(long, default_value_t = String::from("info"))]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(message) = sepindex_core::init_logging(&args.log_level) {
        eprintln!("{message}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(count) => {
            log::info!(
                "event=run_complete records={count} output={}",
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=run_failed reason={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, Box<dyn std::error::Error>> {
    let policy = if args.skip_invalid {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    let seps = collect_seps(&args.path, policy)?;
    write_index_file(&seps, &args.output, chrono::Local::now().date_naive())?;
    Ok(seps.len())
}
