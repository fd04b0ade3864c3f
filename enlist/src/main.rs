//! enlist-clean CLI - flatten the 2010 enlistment-by-ZIP export
//!
//! # Main Command
//!
//! ```bash
//! enlist-clean                           # Same as `run` with defaults (../data)
//! enlist-clean --data-dir data run       # Full pipeline on data/accession_zip_2010.csv
//! enlist-clean run --report report.json  # Also write a JSON run report
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! enlist-clean merge-headers raw.csv     # Print the merged header of a raw export
//! enlist-clean fix-header clean.csv      # Apply the "Total" relabel to a cleaned file
//! enlist-clean totals clean.csv          # List header positions mentioning "total"
//! ```

use clap::{Parser, Subcommand};
use enlist_clean::logs::{log_error, log_success, LogFormat, LOGGER};
use enlist_clean::transform::{DEFAULT_DATA_DIR, DEFAULT_HEADERS_FILE, DEFAULT_INPUT};
use enlist_clean::{
    fix_header_file, label_lines, merge_headers_of_file, read_header, run, total_positions,
    CleanOptions,
};
use std::path::{Path, PathBuf};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "enlist-clean")]
#[command(
    about = "Flatten the 2010 enlistment-by-ZIP export into a single-header CSV",
    long_about = None
)]
struct Cli {
    /// Directory holding the raw export and the files written from it
    #[arg(long, global = true, env = "ENLIST_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Raw export file name inside the data directory
    #[arg(long, global = true, default_value = DEFAULT_INPUT)]
    input: String,

    /// Suppress progress logs
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Progress log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full cleaning pipeline
    Run {
        /// Write a JSON report of the run to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print the merged header of a raw export
    MergeHeaders {
        /// Raw export CSV
        file: PathBuf,
    },

    /// Relabel the "Total" columns of a cleaned file in place
    FixHeader {
        /// Cleaned CSV
        file: PathBuf,
    },

    /// List header positions whose label mentions "total"
    Totals {
        /// Cleaned CSV
        file: PathBuf,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    LOGGER.configure(cli.log_format, cli.quiet);

    let options = CleanOptions {
        data_dir: cli.data_dir,
        input: cli.input,
        ..CleanOptions::default()
    };

    let result = match cli.command.unwrap_or(Commands::Run { report: None }) {
        Commands::Run { report } => cmd_run(&options, report.as_deref()),
        Commands::MergeHeaders { file } => cmd_merge_headers(&file),
        Commands::FixHeader { file } => cmd_fix_header(&file),
        Commands::Totals { file } => cmd_totals(&file),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_run(options: &CleanOptions, report_path: Option<&Path>) -> CmdResult {
    let report = run(options)?;

    if let Some(path) = report_path {
        report.write_to(path)?;
        log_success(format!("Report written to: {}", path.display()));
    }

    Ok(())
}

fn cmd_merge_headers(file: &Path) -> CmdResult {
    let scratch = tempfile::tempdir()?;
    let merged = merge_headers_of_file(file, &scratch.path().join(DEFAULT_HEADERS_FILE))?;

    for line in label_lines(&merged, 0..merged.len()) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_fix_header(file: &Path) -> CmdResult {
    let header = fix_header_file(file)?;
    log_success(format!(
        "Relabelled header of {} ({} columns)",
        file.display(),
        header.len()
    ));
    Ok(())
}

fn cmd_totals(file: &Path) -> CmdResult {
    let header = read_header(file)?;

    for line in label_lines(&header, total_positions(&header)) {
        println!("{}", line);
    }
    Ok(())
}
