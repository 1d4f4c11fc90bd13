pub mod extractor;
pub mod notebook;
pub mod pin;
pub mod registry;
pub mod scanner;

use crate::scanner::Scanner;
use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root of the Python project to scan.
    /// The requirements files are written here as well.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Trace every scanned file (and skipped notebook cells) to stdout.
    #[arg(short, long)]
    verbose: bool,

    /// Pin packages to their locally installed versions in requirements.txt.
    /// Best-effort: packages with no detectable version stay unpinned.
    #[arg(long)]
    pin: bool,
}

/// Main entry point of the application.
///
/// Parses the CLI flags, runs the scanner over the project root, and prints
/// a short report. Per-file failures are warned about by the scanner and do
/// not affect the exit code; only a failure to write the output files does.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = cli.path.canonicalize().unwrap_or(cli.path);
    println!("Scanning project at: {}", root.display());

    let scanner = Scanner::new(cli.verbose, cli.pin);
    let report = scanner.scan(&root)?;

    if report.scanned_files == 0 {
        println!(
            "{}",
            "No .py or .ipynb files found. Are you in the right folder?".yellow()
        );
    } else {
        println!("Scanned {} files.", report.scanned_files);
    }

    println!("Found {} packages.", report.packages.len());
    println!(
        "Wrote {} and {} ({}).",
        scanner::RAW_FILE.bold(),
        scanner::FINAL_FILE.bold(),
        if report.pinned { "pinned" } else { "unpinned" }
    );
    println!("Open {} and tweak if needed.", scanner::FINAL_FILE);

    Ok(())
}
