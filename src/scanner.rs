use crate::extractor::extract_imports;
use crate::notebook::extract_from_notebook;
use crate::pin;
use crate::registry::to_package_name;
use anyhow::{Context, Result};
use colored::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name of the always-unpinned output, written at the scan root.
pub const RAW_FILE: &str = "requirements_raw.txt";
/// File name of the final output (pinned or unpinned), written at the scan root.
pub const FINAL_FILE: &str = "requirements.txt";

/// The two file kinds the scan recognizes; everything else is ignored.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A plain Python source file (`.py`).
    Source,
    /// A Jupyter notebook (`.ipynb`).
    Notebook,
}

/// Classifies a path by extension, or `None` when the file is not scanned.
pub fn file_kind(path: &Path) -> Option<FileKind> {
    match path.extension()?.to_str()? {
        "py" => Some(FileKind::Source),
        "ipynb" => Some(FileKind::Notebook),
        _ => None,
    }
}

/// Outcome of one scan, returned to the driver for reporting.
pub struct ScanReport {
    /// Resolved package names, deduplicated and case-insensitively sorted.
    pub packages: Vec<String>,
    /// Number of files that were read and parsed (including ones that
    /// later failed to parse; they were still attempted).
    pub scanned_files: usize,
    /// Path of the raw (always unpinned) output file.
    pub raw_path: PathBuf,
    /// Path of the final output file.
    pub final_path: PathBuf,
    /// Whether the final file carries pinned versions.
    pub pinned: bool,
}

/// The scanner. Configuration lives here; a single call to [`Scanner::scan`]
/// walks a project tree and writes both requirements files at its root.
pub struct Scanner {
    /// Trace every scanned file (and skipped notebook cells) to stdout.
    pub verbose: bool,
    /// Annotate the final file with locally installed versions.
    pub pin: bool,
}

impl Scanner {
    pub fn new(verbose: bool, pin: bool) -> Self {
        Self { verbose, pin }
    }

    /// Scans `root` recursively and writes the two output files.
    ///
    /// Per-file failures (unreadable file, syntax error, malformed
    /// notebook) are warned about and skipped; the scan itself only fails
    /// when an output file cannot be written. Both files are written even
    /// when the scan found nothing, so a partially-failed run still leaves
    /// inspectable output behind.
    pub fn scan(&self, root: &Path) -> Result<ScanReport> {
        let files: Vec<(PathBuf, FileKind)> = WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                file_kind(entry.path()).map(|kind| (entry.path().to_path_buf(), kind))
            })
            .collect();

        let scanned_files = files.len();

        // Extraction is pure per file, so files can be processed in
        // parallel; the per-file sets are unioned after collection, which
        // makes the result independent of scheduling order.
        let per_file: Vec<HashSet<String>> = files
            .par_iter()
            .map(|(path, kind)| self.collect_file(path, *kind))
            .collect();

        let mut modules: HashSet<String> = HashSet::new();
        for found in per_file {
            modules.extend(found);
        }

        // Resolve module bases to package names, dedupe, and order them.
        // The sort key is the lowercased name with the raw name as a
        // tie-breaker, so repeated runs produce identical files.
        let mut packages: Vec<String> = modules
            .iter()
            .map(|module| to_package_name(module))
            .collect::<HashSet<String>>()
            .into_iter()
            .collect();
        packages.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });

        let raw_path = root.join(RAW_FILE);
        write_lines(&raw_path, &packages)
            .with_context(|| format!("failed to write {}", raw_path.display()))?;

        let final_lines = if self.pin {
            pin::pin_lines(&packages, &pin::installed_versions())
        } else {
            packages.clone()
        };
        let final_path = root.join(FINAL_FILE);
        write_lines(&final_path, &final_lines)
            .with_context(|| format!("failed to write {}", final_path.display()))?;

        Ok(ScanReport {
            packages,
            scanned_files,
            raw_path,
            final_path,
            pinned: self.pin,
        })
    }

    /// Extracts module bases from one file, downgrading every failure to a
    /// warning so the scan continues with the remaining files.
    fn collect_file(&self, path: &Path, kind: FileKind) -> HashSet<String> {
        if self.verbose {
            let tag = match kind {
                FileKind::Source => "[.py]",
                FileKind::Notebook => "[.ipynb]",
            };
            println!("{} {}", tag.dimmed(), path.display());
        }

        match read_and_extract(path, kind, self.verbose) {
            Ok(modules) => modules,
            Err(err) => {
                eprintln!(
                    "{} Failed parsing {}: {}",
                    "[WARN]".yellow().bold(),
                    path.display(),
                    err
                );
                HashSet::new()
            }
        }
    }
}

fn read_and_extract(path: &Path, kind: FileKind, verbose: bool) -> Result<HashSet<String>> {
    let text = fs::read_to_string(path)?;
    match kind {
        FileKind::Source => Ok(extract_imports(&text)?),
        FileKind::Notebook => extract_from_notebook(&text, verbose),
    }
}

/// Writes one name per line, with a trailing newline only when non-empty.
/// The file is created or truncated on every run.
fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)
}
