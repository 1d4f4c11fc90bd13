use crate::extractor::extract_imports;
use anyhow::{Context, Result};
use colored::*;
use serde::Deserialize;
use std::collections::HashSet;

/// A Jupyter notebook document, reduced to the fields the scan needs.
///
/// `cells` is mandatory: a document without it is malformed and the whole
/// file is skipped with a warning, matching the policy for unreadable files.
#[derive(Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

/// One notebook cell. Anything other than `cell_type == "code"` is skipped.
#[derive(Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub cell_type: String,
    #[serde(default)]
    pub source: CellSource,
}

/// Cell source payload: the on-disk format stores it either as one string
/// or as a list of line fragments to be concatenated in order.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl CellSource {
    /// The cell's code as a single string.
    pub fn joined(&self) -> String {
        match self {
            CellSource::Text(text) => text.clone(),
            CellSource::Lines(lines) => lines.concat(),
        }
    }
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Text(String::new())
    }
}

/// Drops IPython meta-instruction lines from a cell's code.
///
/// A line whose first non-whitespace character is `%` (magic), `!` (shell
/// escape), or `?` (help query) is not valid Python and would poison the
/// parse of the entire cell, so those lines are removed before parsing.
/// Remaining lines keep their original order.
pub fn strip_meta_lines(code: &str) -> String {
    code.lines()
        .filter(|line| !line.trim_start().starts_with(['%', '!', '?']))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts third-party module bases from a notebook document.
///
/// Each code cell is stripped of meta-instruction lines and parsed on its
/// own, so a syntax error in one cell never hides imports in its siblings.
/// An unparsable cell is dropped, logged only in verbose mode.
pub fn extract_from_notebook(json: &str, verbose: bool) -> Result<HashSet<String>> {
    let notebook: Notebook =
        serde_json::from_str(json).context("not a valid notebook document")?;

    let mut modules = HashSet::new();
    for cell in &notebook.cells {
        if cell.cell_type != "code" {
            continue;
        }
        let code = strip_meta_lines(&cell.source.joined());
        // Nothing left after stripping: skip rather than parse empty text.
        if code.trim().is_empty() {
            continue;
        }
        match extract_imports(&code) {
            Ok(found) => modules.extend(found),
            Err(err) => {
                if verbose {
                    println!("  {}", format!("(skip unparsable cell: {err})").dimmed());
                }
            }
        }
    }
    Ok(modules)
}
