// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the scan orchestration logic.
/// This includes the `Scanner` struct, directory walking, aggregation,
/// and the writing of both requirements files.
pub mod scanner;

/// Module containing the import extractor.
/// This walks a Python AST and collects third-party module bases.
pub mod extractor;

/// Module containing the notebook cell unwrapper.
/// This deserializes `.ipynb` documents and feeds code cells to the extractor.
pub mod notebook;

/// Module containing the standard-library set and module-to-package name map,
/// with the classification and resolution functions over them.
pub mod registry;

/// Module containing pin-mode support.
/// This looks up locally installed versions and formats pinned lines.
pub mod pin;
