use reqscan_rs::notebook::{extract_from_notebook, strip_meta_lines};

/// Builds a minimal notebook document from (cell_type, source-lines) pairs.
fn notebook_json(cells: &[(&str, &[&str])]) -> String {
    let cells: Vec<serde_json::Value> = cells
        .iter()
        .map(|(cell_type, lines)| {
            serde_json::json!({
                "cell_type": cell_type,
                "source": lines,
            })
        })
        .collect();
    serde_json::json!({ "cells": cells, "nbformat": 4 }).to_string()
}

#[test]
fn test_code_cells_contribute() {
    let json = notebook_json(&[
        ("code", ["import numpy\n", "import pandas\n"].as_slice()),
        ("code", ["from requests import get\n"].as_slice()),
    ]);
    let modules = extract_from_notebook(&json, false).unwrap();
    assert_eq!(modules.len(), 3);
    assert!(modules.contains("numpy"));
    assert!(modules.contains("pandas"));
    assert!(modules.contains("requests"));
}

#[test]
fn test_markdown_cells_are_skipped() {
    let json = notebook_json(&[
        ("markdown", ["import numpy\n"].as_slice()),
        ("raw", ["import pandas\n"].as_slice()),
        ("code", ["import requests\n"].as_slice()),
    ]);
    let modules = extract_from_notebook(&json, false).unwrap();
    assert_eq!(modules.len(), 1);
    assert!(modules.contains("requests"));
}

#[test]
fn test_source_as_single_string() {
    let json = r#"{
        "cells": [
            {"cell_type": "code", "source": "import numpy\nimport seaborn\n"}
        ]
    }"#;
    let modules = extract_from_notebook(json, false).unwrap();
    assert_eq!(modules.len(), 2);
    assert!(modules.contains("numpy"));
    assert!(modules.contains("seaborn"));
}

#[test]
fn test_magic_and_shell_lines_are_stripped() {
    let json = notebook_json(&[(
        "code",
        [
            "%matplotlib inline\n",
            "!pip install numpy\n",
            "  ?numpy.array\n",
            "import numpy\n",
        ]
        .as_slice(),
    )]);
    let modules = extract_from_notebook(&json, false).unwrap();
    assert_eq!(modules.len(), 1);
    assert!(modules.contains("numpy"));
}

#[test]
fn test_meta_only_cell_contributes_nothing() {
    // After stripping there is nothing to parse, so no warning either.
    let json = notebook_json(&[
        ("code", ["%load_ext autoreload\n", "!ls -la\n", "\n"].as_slice()),
        ("code", ["import tqdm\n"].as_slice()),
    ]);
    let modules = extract_from_notebook(&json, false).unwrap();
    assert_eq!(modules.len(), 1);
    assert!(modules.contains("tqdm"));
}

#[test]
fn test_broken_cell_does_not_hide_siblings() {
    let json = notebook_json(&[
        ("code", ["def broken(:\n", "    pass\n"].as_slice()),
        ("code", ["import plotly\n"].as_slice()),
    ]);
    let modules = extract_from_notebook(&json, false).unwrap();
    assert_eq!(modules.len(), 1);
    assert!(modules.contains("plotly"));
}

#[test]
fn test_missing_cells_field_is_an_error() {
    let json = r#"{"nbformat": 4, "metadata": {}}"#;
    assert!(extract_from_notebook(json, false).is_err());
}

#[test]
fn test_not_json_is_an_error() {
    assert!(extract_from_notebook("import numpy", false).is_err());
}

#[test]
fn test_strip_meta_lines_preserves_order() {
    let code = "import a\n%magic\nimport b\n!shell\nimport c";
    assert_eq!(strip_meta_lines(code), "import a\nimport b\nimport c");
}

#[test]
fn test_empty_notebook() {
    let json = r#"{"cells": []}"#;
    let modules = extract_from_notebook(json, false).unwrap();
    assert!(modules.is_empty());
}
