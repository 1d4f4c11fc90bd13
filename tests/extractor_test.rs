use reqscan_rs::extractor::extract_imports;

#[test]
fn test_no_imports_yields_empty_set() {
    let code = r#"
def add(a, b):
    return a + b

x = add(1, 2)
"#;
    let modules = extract_imports(code).expect("valid code must parse");
    assert!(modules.is_empty());
}

#[test]
fn test_plain_imports() {
    let code = r#"
import numpy
import requests
"#;
    let modules = extract_imports(code).unwrap();
    assert_eq!(modules.len(), 2);
    assert!(modules.contains("numpy"));
    assert!(modules.contains("requests"));
}

#[test]
fn test_dotted_import_keeps_base_only() {
    let code = "import matplotlib.pyplot.figure\n";
    let modules = extract_imports(code).unwrap();
    assert_eq!(modules.len(), 1);
    assert!(modules.contains("matplotlib"));
    assert!(!modules.contains("matplotlib.pyplot"));
}

#[test]
fn test_aliased_imports_keep_module_name() {
    let code = r#"
import numpy as np
import pandas.core.frame as frame
"#;
    let modules = extract_imports(code).unwrap();
    assert_eq!(modules.len(), 2);
    assert!(modules.contains("numpy"));
    assert!(modules.contains("pandas"));
    // The binding names never leak into the result
    assert!(!modules.contains("np"));
    assert!(!modules.contains("frame"));
}

#[test]
fn test_from_import_absolute() {
    let code = r#"
from sklearn.model_selection import train_test_split
from flask import Flask, request
"#;
    let modules = extract_imports(code).unwrap();
    assert_eq!(modules.len(), 2);
    assert!(modules.contains("sklearn"));
    assert!(modules.contains("flask"));
}

#[test]
fn test_relative_imports_are_ignored() {
    let code = r#"
from . import sibling
from .utils import helper
from ..package import thing
"#;
    let modules = extract_imports(code).unwrap();
    assert!(modules.is_empty());
}

#[test]
fn test_stdlib_imports_are_filtered() {
    let code = r#"
import os
import sys
import json
from collections import defaultdict
from os.path import join
import numpy
"#;
    let modules = extract_imports(code).unwrap();
    assert_eq!(modules.len(), 1);
    assert!(modules.contains("numpy"));
}

#[test]
fn test_private_modules_are_filtered() {
    let code = r#"
from __future__ import annotations
import _socket
"#;
    let modules = extract_imports(code).unwrap();
    assert!(modules.is_empty());
}

#[test]
fn test_nested_imports_are_found() {
    let code = r#"
def lazy():
    import torch
    return torch

class Wrapper:
    def load(self):
        from PIL import Image
        return Image

if True:
    import seaborn
else:
    import plotly

try:
    import lxml
except ImportError:
    import xml

while False:
    import tqdm

with open("f") as f:
    import yaml

for _ in range(1):
    import pytz
"#;
    let modules = extract_imports(code).unwrap();
    for expected in ["torch", "PIL", "seaborn", "plotly", "lxml", "tqdm", "yaml", "pytz"] {
        assert!(modules.contains(expected), "missing {expected}");
    }
    // xml is stdlib, caught even inside the except handler
    assert!(!modules.contains("xml"));
}

#[test]
fn test_syntax_error_is_reported() {
    let code = "def broken(:\n    pass\n";
    assert!(extract_imports(code).is_err());
}

#[test]
fn test_extraction_is_deterministic() {
    let code = r#"
import pandas
from requests import get
"#;
    let first = extract_imports(code).unwrap();
    let second = extract_imports(code).unwrap();
    assert_eq!(first, second);
}
