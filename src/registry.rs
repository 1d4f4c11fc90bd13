use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    /// Best-effort set of standard-library base module names.
    ///
    /// This is an allow-list, not derived from an authoritative source: a
    /// module missing from it shows up in the output as a spurious package.
    /// That is the accepted trade-off, so extend it sparingly rather than
    /// trying to make it exhaustive.
    static ref STDLIB: HashSet<&'static str> = [
        "sys", "os", "pathlib", "json", "re", "math", "itertools", "functools",
        "collections", "subprocess", "typing", "datetime", "time", "random",
        "csv", "gzip", "pickle", "hashlib", "logging", "argparse", "statistics",
        "threading", "asyncio", "urllib", "http", "html", "xml", "sqlite3",
        "shutil", "glob",
    ]
    .into_iter()
    .collect();

    /// Maps an importable module name to its pip package name where the two
    /// differ, plus identity entries for common libraries.
    /// Extend by adding entries.
    static ref NAME_MAP: HashMap<&'static str, &'static str> = [
        ("sklearn", "scikit-learn"),
        ("cv2", "opencv-python"),
        ("PIL", "Pillow"),
        ("bs4", "beautifulsoup4"),
        ("yaml", "PyYAML"),
        ("skimage", "scikit-image"),
        ("torch", "torch"),
        ("torchvision", "torchvision"),
        ("torchaudio", "torchaudio"),
        ("xgboost", "xgboost"),
        ("lightgbm", "lightgbm"),
        ("catboost", "catboost"),
        ("statsmodels", "statsmodels"),
        ("numpy", "numpy"),
        ("pandas", "pandas"),
        ("matplotlib", "matplotlib"),
        ("seaborn", "seaborn"),
        ("plotly", "plotly"),
        ("requests", "requests"),
        ("tqdm", "tqdm"),
        ("lxml", "lxml"),
        ("pydantic", "pydantic"),
        ("fastapi", "fastapi"),
        ("flask", "flask"),
        ("uvicorn", "uvicorn"),
        ("sqlalchemy", "SQLAlchemy"),
        ("pyarrow", "pyarrow"),
        ("openpyxl", "openpyxl"),
        ("xlrd", "xlrd"),
        ("pytz", "pytz"),
        ("dateutil", "python-dateutil"),
        ("jupyter", "jupyter"),
        ("jupyterlab", "jupyterlab"),
        ("nbformat", "nbformat"),
        ("nbconvert", "nbconvert"),
        ("ipywidgets", "ipywidgets"),
    ]
    .into_iter()
    .collect();
}

/// Returns the first dotted segment of a module reference.
///
/// Only the base is significant for dependency purposes:
/// `matplotlib.pyplot` and `matplotlib` are the same package.
pub fn base_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Whether a module belongs to the Python standard library.
///
/// True if the base is in the fixed stdlib set, or if it uses the
/// leading-underscore naming convention for interpreter-internal modules
/// (`_ast`, `__future__`, ...). Pure and total; never errors.
pub fn is_stdlib(name: &str) -> bool {
    let base = base_name(name);
    STDLIB.contains(base) || base.starts_with('_')
}

/// Resolves a module name to its distributable pip package name.
///
/// Looks up the base in the name map and falls back to the base itself:
/// most modules share their import name and package name.
/// Pure and total; never errors.
pub fn to_package_name(name: &str) -> String {
    let base = base_name(name);
    NAME_MAP.get(base).map_or(base, |mapped| *mapped).to_string()
}
