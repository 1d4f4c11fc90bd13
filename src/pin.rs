use std::collections::HashMap;
use std::process::Command;

/// Normalizes a distribution name per PEP 503: lowercase, with runs of
/// `-`, `_`, and `.` collapsed into a single `-`. Lookups against the
/// installed-version table go through this so that `python-dateutil` and
/// `python_dateutil` resolve to the same entry.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for ch in name.chars() {
        if matches!(ch, '-' | '_' | '.') {
            if !last_dash {
                out.push('-');
                last_dash = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            last_dash = false;
        }
    }
    out
}

/// Best-effort table of locally installed package versions, keyed by
/// normalized name.
///
/// Asks pip for its freeze-format listing, trying `python3 -m pip`,
/// `python -m pip`, and bare `pip` in turn. Never consults a remote index.
/// Any failure (no interpreter, no pip, unparsable output) yields an empty
/// table; pin mode then degrades to unpinned entries.
pub fn installed_versions() -> HashMap<String, String> {
    let candidates: [(&str, &[&str]); 3] = [
        ("python3", &["-m", "pip", "list", "--format=freeze"]),
        ("python", &["-m", "pip", "list", "--format=freeze"]),
        ("pip", &["list", "--format=freeze"]),
    ];

    for (program, args) in candidates {
        let output = match Command::new(program).args(args).output() {
            Ok(output) if output.status.success() => output,
            _ => continue,
        };
        let listing = String::from_utf8_lossy(&output.stdout);
        let versions = parse_freeze(&listing);
        if !versions.is_empty() {
            return versions;
        }
    }
    HashMap::new()
}

/// Parses `name==version` lines out of pip's freeze-format output.
/// Lines that do not fit the shape (editable installs, warnings) are
/// ignored.
pub fn parse_freeze(listing: &str) -> HashMap<String, String> {
    let mut versions = HashMap::new();
    for line in listing.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('-') || line.starts_with('#') {
            continue;
        }
        if let Some((name, version)) = line.split_once("==") {
            let (name, version) = (name.trim(), version.trim());
            if !name.is_empty() && !version.is_empty() {
                versions.insert(normalize(name), version.to_string());
            }
        }
    }
    versions
}

/// Renders the final requirements lines for pin mode.
///
/// Each package becomes `name==version` when a version is known and the
/// bare name otherwise, in the same order as the input list. Every line is
/// well-formed by construction.
pub fn pin_lines(packages: &[String], versions: &HashMap<String, String>) -> Vec<String> {
    packages
        .iter()
        .map(|pkg| match versions.get(&normalize(pkg)) {
            Some(version) => format!("{pkg}=={version}"),
            None => pkg.clone(),
        })
        .collect()
}
