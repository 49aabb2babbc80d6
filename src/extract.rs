//! Include directive extraction.
//!
//! A literal line scan, not a preprocessor: one regex match per line, first
//! match wins, and commented-out includes count too. Results are
//! deduplicated into an ordered set so iteration is alphabetical.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

static INCLUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#include\s*[<"]([^">]+)[">]"#).unwrap());

/// Extract the unique header names referenced by `src`.
///
/// Only the first `#include` on a line is taken; a line carrying two
/// directives is not supported.
pub fn includes_in_text(src: &str) -> BTreeSet<String> {
    src.lines()
        .filter_map(|line| INCLUDE_RE.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extract the unique header names referenced by the file at `path`.
///
/// Read failures (missing file, unreadable content) yield an empty set
/// rather than an error; a file the scanner cannot read simply has no
/// includes to report.
pub fn includes_in_file(path: &Path) -> BTreeSet<String> {
    match fs::read_to_string(path) {
        Ok(src) => includes_in_text(&src),
        Err(_) => BTreeSet::new(),
    }
}
