//! Per-file reporting and aggregate summary.
//!
//! ## Example Output
//!
//! ```text
//! 📄 File: src/main.cpp
//!   vector                    → Standard Library
//!   util/draw.hpp             → Local or Third-Party
//!
//! === 💻 C/C++ Dependency Summary ===
//! Standard Library:
//!   - vector
//! Local or Third-Party:
//!   - util/draw.hpp
//! ```

use crate::classify::{Classification, classify};
use crate::extract;
use crate::ui;
use colored::*;
use std::collections::BTreeSet;
use std::path::Path;

/// Accumulator for everything seen across a scan.
///
/// Created by the caller and threaded through each per-file scan; there is
/// no process-wide state.
#[derive(Debug, Default)]
pub struct Aggregate {
    /// Unique standard headers across all scanned files.
    pub standard: BTreeSet<String>,
    /// Unique local/third-party headers across all scanned files.
    pub local: BTreeSet<String>,
    /// Names that only matched the Unknown fallback. Subset of `local`,
    /// kept for the statistics table.
    unclassified: BTreeSet<String>,
    /// Files run through the scanner, whether or not they had includes.
    pub files_scanned: usize,
    /// Per-file unique includes recorded.
    pub includes_recorded: usize,
}

impl Aggregate {
    /// Record one classified header. Anything not on the standard list
    /// lands in the local/third-party bucket, Unknown included.
    pub fn record(&mut self, header: &str, class: Classification) {
        self.includes_recorded += 1;
        match class {
            Classification::StandardLibrary => {
                self.standard.insert(header.to_string());
            }
            Classification::LocalOrThirdParty => {
                self.local.insert(header.to_string());
            }
            Classification::Unknown => {
                self.local.insert(header.to_string());
                self.unclassified.insert(header.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.local.is_empty()
    }

    pub fn unclassified_count(&self) -> usize {
        self.unclassified.len()
    }
}

/// Scan one file: print its report block and fold the findings into `agg`.
///
/// A file with no includes (or one the scanner cannot read) prints only
/// its header line.
pub fn scan_file(path: &Path, agg: &mut Aggregate) {
    let includes = extract::includes_in_file(path);
    agg.files_scanned += 1;

    println!("\n{} File: {}", "📄".cyan(), path.display());
    for inc in &includes {
        let class = classify(inc);
        println!("  {:<25} {} {}", inc, "→".dimmed(), class.colored_label());
        agg.record(inc, class);
    }
}

/// Print the aggregate summary section. Silent when nothing was found.
pub fn print_summary(agg: &Aggregate) {
    if agg.is_empty() {
        return;
    }

    println!("\n=== {} C/C++ Dependency Summary ===", "💻");
    if !agg.standard.is_empty() {
        println!("{}", "Standard Library:".bold());
        for dep in &agg.standard {
            println!("  - {}", dep);
        }
    }
    if !agg.local.is_empty() {
        println!("{}", "Local or Third-Party:".bold());
        for dep in &agg.local {
            println!("  - {}", dep);
        }
    }
}

/// Print the scan statistics table.
pub fn print_stats(agg: &Aggregate) {
    println!("\n{} Scan statistics", "📊".cyan());

    let mut table = ui::Table::new(&["Metric", "Count"]);
    table.add_row(vec![
        "Files scanned".dimmed().to_string(),
        agg.files_scanned.to_string(),
    ]);
    table.add_row(vec![
        "Includes recorded".dimmed().to_string(),
        agg.includes_recorded.to_string(),
    ]);
    table.add_row(vec![
        "Standard headers".green().to_string(),
        agg.standard.len().to_string(),
    ]);
    table.add_row(vec![
        "Local or third-party".yellow().to_string(),
        agg.local.len().to_string(),
    ]);
    table.add_row(vec![
        "Unclassified names".dimmed().to_string(),
        agg.unclassified_count().to_string(),
    ]);
    table.print();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_record_routes_by_classification() {
        let mut agg = Aggregate::default();
        agg.record("vector", Classification::StandardLibrary);
        agg.record("local.h", Classification::LocalOrThirdParty);
        agg.record("thread", Classification::Unknown);

        assert!(agg.standard.contains("vector"));
        assert!(agg.local.contains("local.h"));
        // Unknown lands in the local bucket too.
        assert!(agg.local.contains("thread"));
        assert_eq!(agg.unclassified_count(), 1);
        assert_eq!(agg.includes_recorded, 3);
    }

    #[test]
    fn test_aggregates_deduplicate_across_files() {
        let mut agg = Aggregate::default();
        agg.record("vector", Classification::StandardLibrary);
        agg.record("vector", Classification::StandardLibrary);

        assert_eq!(agg.standard.len(), 1);
        assert_eq!(agg.includes_recorded, 2);
    }

    #[test]
    fn test_empty_aggregate() {
        let agg = Aggregate::default();
        assert!(agg.is_empty());
    }

    #[test]
    fn test_scan_file_folds_into_aggregate() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cpp");
        let b = dir.path().join("b.cpp");
        fs::write(&a, "#include <vector>\n#include \"local.h\"\n").unwrap();
        fs::write(&b, "#include <vector>\n").unwrap();

        let mut agg = Aggregate::default();
        scan_file(&a, &mut agg);
        scan_file(&b, &mut agg);

        assert_eq!(agg.files_scanned, 2);
        // `vector` seen in both files, listed once.
        assert_eq!(agg.standard.len(), 1);
        assert!(agg.local.contains("local.h"));
    }

    #[test]
    fn test_scan_file_without_includes_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.c");
        fs::write(&empty, "int main() { return 0; }\n").unwrap();

        let mut agg = Aggregate::default();
        scan_file(&empty, &mut agg);

        assert_eq!(agg.files_scanned, 1);
        assert!(agg.is_empty());
    }
}
