//! # csnoop CLI Entry Point
//!
//! This is the main executable for the `csn` command-line tool.
//! It parses CLI arguments using clap and drives the scan pipeline:
//! discover sources, scan each one, summarize, suggest a Makefile.

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::{Path, PathBuf};

use csnoop::discover;
use csnoop::makefile;
use csnoop::report;

#[derive(Parser)]
#[command(name = "csn")]
#[command(about = "The C/C++ include snooper", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// File or directory to scan
    path: Option<PathBuf>,

    /// Write the suggested Makefile next to the scanned sources
    #[arg(long)]
    emit: bool,

    /// Generate shell completion scripts and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        return Ok(());
    }

    let Some(path) = cli.path else {
        eprintln!("Usage: csn <path-to-file-or-folder>");
        std::process::exit(1);
    };

    if !path.exists() {
        bail!("path does not exist: {}", path.display());
    }

    run_scan(&path, cli.emit)
}

fn run_scan(path: &Path, emit: bool) -> Result<()> {
    let sources = discover::discover_sources(path);
    if sources.is_empty() {
        println!("{} No C/C++ source files found.", "x".red());
        return Ok(());
    }

    println!(
        "{} Scanning {} source file(s)...",
        "⚡".yellow(),
        sources.len()
    );

    let mut agg = report::Aggregate::default();
    for file in &sources {
        report::scan_file(file, &mut agg);
    }

    report::print_summary(&agg);
    report::print_stats(&agg);

    let names: Vec<String> = sources
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .collect();

    makefile::print_suggestion(&names);

    if emit {
        let target_dir = if path.is_dir() {
            path
        } else {
            path.parent().unwrap_or(Path::new("."))
        };
        makefile::emit(&names, target_dir)?;
    }

    Ok(())
}
