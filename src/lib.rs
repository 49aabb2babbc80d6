//! # csnoop - C/C++ Include Snooper
//!
//! csnoop (`csn`) sniffs out what your C/C++ sources actually depend on.
//!
//! ## Features
//!
//! - **Zero Configuration**: Point it at a file or a directory
//! - **Include Extraction**: Line-scan for `#include <...>` and `#include "..."`
//! - **Classification**: Standard Library vs. Local/Third-Party by naming heuristic
//! - **Makefile Drafting**: Prints (or writes) a starter Makefile for the sources it found
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan a project tree
//! csn ./my-project
//!
//! # Scan a single file and write the suggested Makefile
//! csn src/main.cpp --emit
//! ```
//!
//! ## Module Organization
//!
//! - [`discover`] - Source file enumeration
//! - [`extract`] - Include directive extraction
//! - [`classify`] - Header name classification
//! - [`report`] - Per-file report and aggregate summary
//! - [`makefile`] - Makefile suggestion and emission

/// Header name classification heuristic.
pub mod classify;

/// Candidate source file discovery.
pub mod discover;

/// Include directive extraction.
pub mod extract;

/// Makefile suggestion and emission.
pub mod makefile;

/// Per-file reporting and aggregate summary.
pub mod report;

/// Terminal UI utilities (tables).
pub mod ui;
