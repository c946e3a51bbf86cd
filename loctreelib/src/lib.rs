//! # loctreelib
//!
//! A recursive lines of code counter that reports totals per file and per
//! directory as a tree.
//!
//! ## Overview
//!
//! The library walks a directory depth-first, skips anything that does not
//! look like source code, counts raw newline-delimited lines in the rest and
//! sums them bottom-up:
//!
//! - **Filter**: rejects hidden entries, denylisted extensions and paths
//!   containing denylisted substrings ([`FilterConfig`])
//! - **Walker**: builds a [`Node`] tree mirroring the kept part of the
//!   filesystem ([`build_tree`], [`count_tree`])
//! - **Reporter**: prints the tree as an indented ASCII listing, or only the
//!   total ([`output::write_report`])
//!
//! Counting is not language-aware. Comments and blank lines count like any
//! other line. Unreadable files and directories are left out of the tree
//! rather than reported as errors.
//!
//! ## Example
//!
//! ```rust
//! use loctreelib::{count_tree, render_report, ReportMode};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let root = dir.path().join("root");
//! fs::create_dir_all(root.join("sub")).unwrap();
//! fs::write(root.join("a.go"), "package a\n\nfunc A() {}").unwrap();
//! fs::write(root.join("sub/c.go"), "package sub\n").unwrap();
//! fs::write(root.join("README.md"), "# ignored\n").unwrap();
//!
//! let tree = count_tree(&root).unwrap();
//! assert_eq!(tree.lines, 5);
//! assert_eq!(render_report(&tree, ReportMode::Silent), "5\n");
//! ```

pub mod counter;
pub mod error;
pub mod filter;
pub mod node;
pub mod options;
pub mod output;

pub use counter::{build_tree, count_lines, count_newlines, count_tree};
pub use error::LoctreeError;
pub use filter::{is_valid, ExclusionRule, FilterConfig};
pub use node::Node;
pub use options::ReportMode;
pub use output::{render_report, write_report};

/// Result type for loctreelib operations
pub type Result<T> = std::result::Result<T, LoctreeError>;
