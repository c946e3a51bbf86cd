//! # loctree
//!
//! A CLI tool that counts source lines in a directory tree and prints them
//! as a tree, one line per file and directory.
//!
//! ## Overview
//!
//! loctree is built on top of loctreelib. It walks the given directory,
//! skips hidden entries, non-source extensions (docs, configs, images,
//! scripts) and test/licence/build paths, then prints per-file and
//! per-directory line totals.
//!
//! ## Usage
//!
//! ```bash
//! # Tree of the current directory
//! loctree
//!
//! # Tree of another directory
//! loctree path/to/project
//!
//! # Only the total
//! loctree --silent path/to/project
//! ```
//!
//! A root that cannot be read, or that is empty, produces no output and a
//! successful exit.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use loctreelib::{count_tree, write_report, ReportMode};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("loctree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count source lines of code in a directory tree")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("silent")
                .long("silent")
                .action(ArgAction::SetTrue)
                .help("Print only the number of lines of code"),
        )
}

/// Route library diagnostics to stderr. Only warnings and above are shown.
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    // A subscriber can only be installed once per process; keep going without it.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Scan the requested directory and write the report to stdout.
fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let mode = ReportMode::from_silent(matches.get_flag("silent"));

    let Some(root) = count_tree(path) else {
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &root, mode)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
