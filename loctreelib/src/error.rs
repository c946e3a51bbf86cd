//! Error types for loctreelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a directory tree.
///
/// The walker never hands these to its callers: an unreadable entry is
/// treated as contributing nothing. They exist so the I/O helpers can be
/// written with `?` and so the swallowed failure can be logged with context.
#[derive(Error, Debug)]
pub enum LoctreeError {
    /// Failed to list a directory
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
