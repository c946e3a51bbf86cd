//! High-level line counting API.
//!
//! This module walks a directory depth-first and builds a [`Node`] tree of
//! everything the [`FilterConfig`] lets through. Unreadable files and
//! directories are not errors here: they contribute zero lines and are left
//! out of the tree.

use std::fs::{self, DirEntry};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::LoctreeError;
use crate::filter::FilterConfig;
use crate::node::Node;
use crate::Result;

/// Count the lines in a byte buffer.
///
/// Empty input has zero lines. Anything else has one line more than it has
/// `\n` bytes, whether or not it ends with a newline. `\r` is not special.
pub fn count_newlines(content: &[u8]) -> u64 {
    if content.is_empty() {
        return 0;
    }
    1 + bytecount::count(content, b'\n') as u64
}

/// Count the lines in a file.
///
/// A file that cannot be read counts as empty.
pub fn count_lines(path: impl AsRef<Path>) -> u64 {
    let path = path.as_ref();
    match read_file(path) {
        Ok(content) => count_newlines(&content),
        Err(e) => {
            debug!("{e}");
            0
        }
    }
}

/// Build the line-count tree for a directory using the built-in filter.
///
/// # Example
///
/// ```rust,ignore
/// use loctreelib::count_tree;
///
/// if let Some(root) = count_tree(".") {
///     println!("{}", root.lines);
/// }
/// ```
pub fn count_tree(root: impl AsRef<Path>) -> Option<Node> {
    build_tree(root, &FilterConfig::default())
}

/// Build the line-count tree for a directory.
///
/// Returns `None` when `root` cannot be listed or has no entries at all.
/// Otherwise returns a directory node, even if it holds zero lines.
/// Subdirectories with zero lines and files with zero lines are dropped.
pub fn build_tree(root: impl AsRef<Path>, filter: &FilterConfig) -> Option<Node> {
    let root = root.as_ref();

    let entries = match read_entries(root) {
        Ok(entries) if entries.is_empty() => return None,
        Ok(entries) => entries,
        Err(e) => {
            debug!("{e}");
            return None;
        }
    };

    let mut node = Node::directory(root);

    for entry in entries {
        let path = root.join(entry.file_name());

        if let Some(rule) = filter.rejection(&path) {
            trace!("skipping '{}': {rule}", path.display());
            continue;
        }

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!("failed to stat '{}': {e}", path.display());
                continue;
            }
        };

        if file_type.is_dir() {
            match build_tree(&path, filter) {
                Some(child) if !child.is_empty() => node.push_child(child),
                _ => trace!("pruning empty directory '{}'", path.display()),
            }
        } else {
            let lines = count_lines(&path);
            if lines > 0 {
                node.push_child(Node::file(path, lines));
            }
        }
    }

    Some(node)
}

/// List the immediate entries of a directory, sorted by file name.
fn read_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| LoctreeError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = read_dir
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| LoctreeError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    entries.sort_by_key(|entry| entry.file_name());

    Ok(entries)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| LoctreeError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
