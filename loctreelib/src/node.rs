//! Core data structure for the line-count tree

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A counted file or directory.
///
/// A directory's `lines` is always the sum of its children's `lines`:
/// children are only added through [`Node::push_child`], which keeps the
/// total in step. Files never have children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Path as encountered during traversal (root path as given)
    pub path: PathBuf,
    /// Number of lines (sum of children for directories)
    pub lines: u64,
    /// Whether this node is a directory
    pub is_dir: bool,
    /// Children in listing order (sorted by file name)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a file node.
    pub fn file(path: impl Into<PathBuf>, lines: u64) -> Self {
        Self {
            path: path.into(),
            lines,
            is_dir: false,
            children: Vec::new(),
        }
    }

    /// Create an empty directory node.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: 0,
            is_dir: true,
            children: Vec::new(),
        }
    }

    /// Attach a child and add its lines to this node's total.
    pub fn push_child(&mut self, child: Node) {
        debug_assert!(self.is_dir, "files cannot have children");
        self.lines += child.lines;
        self.children.push(child);
    }

    /// Final path segment, or the whole path when there is none.
    pub fn name(&self) -> Cow<'_, str> {
        name_of(&self.path)
    }

    /// Check if this node has no lines
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

fn name_of(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}
