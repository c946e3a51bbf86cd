//! ASCII tree rendering.
//!
//! Each node is printed on its own line as `<prefix><branch><name>[/]: <lines>`.
//! The prefix carries one column per ancestor below the root: `"│   "` when
//! that ancestor still has siblings below it, `"    "` when it was the last
//! child. The root is printed with its full path and no branch glyph.

use std::io::{self, Write};

use crate::node::Node;
use crate::options::ReportMode;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Write the report for `root` to `out`.
pub fn write_report<W: Write>(out: &mut W, root: &Node, mode: ReportMode) -> io::Result<()> {
    match mode {
        ReportMode::Silent => writeln!(out, "{}", root.lines),
        ReportMode::Tree => write_node(out, root, 0, "", true),
    }
}

/// Render the report for `root` into a string.
pub fn render_report(root: &Node, mode: ReportMode) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, root, mode);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_node<W: Write>(
    out: &mut W,
    node: &Node,
    depth: usize,
    prefix: &str,
    is_last: bool,
) -> io::Result<()> {
    let (branch, name) = if depth == 0 {
        ("", node.path.to_string_lossy())
    } else if is_last {
        (LAST_BRANCH, node.name())
    } else {
        (BRANCH, node.name())
    };
    let suffix = if node.is_dir { "/" } else { "" };

    writeln!(out, "{prefix}{branch}{name}{suffix}: {}", node.lines)?;

    let child_prefix = if depth == 0 {
        String::new()
    } else if is_last {
        format!("{prefix}{SPACE}")
    } else {
        format!("{prefix}{PIPE}")
    };

    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        write_node(out, child, depth + 1, &child_prefix, i == last)?;
    }

    Ok(())
}
