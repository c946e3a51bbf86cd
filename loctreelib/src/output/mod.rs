//! Output formatting: present a counted tree as text.
//!
//! This module handles the last stage of the pipeline, turning a [`Node`]
//! tree into lines of text. It provides:
//!
//! - **write_report**: stream a report into any `std::io::Write`
//! - **render_report**: the same report collected into a `String`
//!
//! The report is a pure function of the tree and the [`ReportMode`]; all
//! filtering and aggregation happened while the tree was built.
//!
//! ## Example
//!
//! ```rust,ignore
//! use loctreelib::output::render_report;
//! use loctreelib::{Node, ReportMode};
//!
//! let mut root = Node::directory("root");
//! root.push_child(Node::file("root/x", 1));
//! root.push_child(Node::file("root/y", 2));
//! assert_eq!(
//!     render_report(&root, ReportMode::Tree),
//!     "root/: 3\n├── x: 1\n└── y: 2\n"
//! );
//! ```
//!
//! [`Node`]: crate::node::Node
//! [`ReportMode`]: crate::options::ReportMode

pub mod tree;

pub use tree::{render_report, write_report};
