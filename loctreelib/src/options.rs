//! Options controlling how a counted tree is reported.

/// How a counted tree is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// Indented tree with a line per kept file and directory (default)
    #[default]
    Tree,
    /// Only the root's total, as a bare integer
    Silent,
}

impl ReportMode {
    /// Pick the mode from the CLI's `--silent` flag.
    pub fn from_silent(silent: bool) -> Self {
        if silent {
            ReportMode::Silent
        } else {
            ReportMode::Tree
        }
    }
}
