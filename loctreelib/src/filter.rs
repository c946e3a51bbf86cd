//! Path filtering: decide which entries are worth counting.
//!
//! A path is rejected when any [`ExclusionRule`] matches it. Rules are
//! evaluated in order and the first match wins. The same predicate is used
//! for files and directories, so a rejected directory is never descended into.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// File extensions (including the leading dot) that are never counted.
pub const EXCLUDED_EXTENSIONS: &[&str] = &[
    ".gz", ".json", ".zip", ".toml", ".jpg", ".jpeg", ".png", ".1", ".md", ".rst", ".sh", ".fish",
    ".txt", ".ttf", ".css", ".ico", ".zsh", ".ps1", ".gap", ".py", ".just", ".snap",
];

/// Substrings that reject a path wherever they appear in it.
///
/// These are plain, case-sensitive, unanchored matches: `tests` also
/// rejects `latest.go`.
pub const EXCLUDED_SUBSTRINGS: &[&str] = &[
    "testdata",
    "changelog",
    "azure",
    "_test",
    "tests",
    "/doc/",
    "Makefile",
    "LICENSE",
    "LICENCE",
    "VERSION",
    "docker",
];

/// A single reason to leave a path out of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Basename starts with `.`
    Hidden,
    /// Basename extension equals the given one (e.g. `".md"`)
    Extension(&'static str),
    /// Full path contains the given substring
    Substring(&'static str),
}

impl ExclusionRule {
    /// Check whether this rule rejects `path`.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            ExclusionRule::Hidden => basename(path).starts_with('.'),
            ExclusionRule::Extension(ext) => extension(&basename(path)) == *ext,
            ExclusionRule::Substring(needle) => path.to_string_lossy().contains(*needle),
        }
    }
}

impl fmt::Display for ExclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionRule::Hidden => write!(f, "hidden"),
            ExclusionRule::Extension(ext) => write!(f, "extension {ext}"),
            ExclusionRule::Substring(needle) => write!(f, "contains '{needle}'"),
        }
    }
}

/// Ordered set of exclusion rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub rules: Vec<ExclusionRule>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let rules = std::iter::once(ExclusionRule::Hidden)
            .chain(EXCLUDED_EXTENSIONS.iter().map(|&ext| ExclusionRule::Extension(ext)))
            .chain(EXCLUDED_SUBSTRINGS.iter().map(|&s| ExclusionRule::Substring(s)))
            .collect();
        Self { rules }
    }
}

impl FilterConfig {
    /// Create a filter with the built-in rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter that accepts everything.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add an extension rule. `ext` includes the leading dot.
    pub fn exclude_extension(mut self, ext: &'static str) -> Self {
        self.rules.push(ExclusionRule::Extension(ext));
        self
    }

    /// Add a substring rule.
    pub fn exclude_substring(mut self, needle: &'static str) -> Self {
        self.rules.push(ExclusionRule::Substring(needle));
        self
    }

    /// Return the first rule that rejects `path`, if any.
    pub fn rejection(&self, path: &Path) -> Option<&ExclusionRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Check if a path should be scanned.
    pub fn is_valid(&self, path: &Path) -> bool {
        self.rejection(path).is_none()
    }
}

/// Check a path against the built-in rule set.
pub fn is_valid(path: impl AsRef<Path>) -> bool {
    FilterConfig::default().is_valid(path.as_ref())
}

/// Final path segment, or the whole path when there is none (`/`, `..`).
fn basename(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

/// Everything from the last `.` of `name`, or `""` when it has no dot.
fn extension(name: &str) -> &str {
    name.rfind('.').map_or("", |idx| &name[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_source_files() {
        assert!(is_valid("src/main.go"));
        assert!(is_valid("./lib/parser.rs"));
        assert!(is_valid("main.c"));
        assert!(is_valid("Dockerfile"));
    }

    #[test]
    fn test_rejects_hidden_entries() {
        assert!(!is_valid("./.git"));
        assert!(!is_valid("src/.env"));
        assert!(!is_valid(".gitignore"));
    }

    #[test]
    fn test_hidden_only_checks_basename() {
        assert!(is_valid(".hidden_parent/main.go"));
        assert!(is_valid("./.config/src/main.go"));
    }

    #[test]
    fn test_rejects_denylisted_extensions() {
        for name in ["README.md", "Cargo.toml", "data.json", "run.sh", "script.py", "man.1"] {
            assert!(!is_valid(format!("proj/{name}")), "{name} should be rejected");
        }
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        assert!(is_valid("proj/README.MD"));
        assert!(is_valid("proj/notes.Txt"));
    }

    #[test]
    fn test_extension_uses_last_dot() {
        assert!(!is_valid("proj/archive.tar.gz"));
        assert!(is_valid("proj/config.json.go"));
        assert!(is_valid("proj/Buildfile"));
    }

    #[test]
    fn test_rejects_denylisted_substrings() {
        assert!(!is_valid("proj/testdata"));
        assert!(!is_valid("proj/pkg/parser_test.go"));
        assert!(!is_valid("proj/tests"));
        assert!(!is_valid("proj/Makefile"));
        assert!(!is_valid("proj/LICENSE"));
        assert!(!is_valid("proj/LICENCE-MIT"));
        assert!(!is_valid("proj/VERSION"));
        assert!(!is_valid("proj/docker-compose.yml"));
        assert!(!is_valid("proj/azure-pipelines.yml"));
        assert!(!is_valid("proj/changelog"));
    }

    #[test]
    fn test_substrings_match_anywhere_in_path() {
        assert!(!is_valid("proj/tests/helpers/main.go"));
        assert!(!is_valid("./doc/intro.go"));
        assert!(is_valid("./docs/intro.go"));
    }

    #[test]
    fn test_substring_overmatch_is_kept() {
        assert!(!is_valid("proj/latest.go"));
        assert!(!is_valid("proj/contests/a.go"));
    }

    #[test]
    fn test_substrings_are_case_sensitive() {
        assert!(is_valid("proj/Tests.go"));
        assert!(is_valid("proj/CHANGELOG.go"));
    }

    #[test]
    fn test_rejection_reports_first_rule() {
        let filter = FilterConfig::new();

        assert_eq!(
            filter.rejection(Path::new("proj/.tests.md")),
            Some(&ExclusionRule::Hidden)
        );
        assert_eq!(
            filter.rejection(Path::new("proj/tests.md")),
            Some(&ExclusionRule::Extension(".md"))
        );
        assert_eq!(
            filter.rejection(Path::new("proj/testdata_test.go")),
            Some(&ExclusionRule::Substring("testdata"))
        );
        assert_eq!(filter.rejection(Path::new("proj/main.go")), None);
    }

    #[test]
    fn test_custom_rules() {
        let filter = FilterConfig::empty()
            .exclude_extension(".go")
            .exclude_substring("vendor");

        assert!(!filter.is_valid(Path::new("proj/main.go")));
        assert!(!filter.is_valid(Path::new("proj/vendor/lib.rs")));
        assert!(filter.is_valid(Path::new("proj/README.md")));
        assert!(filter.is_valid(Path::new("proj/.hidden")));
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(ExclusionRule::Hidden.to_string(), "hidden");
        assert_eq!(ExclusionRule::Extension(".md").to_string(), "extension .md");
        assert_eq!(
            ExclusionRule::Substring("tests").to_string(),
            "contains 'tests'"
        );
    }
}
