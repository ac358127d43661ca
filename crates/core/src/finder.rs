//! File extension matching
//!
//! The shell walks the directory tree and feeds each entry into
//! [`collect_matches`]; this module decides what counts as a match and what
//! happens to the walk when an entry can't be read.

use std::path::PathBuf;

/// Extension matched when none is given
pub const DEFAULT_EXTENSION: &str = "go";

/// One entry produced by a directory walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub is_dir: bool,
}

/// What to do when the walk reports an error for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error and discard what was collected so far
    #[default]
    Abort,
    /// Record the error and keep walking
    KeepGoing,
}

/// Matches found by a walk, plus the errors skipped under [`ErrorPolicy::KeepGoing`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    pub matches: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

/// Turn a user supplied extension into the file name suffix to match
///
/// `go`, `.go` and `..go` all become `.go`. An empty extension yields an
/// empty suffix, which matches every file.
pub fn normalize_extension(ext: &str) -> String {
    let bare = ext.trim().trim_start_matches('.');
    if bare.is_empty() {
        String::new()
    } else {
        format!(".{bare}")
    }
}

/// Whether a file name ends with the given suffix
pub fn matches_extension(file_name: &str, suffix: &str) -> bool {
    file_name.ends_with(suffix)
}

/// Filter walked entries down to non-directories ending with `suffix`
///
/// Entries are kept in the order the walk produced them.
pub fn collect_matches<I, E>(
    entries: I,
    suffix: &str,
    policy: ErrorPolicy,
) -> Result<WalkOutcome, E>
where
    I: IntoIterator<Item = Result<WalkedEntry, E>>,
    E: std::fmt::Display,
{
    let mut outcome = WalkOutcome::default();

    for entry in entries {
        match entry {
            Ok(entry) => {
                if !entry.is_dir && matches_extension(&entry.file_name, suffix) {
                    outcome.matches.push(entry.path);
                }
            }
            Err(err) => match policy {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::KeepGoing => outcome.skipped.push(err.to_string()),
            },
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> Result<WalkedEntry, String> {
        entry(path, false)
    }

    fn dir(path: &str) -> Result<WalkedEntry, String> {
        entry(path, true)
    }

    fn entry(path: &str, is_dir: bool) -> Result<WalkedEntry, String> {
        let path = PathBuf::from(path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(WalkedEntry {
            path,
            file_name,
            is_dir,
        })
    }

    // ============================================================================
    // normalize_extension / matches_extension tests
    // ============================================================================

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("go"), ".go");
        assert_eq!(normalize_extension(".go"), ".go");
        assert_eq!(normalize_extension("..go"), ".go");
        assert_eq!(normalize_extension(" rs "), ".rs");
        assert_eq!(normalize_extension("tar.gz"), ".tar.gz");
        assert_eq!(normalize_extension(""), "");
    }

    #[test]
    fn test_matches_extension() {
        assert!(matches_extension("main.go", ".go"));
        assert!(matches_extension(".go", ".go"));
        assert!(!matches_extension("main.golang", ".go"));
        assert!(!matches_extension("main.GO", ".go"));
        assert!(!matches_extension("go", ".go"));
        assert!(matches_extension("anything", ""));
    }

    // ============================================================================
    // collect_matches tests
    // ============================================================================

    #[test]
    fn test_collect_matches_filters_files() {
        let entries = vec![
            dir("root"),
            file("root/a.go"),
            file("root/b.txt"),
            dir("root/sub"),
            file("root/sub/c.go"),
        ];

        let outcome = collect_matches(entries, ".go", ErrorPolicy::Abort).unwrap();
        assert_eq!(
            outcome.matches,
            vec![PathBuf::from("root/a.go"), PathBuf::from("root/sub/c.go")]
        );
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_collect_matches_skips_directories_with_matching_names() {
        let entries = vec![dir("root/pkg.go"), file("root/pkg.go/x.go")];

        let outcome = collect_matches(entries, ".go", ErrorPolicy::Abort).unwrap();
        assert_eq!(outcome.matches, vec![PathBuf::from("root/pkg.go/x.go")]);
    }

    #[test]
    fn test_collect_matches_abort_discards_partial_results() {
        let entries = vec![
            file("root/a.go"),
            Err("permission denied: root/locked".to_string()),
            file("root/z.go"),
        ];

        let err = collect_matches(entries, ".go", ErrorPolicy::Abort).unwrap_err();
        assert_eq!(err, "permission denied: root/locked");
    }

    #[test]
    fn test_collect_matches_keep_going_records_errors() {
        let entries = vec![
            file("root/a.go"),
            Err("permission denied: root/locked".to_string()),
            file("root/z.go"),
        ];

        let outcome = collect_matches(entries, ".go", ErrorPolicy::KeepGoing).unwrap();
        assert_eq!(
            outcome.matches,
            vec![PathBuf::from("root/a.go"), PathBuf::from("root/z.go")]
        );
        assert_eq!(outcome.skipped, vec!["permission denied: root/locked"]);
    }

    #[test]
    fn test_collect_matches_empty_walk() {
        let entries: Vec<Result<WalkedEntry, String>> = vec![];
        let outcome = collect_matches(entries, ".go", ErrorPolicy::Abort).unwrap();
        assert_eq!(outcome, WalkOutcome::default());
    }
}
