use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use multitool_core::json::{flatten, format_leaf, LeafEntry};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: multitool jsonparse <file.json>";

#[derive(Debug, clap::Args, serde::Serialize)]
pub struct App {
    /// JSON file to flatten
    pub file: Option<PathBuf>,

    /// Output the leaves as a JSON array of {path, value} objects
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        crate::print_options(&app)?;
    }

    let Some(file) = app.file else {
        println!("{USAGE}");
        return Ok(());
    };

    let leaves = flatten_file(&file)?;

    if global.verbose {
        eprintln!("{} leaves in {}", leaves.len(), file.display());
    }

    if app.json {
        println!("{}", format_leaves_json(&leaves)?);
    } else {
        output_formatted(&leaves);
    }

    Ok(())
}

/// Read and parse a JSON file, returning its leaves in traversal order
pub fn flatten_file(path: &Path) -> Result<Vec<LeafEntry>, Error> {
    let bytes = crate::input::read_file(path)?;

    let document: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| Error::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(flatten(&document))
}

fn format_leaves_json(leaves: &[LeafEntry]) -> Result<String> {
    serde_json::to_string_pretty(leaves).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn output_formatted(leaves: &[LeafEntry]) {
    if std::io::stdout().is_terminal() {
        for leaf in leaves {
            println!("{}: {}", leaf.path.green(), format_leaf(&leaf.value));
        }
    } else {
        for leaf in leaves {
            println!("{}", leaf.to_line());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_flatten_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "doc.json", r#"{"a":{"b":1},"c":[2,3]}"#);

        let lines: Vec<String> = flatten_file(&path)
            .unwrap()
            .iter()
            .map(LeafEntry::to_line)
            .collect();
        assert_eq!(lines, vec!["a.b: 1", "c[0]: 2", "c[1]: 3"]);
    }

    #[test]
    fn test_flatten_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "broken.json", r#"{"a": "#);

        let err = flatten_file(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidJson { .. }));
        assert!(err.to_string().starts_with("Error parsing JSON in "));
    }

    #[test]
    fn test_flatten_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");

        assert!(matches!(flatten_file(&path), Err(Error::Read { .. })));
    }

    #[test]
    fn test_format_leaves_json() {
        let leaves = vec![LeafEntry {
            path: "a.b".to_string(),
            value: json!(1),
        }];
        let parsed: serde_json::Value =
            serde_json::from_str(&format_leaves_json(&leaves).unwrap()).unwrap();

        assert_eq!(parsed, json!([{"path": "a.b", "value": 1}]));
    }
}
