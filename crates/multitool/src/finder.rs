use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use ignore::WalkBuilder;
use multitool_core::finder::{
    collect_matches, normalize_extension, ErrorPolicy, WalkOutcome, WalkedEntry,
    DEFAULT_EXTENSION,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: multitool finder <directory>";

#[derive(Debug, clap::Args, serde::Serialize)]
pub struct App {
    /// Directory to search
    pub directory: Option<PathBuf>,

    /// File extension to match, with or without the leading dot
    #[arg(short, long, env = "FINDER_EXT", default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Report unreadable entries and keep searching instead of failing
    #[arg(long)]
    pub keep_going: bool,

    /// Output as a JSON array of paths
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        crate::print_options(&app)?;
    }

    let Some(directory) = app.directory else {
        println!("{USAGE}");
        return Ok(());
    };

    let suffix = normalize_extension(&app.ext);
    let policy = if app.keep_going {
        ErrorPolicy::KeepGoing
    } else {
        ErrorPolicy::Abort
    };

    let outcome = find_files(&directory, &suffix, policy)?;

    for skipped in &outcome.skipped {
        log::warn!("skipped entry: {skipped}");
        eprintln!("{} {}", "warning:".yellow().bold(), skipped);
    }

    if global.verbose {
        eprintln!(
            "{} files matching *{} under {}",
            outcome.matches.len(),
            suffix,
            directory.display()
        );
    }

    if app.json {
        println!("{}", format_paths_json(&outcome.matches)?);
    } else {
        output_formatted(&outcome.matches);
    }

    Ok(())
}

/// Walk `root` and collect every non-directory whose name ends with `suffix`
///
/// Hidden files are included and ignore files are not honored. Entries are
/// visited in file name order within each directory, so repeated runs over
/// the same tree return the same list.
pub fn find_files(root: &Path, suffix: &str, policy: ErrorPolicy) -> Result<WalkOutcome, Error> {
    let walk_error = |message: String| Error::Walk {
        path: root.to_path_buf(),
        message,
    };

    std::fs::metadata(root).map_err(|e| walk_error(e.to_string()))?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let entries = walker.map(|entry| {
        entry.map(|entry| WalkedEntry {
            is_dir: entry.file_type().is_some_and(|ft| ft.is_dir()),
            file_name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        })
    });

    let outcome = collect_matches(entries, suffix, policy)
        .map_err(|e: ignore::Error| walk_error(e.to_string()))?;

    log::debug!(
        "found {} matches under {} ({} skipped)",
        outcome.matches.len(),
        root.display(),
        outcome.skipped.len()
    );

    Ok(outcome)
}

fn format_paths_json(paths: &[PathBuf]) -> Result<String> {
    let paths: Vec<String> = paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    serde_json::to_string_pretty(&paths).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn output_formatted(paths: &[PathBuf]) {
    if std::io::stdout().is_terminal() {
        for path in paths {
            println!("{}", path.display().to_string().cyan());
        }
    } else {
        for path in paths {
            println!("{}", path.display());
        }
    }
}
