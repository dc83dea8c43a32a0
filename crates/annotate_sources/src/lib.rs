// crates/annotate_sources/src/lib.rs

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use annotate_file::{annotate_file, FileOutcome};
use find_source_files::find_source_files;

mod config;
pub use config::AnnotatorConfig;

/// Per-run counters. `matched == updated + already_marked + failed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub matched: usize,
    pub updated: usize,
    pub already_marked: usize,
    pub failed: usize,
}

/// Annotates every matched file under `config.root`, writing the report to
/// `out`:
///
/// ```text
/// Found 2 files to update
/// Updated: a.js
/// Error updating src/b.jsx: could not read file: Permission denied (os error 13)
/// Done!
/// ```
///
/// Files that already carry the marker print nothing. A failure on one file
/// is reported and the run moves on; the only error returned is a failure to
/// write the report itself.
pub fn run_batch<W: Write>(config: &AnnotatorConfig, out: &mut W) -> Result<BatchSummary> {
    let extensions: Vec<&str> = config.extensions.iter().map(String::as_str).collect();
    let files = find_source_files(&config.root, &extensions);

    let mut summary = BatchSummary {
        matched: files.len(),
        ..BatchSummary::default()
    };
    writeln!(out, "Found {} files to update", files.len()).context("Failed to write report")?;

    for file_path in &files {
        match annotate_file(file_path, &config.marker) {
            Ok(FileOutcome::Updated) => {
                summary.updated += 1;
                writeln!(out, "Updated: {}", basename(file_path))
                    .context("Failed to write report")?;
            }
            Ok(FileOutcome::AlreadyMarked) => summary.already_marked += 1,
            Err(err) => {
                summary.failed += 1;
                log::debug!("Skipping {}: {}", err.path().display(), err);
                writeln!(out, "Error updating {}: {}", file_path.display(), err)
                    .context("Failed to write report")?;
            }
        }
    }

    writeln!(out, "Done!").context("Failed to write report")?;
    log::info!(
        "{} matched, {} updated, {} already marked, {} failed",
        summary.matched,
        summary.updated,
        summary.already_marked,
        summary.failed
    );
    Ok(summary)
}

fn basename(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
