// crates/annotate_file/src/lib.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use annotation_marker::annotation_line;
use thiserror::Error;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The marker line was prepended.
    Updated,
    /// The marker was already somewhere in the file; nothing was written.
    AlreadyMarked,
}

/// The single file-operation error kind. Invalid UTF-8 is reported as a
/// `Read` failure with `io::ErrorKind::InvalidData`.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("could not read file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnnotateError {
    /// Path of the file the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            AnnotateError::Read { path, .. } | AnnotateError::Write { path, .. } => path,
        }
    }
}

/// True when `marker` occurs nowhere in `content`. The whole file is
/// searched, not only the first line.
pub fn needs_annotation(content: &str, marker: &str) -> bool {
    !content.contains(marker)
}

/// Returns the marker line followed by the untouched original content.
pub fn prepend_marker(content: &str, marker: &str) -> String {
    let line = annotation_line(marker);
    let mut annotated = String::with_capacity(line.len() + content.len());
    annotated.push_str(&line);
    annotated.push_str(content);
    annotated
}

/// Reads `path` as UTF-8 and, if `marker` is absent, rewrites it in place
/// with the marker line prepended.
///
/// A failed read leaves the file untouched. A failed write may leave it
/// truncated; there is no rollback.
pub fn annotate_file(path: &Path, marker: &str) -> Result<FileOutcome, AnnotateError> {
    let content = fs::read_to_string(path).map_err(|source| AnnotateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !needs_annotation(&content, marker) {
        log::debug!("Marker already present in {}", path.display());
        return Ok(FileOutcome::AlreadyMarked);
    }

    fs::write(path, prepend_marker(&content, marker)).map_err(|source| AnnotateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FileOutcome::Updated)
}
