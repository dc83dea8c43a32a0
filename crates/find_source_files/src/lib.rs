// crates/find_source_files/src/lib.rs

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// SourceFileFinder holds the root to walk and the extensions that qualify a
/// file for annotation.
pub struct SourceFileFinder<'a> {
    root: &'a Path,
    extensions: &'a [&'a str],
}

impl<'a> SourceFileFinder<'a> {
    /// Creates a finder for `root`. Extensions are given without the dot,
    /// e.g. `["js", "jsx"]`, and are compared case-sensitively.
    pub fn new(root: &'a Path, extensions: &'a [&'a str]) -> Self {
        Self { root, extensions }
    }

    /// Walks the root and returns every regular file whose extension is in
    /// the configured set, grouped by extension in configuration order.
    ///
    /// Symlinks are followed: a linked file is returned under its link path
    /// and a linked directory is walked. Cycles and dangling links are
    /// skipped.
    pub fn find_files(&self) -> Vec<PathBuf> {
        let candidates: Vec<PathBuf> = WalkDir::new(self.root)
            .follow_links(true)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
            .into_iter()
            // The root itself is always walked, even if its name starts with a dot.
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::debug!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
            .collect();

        let mut found = Vec::new();
        for ext in self.extensions {
            found.extend(
                candidates
                    .iter()
                    .filter(|path| has_extension(path, ext))
                    .cloned(),
            );
        }
        found
    }
}

/// Public API: recursively collects the files under `root` whose extension is
/// one of `extensions`.
///
/// # Arguments
///
/// * `root` - Directory to walk. A missing root yields an empty list.
/// * `extensions` - Extensions without the leading dot.
///
/// # Returns
///
/// All `.js` matches first, then all `.jsx` matches (for `["js", "jsx"]`),
/// each group in sorted walk order.
pub fn find_source_files(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    SourceFileFinder::new(root, extensions).find_files()
}

fn is_hidden(entry: &DirEntry) -> bool {
    let hidden = entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false);
    if hidden {
        log::debug!("Pruning hidden entry {}", entry.path().display());
    }
    hidden
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|e| e == ext)
        .unwrap_or(false)
}
