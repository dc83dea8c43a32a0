// crates/annotate_sources/src/config.rs

use std::path::PathBuf;

use annotation_marker::{ANNOTATION_MARKER, SOURCE_EXTENSIONS, SOURCE_ROOT};

/// Everything a batch run needs. The binary always uses `Default`, which is
/// built from the compile-time constants; nothing is read from flags, the
/// environment or files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Directory walked recursively.
    pub root: PathBuf,
    /// Sentinel checked for, and prepended as its own line.
    pub marker: String,
    /// Extensions without the dot, in reporting order.
    pub extensions: Vec<String>,
}

impl AnnotatorConfig {
    pub fn new<P, M, E>(root: P, marker: M, extensions: E) -> Self
    where
        P: Into<PathBuf>,
        M: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            root: root.into(),
            marker: marker.into(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self::new(SOURCE_ROOT, ANNOTATION_MARKER, SOURCE_EXTENSIONS.iter().copied())
    }
}
