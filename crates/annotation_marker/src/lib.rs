// crates/annotation_marker/src/lib.rs

//! Constants shared by the annotation tool‑chain: what gets written,
//! where it gets written, and which files qualify.

/// Sentinel searched for in file content. Exact form **without** the
/// trailing newline.
pub const ANNOTATION_MARKER: &str = "// Updated: 2025-12-27";

/// Exact form **with** the trailing newline (the line that is actually
/// prepended to a file).
pub const ANNOTATION_LINE: &str = "// Updated: 2025-12-27\n";

/// Directory scanned by the `annotate_sources` binary, resolved against the
/// current working directory.
pub const SOURCE_ROOT: &str = "src";

/// File extensions (without the dot) that get annotated. Order matters:
/// matched files are reported grouped by extension in this order.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx"];

/// Builds the line prepended for an arbitrary marker.
pub fn annotation_line(marker: &str) -> String {
    format!("{}\n", marker)
}
