//! Filepath extension handling.
//!
//! Export-side consumers know which extension their format expects; this
//! helper guarantees the path ends with it while never destroying suffixes
//! the caller already wrote.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Ensure `filepath` ends with `extension`, stacking rather than replacing.
///
/// If the path's final extension already equals the expected one it is
/// returned verbatim. Otherwise the expected extension is appended after any
/// existing suffixes: `report.draft` with `.html` becomes
/// `report.draft.html`, never `report.html`. A leading `.` on `extension` is
/// accepted and ignored. Pure path manipulation, no filesystem access.
///
/// ```
/// use std::path::PathBuf;
/// use plchart::path::ensure_extension;
///
/// assert_eq!(ensure_extension("plot", ".html"), PathBuf::from("plot.html"));
/// assert_eq!(ensure_extension("plot.html", ".html"), PathBuf::from("plot.html"));
/// assert_eq!(ensure_extension("plot.draft", ".html"), PathBuf::from("plot.draft.html"));
/// ```
pub fn ensure_extension(filepath: impl AsRef<Path>, extension: &str) -> PathBuf {
    let filepath = filepath.as_ref();
    let expected = extension.trim_start_matches('.');

    match filepath.extension().and_then(OsStr::to_str) {
        Some(existing) if existing == expected => filepath.to_path_buf(),
        _ => {
            let mut stacked = filepath.as_os_str().to_os_string();
            stacked.push(".");
            stacked.push(expected);
            PathBuf::from(stacked)
        }
    }
}
