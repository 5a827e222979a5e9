//! Platform-specific helpers.
//! Hides OS differences behind a uniform API so the rest of the codebase stays
//! platform-agnostic. The validator never checks the OS itself; it receives
//! Capabilities built here.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::syntax::Capabilities;

/// Capabilities of the running host.
pub fn detect_capabilities() -> Capabilities {
    Capabilities {
        // Windows has no permission bits to carry over.
        preserve_permissions: !cfg!(windows),
    }
}

/// Open (or create) a log file for appending. New files are owner-only on Unix.
#[cfg(unix)]
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)
}

/// Open (or create) a log file for appending.
#[cfg(not(unix))]
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
