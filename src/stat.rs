//! Stat collaborators.
//! Turns raw arguments into Locations before classification. Stats for multiple
//! sources run in parallel; results come back in argument order.
//!
//! Notes:
//! - Any stat failure becomes `Kind::Missing`. Whether that is fatal is the
//!   validator's call, not ours.
//! - LocalStat canonicalizes the longest existing ancestor so that relative and
//!   absolute spellings of the same folder compare equal for containment.

use rayon::prelude::*;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::StatError;
use crate::syntax::{ClientUrl, Kind, Location};

/// Source of existence/kind facts for a location.
pub trait Stat: Sync {
    fn stat(&self, raw: &str) -> Result<Kind, StatError>;

    /// A resolved form of `raw` for containment checks, if the backend has one.
    fn resolve(&self, _raw: &str) -> Option<String> {
        None
    }
}

/// Stats local filesystem paths. Remote URLs need a remote client and are reported
/// as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStat;

impl Stat for LocalStat {
    fn stat(&self, raw: &str) -> Result<Kind, StatError> {
        let path = match ClientUrl::parse(raw) {
            ClientUrl::Local { path } => path,
            ClientUrl::Remote { .. } => return Err(StatError::Unsupported(raw.to_string())),
        };
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(Kind::Directory),
            Ok(_) => Ok(Kind::File),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StatError::NotFound(path)),
            Err(source) => Err(StatError::Io { path, source }),
        }
    }

    fn resolve(&self, raw: &str) -> Option<String> {
        match ClientUrl::parse(raw) {
            ClientUrl::Local { path } => {
                resolve_local(Path::new(&path)).map(|p| p.to_string_lossy().into_owned())
            }
            ClientUrl::Remote { .. } => None,
        }
    }
}

/// Canonicalize the longest existing ancestor and re-append the missing tail.
/// Returns None when the tail cannot be re-attached (e.g. it ends in `..`).
fn resolve_local(path: &Path) -> Option<PathBuf> {
    let mut tail: Vec<OsString> = Vec::new();
    let mut current = path.to_path_buf();
    loop {
        let probe = if current.as_os_str().is_empty() {
            Path::new(".")
        } else {
            current.as_path()
        };
        if let Ok(mut real) = dunce::canonicalize(probe) {
            for name in tail.iter().rev() {
                real.push(name);
            }
            return Some(real);
        }
        tail.push(current.file_name()?.to_os_string());
        current = current.parent()?.to_path_buf();
    }
}

/// Stat a single argument.
pub fn locate<S: Stat + ?Sized>(stat: &S, raw: &str) -> Location {
    let kind = match stat.stat(raw) {
        Ok(kind) => kind,
        Err(e) => {
            debug!(path = raw, error = %e, "Stat failed; treating as missing");
            Kind::Missing
        }
    };
    let loc = Location::new(raw, kind);
    match stat.resolve(raw) {
        Some(resolved) => loc.with_normalized(resolved),
        None => loc,
    }
}

/// Stat all sources (in parallel) and the target.
pub fn gather<S: Stat + ?Sized>(stat: &S, sources: &[String], target: &str) -> (Vec<Location>, Location) {
    let sources: Vec<Location> = sources.par_iter().map(|raw| locate(stat, raw)).collect();
    let target = locate(stat, target);
    (sources, target)
}
