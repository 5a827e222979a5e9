//! Shape classification.
//! Pure function of source count, source kinds and target kind; never fails.

use std::fmt;

use super::location::{Kind, Location};

/// The structural category of a copy/move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One file onto a file path.
    FileToFile,
    /// One file into an existing folder.
    FileToFolder,
    /// One folder (or not-yet-existing prefix) into a folder.
    TreeToFolder,
    /// Several sources into a folder.
    ManyToFolder,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::FileToFile => "file -> file",
            Shape::FileToFolder => "file -> folder",
            Shape::TreeToFolder => "folder -> folder",
            Shape::ManyToFolder => "many -> folder",
        })
    }
}

/// Decide the shape of a request.
///
/// A single file source lands on `FileToFolder` only when the target is an existing
/// directory; a target that does not exist yet is taken as a file path.
pub fn classify(sources: &[Location], target: &Location) -> Shape {
    match sources {
        [single] => match single.kind() {
            Kind::File if target.is_dir() => Shape::FileToFolder,
            Kind::File => Shape::FileToFile,
            Kind::Directory | Kind::Missing => Shape::TreeToFolder,
        },
        _ => Shape::ManyToFolder,
    }
}
