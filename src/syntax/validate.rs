//! Shape validation.
//! Enforces per-shape preconditions on a classified request and either returns a
//! Plan or the first rejection found. Checks run in a fixed order:
//! target bucket, retention pair, shape rules, platform capabilities.

use tracing::debug;

use crate::errors::SyntaxError;

use super::classify::{classify, Shape};
use super::containment::contains;
use super::location::{Kind, Location};
use super::request::{Disposition, Operation, OperationRequest, Plan, PlannedSource, ValidationOutcome};
use super::url::ClientUrl;

/// What the host environment can do. Supplied by the caller so validation stays portable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether permission bits can be carried over (`--preserve`).
    pub preserve_permissions: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            preserve_permissions: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    caps: Capabilities,
}

impl Validator {
    pub fn new(caps: Capabilities) -> Self {
        Self { caps }
    }

    /// Validate `req` as the given shape.
    pub fn validate(&self, req: &OperationRequest, shape: Shape) -> ValidationOutcome {
        let target = req.target();
        ensure_names_bucket(target)?;
        let retention = req.retention.resolve()?;

        let sources = match shape {
            Shape::FileToFile => {
                let src = ensure_single(req.sources())?;
                ensure_regular(src)?;
                vec![planned(src, Disposition::Transfer)]
            }
            Shape::FileToFolder => {
                let src = ensure_single(req.sources())?;
                ensure_regular(src)?;
                ensure_target_folder(target)?;
                vec![planned(src, Disposition::Transfer)]
            }
            Shape::TreeToFolder => {
                let src = ensure_single(req.sources())?;
                ensure_target_folder(target)?;
                let disposition = match src.kind() {
                    Kind::Missing => {
                        debug!(source = %src.raw(), "Source not found; skipping");
                        Disposition::Skip
                    }
                    Kind::Directory => {
                        ensure_folder_source(src, target, req.recursive, req.operation)?;
                        Disposition::Transfer
                    }
                    Kind::File => Disposition::Transfer,
                };
                vec![planned(src, disposition)]
            }
            Shape::ManyToFolder => {
                ensure_target_folder(target)?;
                req.sources()
                    .iter()
                    .map(|src| {
                        match src.kind() {
                            Kind::Missing => {
                                return Err(SyntaxError::SourceNotFound {
                                    path: src.raw().to_string(),
                                });
                            }
                            Kind::Directory => {
                                ensure_folder_source(src, target, req.recursive, req.operation)?
                            }
                            Kind::File => {}
                        }
                        Ok(planned(src, Disposition::Transfer))
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        if req.preserve && !self.caps.preserve_permissions {
            return Err(SyntaxError::UnsupportedOnPlatform);
        }

        debug!(%shape, op = %req.operation, dest = %target.raw(), "Request validated");
        Ok(Plan {
            shape,
            operation: req.operation,
            sources,
            target: target.raw().to_string(),
            retention,
        })
    }
}

/// Classify and validate in one step.
pub fn check(req: &OperationRequest, caps: Capabilities) -> ValidationOutcome {
    let shape = classify(req.sources(), req.target());
    debug!(%shape, sources = req.sources().len(), "Classified request");
    Validator::new(caps).validate(req, shape)
}

fn planned(src: &Location, disposition: Disposition) -> PlannedSource {
    PlannedSource {
        url: src.raw().to_string(),
        disposition,
    }
}

fn ensure_single(sources: &[Location]) -> Result<&Location, SyntaxError> {
    match sources {
        [single] => Ok(single),
        _ => Err(SyntaxError::InvalidArgumentCount {
            expected: "1",
            got: sources.len(),
        }),
    }
}

/// Source must be a regular file; a directory or a missing path both fail.
fn ensure_regular(src: &Location) -> Result<(), SyntaxError> {
    if src.is_file() {
        Ok(())
    } else {
        Err(SyntaxError::SourceNotRegular {
            path: src.raw().to_string(),
        })
    }
}

/// A target that exists must be a directory. A missing one is created later.
fn ensure_target_folder(target: &Location) -> Result<(), SyntaxError> {
    if target.exists() && !target.is_dir() {
        return Err(SyntaxError::TargetNotFolder {
            path: target.raw().to_string(),
        });
    }
    Ok(())
}

fn ensure_names_bucket(target: &Location) -> Result<(), SyntaxError> {
    if ClientUrl::parse(target.raw()).names_bucket() {
        Ok(())
    } else {
        Err(SyntaxError::MissingBucket {
            path: target.raw().to_string(),
        })
    }
}

/// Rules for a directory source: needs --recursive and must not contain the target.
fn ensure_folder_source(
    src: &Location,
    target: &Location,
    recursive: bool,
    op: Operation,
) -> Result<(), SyntaxError> {
    if !recursive {
        return Err(SyntaxError::RecursiveRequired {
            path: src.raw().to_string(),
            op,
        });
    }
    if contains(src.normalized(), target.normalized(), src.separator()) {
        return Err(SyntaxError::SelfContainment {
            path: src.raw().to_string(),
            target: target.raw().to_string(),
            op,
        });
    }
    Ok(())
}
