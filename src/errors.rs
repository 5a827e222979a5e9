//! Typed error definitions for copy_syntax.
//! Every rejection the validator can produce is a variant here, so callers can
//! match on the failure and tests can assert on it without string matching.

use thiserror::Error;

use crate::syntax::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Invalid number of source arguments: expected {expected}, got {got}.")]
    InvalidArgumentCount { expected: &'static str, got: usize },

    #[error("Source `{path}` is not a file.")]
    SourceNotRegular { path: String },

    #[error("Unable to validate source `{path}`.")]
    SourceNotFound { path: String },

    #[error("Target `{path}` is not a folder.")]
    TargetNotFolder { path: String },

    #[error("To {op} a folder requires --recursive flag: `{path}`.")]
    RecursiveRequired { path: String, op: Operation },

    #[error("{} a folder into itself is not allowed: `{path}` -> `{target}`.", .op.gerund())]
    SelfContainment {
        path: String,
        target: String,
        op: Operation,
    },

    #[error("Both object retention flags `--retention-mode` and `--retention-duration` are required (missing `--{missing}`).")]
    IncompleteRetentionPair { missing: &'static str },

    #[error("Permissions are not preserved on this platform.")]
    UnsupportedOnPlatform,

    #[error("Target `{path}` does not contain bucket name.")]
    MissingBucket { path: String },

    #[error("clear flag must be passed with target alone: `{path}`.")]
    ClearWithRetention { path: String },
}

impl SyntaxError {
    /// Stable tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SyntaxError::InvalidArgumentCount { .. } => "invalid_argument_count",
            SyntaxError::SourceNotRegular { .. } => "source_not_regular",
            SyntaxError::SourceNotFound { .. } => "source_not_found",
            SyntaxError::TargetNotFolder { .. } => "target_not_folder",
            SyntaxError::RecursiveRequired { .. } => "recursive_required",
            SyntaxError::SelfContainment { .. } => "self_containment",
            SyntaxError::IncompleteRetentionPair { .. } => "incomplete_retention_pair",
            SyntaxError::UnsupportedOnPlatform => "unsupported_on_platform",
            SyntaxError::MissingBucket { .. } => "missing_bucket",
            SyntaxError::ClearWithRetention { .. } => "clear_with_retention",
        }
    }

    /// The location at fault, if the rejection names one.
    pub fn offending(&self) -> Option<&str> {
        match self {
            SyntaxError::SourceNotRegular { path }
            | SyntaxError::SourceNotFound { path }
            | SyntaxError::TargetNotFolder { path }
            | SyntaxError::RecursiveRequired { path, .. }
            | SyntaxError::SelfContainment { path, .. }
            | SyntaxError::MissingBucket { path }
            | SyntaxError::ClearWithRetention { path } => Some(path),
            SyntaxError::InvalidArgumentCount { .. }
            | SyntaxError::IncompleteRetentionPair { .. }
            | SyntaxError::UnsupportedOnPlatform => None,
        }
    }
}

/// Failures while parsing retention mode/validity values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRetentionError {
    #[error("invalid retention mode '{0}'")]
    InvalidMode(String),

    #[error("invalid retention validity '{0}'")]
    InvalidValidity(String),

    #[error("invalid retention validity unit '{0}' (expected d or y)")]
    InvalidUnit(String),
}

/// Failures reported by a stat collaborator.
#[derive(Debug, Error)]
pub enum StatError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Unable to stat {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No backend available to stat {0}")]
    Unsupported(String),
}
