//! Request and plan types.
//! - OperationRequest is what the command line asks for, with stat facts attached.
//! - Plan is what the validator hands back when the request is well-formed.

use std::fmt;

use crate::errors::SyntaxError;

use super::location::Location;
use super::retention::{Retention, RetentionPair};
use super::Shape;

/// Copy or move. Only changes the wording of rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Copy,
    Move,
}

impl Operation {
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Copy => "copy",
            Operation::Move => "move",
        }
    }

    pub fn gerund(self) -> &'static str {
        match self {
            Operation::Copy => "Copying",
            Operation::Move => "Moving",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// One copy/move invocation: sources in argument order, a single target and the flags
/// that influence legality.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    sources: Vec<Location>,
    target: Location,
    pub operation: Operation,
    pub recursive: bool,
    pub preserve: bool,
    pub retention: RetentionPair,
}

impl OperationRequest {
    /// Build a request. An empty source list is rejected here so the classifier
    /// never sees one.
    pub fn new(
        sources: Vec<Location>,
        target: Location,
        operation: Operation,
    ) -> Result<Self, SyntaxError> {
        if sources.is_empty() {
            return Err(SyntaxError::InvalidArgumentCount {
                expected: "at least 1",
                got: 0,
            });
        }
        Ok(Self {
            sources,
            target,
            operation,
            recursive: false,
            preserve: false,
            retention: RetentionPair::default(),
        })
    }

    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    pub fn preserve(mut self, yes: bool) -> Self {
        self.preserve = yes;
        self
    }

    pub fn retention(mut self, pair: RetentionPair) -> Self {
        self.retention = pair;
        self
    }

    pub fn sources(&self) -> &[Location] {
        &self.sources
    }

    pub fn target(&self) -> &Location {
        &self.target
    }
}

/// What the transfer engine should do with a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Transfer,
    /// Not there yet (e.g. a prefix that has not materialized); nothing to transfer.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSource {
    pub url: String,
    pub disposition: Disposition,
}

/// An accepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub shape: Shape,
    pub operation: Operation,
    pub sources: Vec<PlannedSource>,
    pub target: String,
    pub retention: Option<Retention>,
}

impl Plan {
    pub fn skipped(&self) -> impl Iterator<Item = &PlannedSource> {
        self.sources
            .iter()
            .filter(|s| s.disposition == Disposition::Skip)
    }
}

/// Either a plan or the reason the request was refused.
pub type ValidationOutcome = Result<Plan, SyntaxError>;
