//! Object retention settings.
//! Mode and validity arrive as two separate flags; they only mean something together.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ParseRetentionError, SyntaxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionMode {
    Governance,
    Compliance,
}

impl FromStr for RetentionMode {
    type Err = ParseRetentionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GOVERNANCE" => Ok(RetentionMode::Governance),
            "COMPLIANCE" => Ok(RetentionMode::Compliance),
            _ => Err(ParseRetentionError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for RetentionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RetentionMode::Governance => "GOVERNANCE",
            RetentionMode::Compliance => "COMPLIANCE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityUnit {
    Days,
    Years,
}

/// How long a retention lasts, e.g. `30d` or `1y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub value: u64,
    pub unit: ValidityUnit,
}

impl FromStr for Validity {
    type Err = ParseRetentionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let unit_char = chars
            .next_back()
            .ok_or_else(|| ParseRetentionError::InvalidValidity(s.to_string()))?;
        let unit = match unit_char {
            'd' | 'D' => ValidityUnit::Days,
            'y' | 'Y' => ValidityUnit::Years,
            other => return Err(ParseRetentionError::InvalidUnit(other.to_string())),
        };
        let value = chars
            .as_str()
            .parse::<u64>()
            .map_err(|_| ParseRetentionError::InvalidValidity(s.to_string()))?;
        Ok(Validity { value, unit })
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            ValidityUnit::Days => "d",
            ValidityUnit::Years => "y",
        };
        write!(f, "{}{}", self.value, unit)
    }
}

/// A complete retention setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retention {
    pub mode: RetentionMode,
    pub validity: Validity,
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.mode, self.validity)
    }
}

/// The two retention flags as given; either, both or neither may be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetentionPair {
    pub mode: Option<RetentionMode>,
    pub duration: Option<Validity>,
}

impl RetentionPair {
    pub fn new(mode: Option<RetentionMode>, duration: Option<Validity>) -> Self {
        Self { mode, duration }
    }

    pub fn is_absent(&self) -> bool {
        self.mode.is_none() && self.duration.is_none()
    }

    /// Both or neither. One without the other is a rejection.
    pub fn resolve(&self) -> Result<Option<Retention>, SyntaxError> {
        match (self.mode, self.duration) {
            (None, None) => Ok(None),
            (Some(mode), Some(validity)) => Ok(Some(Retention { mode, validity })),
            (Some(_), None) => Err(SyntaxError::IncompleteRetentionPair {
                missing: "retention-duration",
            }),
            (None, Some(_)) => Err(SyntaxError::IncompleteRetentionPair {
                missing: "retention-mode",
            }),
        }
    }
}
