//! Object-lock configuration requests.
//! `lock TARGET` reads the configuration, `lock TARGET MODE VALIDITY` sets it and
//! `lock --clear TARGET` removes it.

use crate::errors::SyntaxError;

use super::retention::{Retention, RetentionPair};
use super::url::ClientUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRequest {
    pub target: String,
    pub retention: RetentionPair,
    pub clear: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPlan {
    Get,
    Set(Retention),
    Clear,
}

pub fn validate_lock(req: &LockRequest) -> Result<LockPlan, SyntaxError> {
    if !ClientUrl::parse(&req.target).names_bucket() {
        return Err(SyntaxError::MissingBucket {
            path: req.target.clone(),
        });
    }

    if req.clear {
        if !req.retention.is_absent() {
            return Err(SyntaxError::ClearWithRetention {
                path: req.target.clone(),
            });
        }
        return Ok(LockPlan::Clear);
    }

    Ok(match req.retention.resolve()? {
        Some(retention) => LockPlan::Set(retention),
        None => LockPlan::Get,
    })
}
