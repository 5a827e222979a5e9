//! Copy/move command syntax: classification and validation.
//! Nothing in here touches the filesystem or the network; callers stat the
//! arguments first and hand over the facts as Locations.

mod classify;
mod containment;
mod location;
mod lock;
mod request;
mod retention;
mod url;
mod validate;

pub use classify::{classify, Shape};
pub use containment::contains;
pub use location::{normalize, Kind, Location};
pub use lock::{validate_lock, LockPlan, LockRequest};
pub use request::{
    Disposition, Operation, OperationRequest, Plan, PlannedSource, ValidationOutcome,
};
pub use retention::{Retention, RetentionMode, RetentionPair, Validity, ValidityUnit};
pub use url::ClientUrl;
pub use validate::{check, Capabilities, Validator};
