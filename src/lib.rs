//! Core library for `copy_syntax`.
//!
//! Decides, from a list of source locations and one target, which kind of
//! copy/move is being requested and whether it may proceed. The `syntax`
//! module holds the pure classification/validation logic; `stat` gathers the
//! facts it needs; `config`, `cli` and `output` serve the binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod platform;
pub mod stat;
pub mod syntax;

pub use config::{default_config_path, load_config, load_config_from_xml_path, path_has_symlink_ancestor, Config, LogLevel};
pub use errors::{ParseRetentionError, StatError, SyntaxError};
pub use stat::{gather, locate, LocalStat, Stat};
pub use syntax::{
    check, classify, contains, validate_lock, Capabilities, Disposition, Kind, Location, LockPlan,
    LockRequest, Operation, OperationRequest, Plan, Shape, ValidationOutcome, Validator,
};
