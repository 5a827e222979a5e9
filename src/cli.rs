//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `cp`/`mv` take two or more paths; the last one is the target.
//! - --debug is a shorthand for --log-level debug.
//! - Retention values are parsed by clap, so malformed modes/validities never
//!   reach the validator.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::syntax::{LockRequest, RetentionMode, RetentionPair, Validity};

/// Check copy/move/lock command lines before anything is transferred.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Classify and validate copy/move/lock arguments"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Explicit config file; beats $COPY_SYNTAX_CONFIG and the default location.
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print where the config file is looked up, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate a copy: SOURCE... TARGET
    Cp(CopyArgs),
    /// Validate a move: SOURCE... TARGET
    Mv(CopyArgs),
    /// Validate an object-lock command: TARGET [MODE VALIDITY]
    Lock(LockArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CopyArgs {
    /// Copy folders recursively.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Preserve filesystem attributes (permission bits).
    #[arg(short = 'a', long)]
    pub preserve: bool,

    /// Object retention mode: governance or compliance.
    #[arg(long, value_name = "MODE")]
    pub retention_mode: Option<RetentionMode>,

    /// Object retention duration, e.g. 30d or 1y.
    #[arg(long, value_name = "VALIDITY")]
    pub retention_duration: Option<Validity>,

    /// Sources followed by the target.
    #[arg(value_name = "PATH", num_args = 2.., required = true, value_hint = ValueHint::AnyPath)]
    pub paths: Vec<String>,
}

impl CopyArgs {
    /// (sources, target). None only when constructed by hand with no paths.
    pub fn split(&self) -> Option<(&[String], &str)> {
        let (target, sources) = self.paths.split_last()?;
        Some((sources, target.as_str()))
    }

    pub fn retention(&self) -> RetentionPair {
        RetentionPair::new(self.retention_mode, self.retention_duration)
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LockArgs {
    /// Clear the lock configuration (target only).
    #[arg(long)]
    pub clear: bool,

    #[arg(value_name = "TARGET")]
    pub target: String,

    #[arg(value_name = "MODE")]
    pub mode: Option<RetentionMode>,

    #[arg(value_name = "VALIDITY")]
    pub validity: Option<Validity>,
}

impl LockArgs {
    pub fn request(&self) -> LockRequest {
        LockRequest {
            target: self.target.clone(),
            retention: RetentionPair::new(self.mode, self.validity),
            clear: self.clear,
        }
    }
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.json {
            cfg.json = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
