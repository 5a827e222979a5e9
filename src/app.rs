//! Application orchestrator.
//! Loads/merges config, initializes logging, stats the arguments, classifies and
//! validates the request, and reports the plan or the rejection.

use anyhow::{anyhow, Result};
use clap::CommandFactory;
use tracing::{debug, error, info};

use copy_syntax::cli::{Args, Command, CopyArgs, LockArgs};
use copy_syntax::config::{config_path, load_config, ConfigSource, CONFIG_ENV};
use copy_syntax::output as out;
use copy_syntax::{
    check, gather, validate_lock, Config, LocalStat, Operation, OperationRequest, SyntaxError,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location(&args);
        return Ok(());
    }

    let mut cfg = load_config(args.config.as_deref()).inspect_err(|e| {
        out::print_error(&format!("Failed to load config: {e:#}"));
    })?;
    args.apply_overrides(&mut cfg);

    // Keep the guard alive until we return so file logs are flushed.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).inspect_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
    })?;

    debug!("Starting copy_syntax: {:?}", args);

    match &args.command {
        Some(Command::Cp(copy)) => run_copy(&cfg, Operation::Copy, copy),
        Some(Command::Mv(copy)) => run_copy(&cfg, Operation::Move, copy),
        Some(Command::Lock(lock)) => run_lock(lock),
        None => {
            let _ = Args::command().print_help();
            Err(anyhow!("no command given; expected one of: cp, mv, lock"))
        }
    }
}

fn print_config_location(args: &Args) {
    match config_path(args.config.as_deref()) {
        Some((p, ConfigSource::Flag)) => {
            out::print_info(&format!("Using --config (explicit):\n  {}\n", p.display()));
        }
        Some((p, ConfigSource::Env)) => {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", p.display()));
            out::print_info(&format!("To override, unset {CONFIG_ENV} or pass --config."));
        }
        Some((p, ConfigSource::Default)) => {
            out::print_info(&format!("Default copy_syntax config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet; built-in defaults are used.");
            }
        }
        None => out::print_error("Could not determine a default config path."),
    }
}

fn run_copy(cfg: &Config, op: Operation, args: &CopyArgs) -> Result<()> {
    let (sources, target) = args
        .split()
        .ok_or_else(|| anyhow!("Unable to parse source and target arguments."))?;

    let (sources, target) = gather(&LocalStat, sources, target);
    for src in &sources {
        debug!(path = %src.raw(), kind = ?src.kind(), "Source");
    }
    debug!(path = %target.raw(), kind = ?target.kind(), "Target");

    let req = OperationRequest::new(sources, target, op)
        .map_err(reject)?
        .recursive(args.recursive)
        .preserve(args.preserve)
        .retention(args.retention());

    let plan = check(&req, cfg.capabilities).map_err(reject)?;
    info!(
        op = %plan.operation,
        shape = %plan.shape,
        sources = plan.sources.len(),
        skipped = plan.skipped().count(),
        dest = %plan.target,
        "Request accepted"
    );
    out::print_plan(&plan);
    Ok(())
}

fn run_lock(args: &LockArgs) -> Result<()> {
    let req = args.request();
    let plan = validate_lock(&req).map_err(reject)?;
    info!(dest = %req.target, plan = ?plan, "Lock request accepted");
    out::print_lock_plan(&req.target, &plan);
    Ok(())
}

/// Log a rejection with structured fields and turn it into the process error.
fn reject(err: SyntaxError) -> anyhow::Error {
    match err.offending() {
        Some(path) => error!(kind = err.kind(), path, "{err}"),
        None => error!(kind = err.kind(), "{err}"),
    }
    anyhow::Error::new(err)
}
