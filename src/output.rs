//! User-facing console output.
//! Colors are enabled only when the stream is a TTY.

use owo_colors::OwoColorize;

use crate::syntax::{Disposition, LockPlan, Plan};

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain line (no prefix) that scripts can parse.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Summary of an accepted copy/move: one header line, then one line per source.
pub fn print_plan(plan: &Plan) {
    print_success(&format!("{} ({}) -> {}", plan.operation, plan.shape, plan.target));
    for src in &plan.sources {
        match src.disposition {
            Disposition::Transfer => print_user(&format!("  {}", src.url)),
            Disposition::Skip => print_warn(&format!("source `{}` does not exist yet; skipping", src.url)),
        }
    }
    if let Some(retention) = &plan.retention {
        print_info(&format!("retention: {retention}"));
    }
}

pub fn print_lock_plan(target: &str, plan: &LockPlan) {
    match plan {
        LockPlan::Get => print_success(&format!("lock: read configuration of {target}")),
        LockPlan::Set(retention) => print_success(&format!("lock: set {retention} on {target}")),
        LockPlan::Clear => print_success(&format!("lock: clear configuration of {target}")),
    }
}
