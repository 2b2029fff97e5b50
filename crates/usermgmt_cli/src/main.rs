//! Terminal front end for the user store.
//!
//! # Responsibility
//! - Parse process flags and optionally start file logging.
//! - Run a line-oriented session over stdin until `quit` or EOF.

mod commands;
mod session;

use anyhow::{anyhow, Result};
use clap::Parser;
use commands::Command;
use log::info;
use session::{Session, Step};
use std::io::{self, BufRead, Write};
use usermgmt_core::{core_version, default_log_level, init_logging, UserStore};

#[derive(Parser, Debug)]
#[command(name = "usermgmt", version, about = "Manage an in-memory list of users")]
struct Args {
    /// One of trace|debug|info|warn|error; defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long)]
    log_dir: Option<String>,
    /// Start without the two seed users.
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let store = if args.empty {
        UserStore::empty()
    } else {
        UserStore::seeded()
    };
    info!(
        "event=session_start module=cli status=ok version={} count={}",
        core_version(),
        store.len()
    );

    let mut session = Session::new(store);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "usermgmt {} (type `help`)", core_version())?;
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut stdout)?;
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => match session.apply(command) {
                Step::Continue(output) => writeln!(stdout, "{output}")?,
                Step::Quit => break,
            },
            Err(err) => writeln!(stdout, "error: {err}")?,
        }
        prompt(&mut stdout)?;
    }

    info!(
        "event=session_end module=cli status=ok count={}",
        session.store().len()
    );
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
