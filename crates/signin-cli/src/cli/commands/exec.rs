//! Exec command handler.

use std::io;

use anyhow::Result;
use signin_core::config::Config;
use signin_core::logging;

use crate::modes;

pub fn run(user_id: &str, password: &str, config: &Config) -> Result<()> {
    // Stdout carries the result line, so logs go to stderr.
    if let Err(e) = logging::init_stderr(&config.log_level) {
        eprintln!("Warning: {e:#}");
    }

    let outcome = modes::exec::run_exec(user_id, password, &mut io::stdout().lock())?;
    tracing::debug!(?outcome, "exec finished");
    Ok(())
}
