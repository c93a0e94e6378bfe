//! Full-screen sign-in form.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{banner, form};
pub use runtime::TuiRuntime;
use signin_core::config::Config;

/// Fails unless stdout is a terminal the form can take over.
///
/// # Errors
/// Returns an error pointing to `signin exec` when stdout is not a terminal.
pub fn ensure_terminal() -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The sign-in form requires a terminal.\n\
             Use `signin exec --user-id <ID> --password <SECRET>` for non-interactive use."
        );
    }
    Ok(())
}

/// Runs the interactive form until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub fn run_interactive_form(config: &Config) -> Result<()> {
    ensure_terminal()?;

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()
}
