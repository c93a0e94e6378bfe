//! Runtime execution modes.
//!
//! - `exec`: one submission without a terminal, result on stdout
//! - `tui`: full-screen interactive form (optional feature)

pub mod exec;

#[cfg(feature = "tui")]
pub use signin_tui::{ensure_terminal, run_interactive_form};

#[cfg(not(feature = "tui"))]
pub fn ensure_terminal() -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}

#[cfg(not(feature = "tui"))]
pub fn run_interactive_form(_config: &signin_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
