//! Interactive form command handler.

use anyhow::Result;
use signin_core::config::{Config, paths};
use signin_core::logging;

use crate::modes;

pub fn run(config: &Config) -> Result<()> {
    // Refuse before touching the logs directory.
    modes::ensure_terminal()?;

    // The form owns the terminal; logs go to a file for the whole session.
    let _guard = match logging::init_file(&paths::logs_dir(), &config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {e:#}");
            None
        }
    };

    modes::run_interactive_form(config)
}
