//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer mutates state and returns
//! effects; render stays a pure function of state.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use signin_core::config::Config;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// How long to block waiting for terminal input before looping again.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. The terminal is restored on drop and panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
}

impl TuiRuntime {
    /// Enters the alternate screen and builds fresh form state.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: Config) -> Result<Self> {
        // Panic hook goes in before the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config),
        })
    }

    /// Runs the main event loop until a quit effect.
    ///
    /// # Errors
    /// Returns an error if reading input or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        tracing::info!("form opened");

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        tracing::info!("form closed");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }

            let events = collect_events()?;
            for event in events {
                // Every terminal event may change focus, text or the banner.
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }
        }

        Ok(())
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
        }
    }
}

/// Blocks up to `IDLE_POLL_DURATION` for input, then drains whatever is
/// buffered so a paste or fast typing lands in one render.
fn collect_events() -> Result<Vec<UiEvent>> {
    let mut events = Vec::new();
    if event::poll(IDLE_POLL_DURATION)? {
        events.push(UiEvent::Terminal(event::read()?));
        while event::poll(Duration::ZERO)? {
            events.push(UiEvent::Terminal(event::read()?));
        }
    }
    Ok(events)
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
