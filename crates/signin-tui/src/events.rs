//! UI events fed to the reducer.

use crossterm::event::Event;

/// Events the runtime delivers to `update`, one at a time.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Raw terminal input (keys, paste, mouse, resize).
    Terminal(Event),
}
