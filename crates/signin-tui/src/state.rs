//! Application state composition.
//!
//! ```text
//! AppState
//! ├── controller: FormController  (field values + notification)
//! ├── form: FormState             (focus ring, field cursors)
//! ├── config: Config              (copy, mask glyph, hint toggle)
//! └── hit_areas: Cell<HitAreas>   (control rects from the last render)
//! ```
//!
//! The controller is the single owner of the form data. Render reads it by
//! shared reference; only the reducer mutates it.

use std::cell::Cell;

use ratatui::layout::{Position, Rect};
use signin_core::config::Config;
use signin_core::form::FormController;

use crate::form::{Focus, FormState};

/// Rects of clickable controls, recorded during render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub identifier: Rect,
    pub secret: Rect,
    pub submit: Rect,
    pub dismiss: Option<Rect>,
}

impl HitAreas {
    /// Returns the control under a terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Focus> {
        let pos = Position::new(column, row);
        if self.dismiss.is_some_and(|r| r.contains(pos)) {
            Some(Focus::Dismiss)
        } else if self.identifier.contains(pos) {
            Some(Focus::Identifier)
        } else if self.secret.contains(pos) {
            Some(Focus::Secret)
        } else if self.submit.contains(pos) {
            Some(Focus::Submit)
        } else {
            None
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Form data and notification.
    pub controller: FormController,
    /// Presentation state of the form.
    pub form: FormState,
    /// Loaded configuration.
    pub config: Config,
    /// Control rects (set during render, used for mouse click routing).
    pub hit_areas: Cell<HitAreas>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            controller: FormController::new(),
            form: FormState::new(),
            config,
            hit_areas: Cell::new(HitAreas::default()),
        }
    }
}
