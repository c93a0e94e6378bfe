//! Form view state: focus ring and field cursors.
//!
//! Field values live in `FormController`; this only holds what the
//! terminal presentation needs on top of them.

use super::field::FieldCursor;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Identifier,
    Secret,
    Submit,
    /// The banner's close control; only reachable while a banner shows.
    Dismiss,
}

impl Focus {
    /// Next control in tab order, wrapping around.
    pub fn next(self, banner_visible: bool) -> Self {
        match self {
            Focus::Identifier => Focus::Secret,
            Focus::Secret => Focus::Submit,
            Focus::Submit if banner_visible => Focus::Dismiss,
            Focus::Submit | Focus::Dismiss => Focus::Identifier,
        }
    }

    /// Previous control in tab order, wrapping around.
    pub fn prev(self, banner_visible: bool) -> Self {
        match self {
            Focus::Identifier if banner_visible => Focus::Dismiss,
            Focus::Identifier => Focus::Submit,
            Focus::Secret => Focus::Identifier,
            Focus::Submit => Focus::Secret,
            Focus::Dismiss => Focus::Submit,
        }
    }

    pub fn is_field(self) -> bool {
        matches!(self, Focus::Identifier | Focus::Secret)
    }
}

/// Which text field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Identifier,
    Secret,
}

impl FieldId {
    pub fn from_focus(focus: Focus) -> Option<Self> {
        match focus {
            Focus::Identifier => Some(FieldId::Identifier),
            Focus::Secret => Some(FieldId::Secret),
            Focus::Submit | Focus::Dismiss => None,
        }
    }
}

/// Presentation state for the form screen.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub focus: Focus,
    pub identifier_cursor: FieldCursor,
    pub secret_cursor: FieldCursor,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_mut(&mut self, field: FieldId) -> &mut FieldCursor {
        match field {
            FieldId::Identifier => &mut self.identifier_cursor,
            FieldId::Secret => &mut self.secret_cursor,
        }
    }

    /// Puts both cursors back at the start (fields were cleared).
    pub fn reset_cursors(&mut self) {
        self.identifier_cursor.reset();
        self.secret_cursor.reset();
    }
}
