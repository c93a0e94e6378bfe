//! Form feature reducer.
//!
//! Binds key, paste and click input to the controller's plain methods.
//! Submit and dismiss are consumed here; they never fall through to field
//! editing (Enter never reaches a field).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use signin_core::form::{FormController, SubmitOutcome};
use tracing::debug;

use super::field::FieldOutcome;
use super::state::{FieldId, Focus, FormState};

/// Runs the controller's submit and syncs the view with its outcome.
pub fn submit(form: &mut FormState, controller: &mut FormController) -> SubmitOutcome {
    let outcome = controller.submit();
    if outcome == SubmitOutcome::Accepted {
        form.reset_cursors();
    }
    outcome
}

/// Clears the banner. Focus on the vanished close control moves back to
/// the first field.
pub fn dismiss(form: &mut FormState, controller: &mut FormController) {
    controller.dismiss();
    if form.focus == Focus::Dismiss {
        form.focus = Focus::Identifier;
    }
}

fn set_focus(form: &mut FormState, focus: Focus) {
    if form.focus != focus {
        debug!(from = ?form.focus, to = ?focus, "focus changed");
        form.focus = focus;
    }
}

/// Handles a key press aimed at the form. Returns `false` if the key had
/// no meaning for the focused control.
pub fn handle_key(form: &mut FormState, controller: &mut FormController, key: KeyEvent) -> bool {
    let banner_visible = controller.notification().is_some();
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            set_focus(form, form.focus.next(banner_visible));
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            set_focus(form, form.focus.prev(banner_visible));
            true
        }
        KeyCode::Enter => {
            activate(form, controller);
            true
        }
        KeyCode::Char(' ') if plain && !form.focus.is_field() => {
            activate(form, controller);
            true
        }
        _ => match FieldId::from_focus(form.focus) {
            Some(field) => edit_field(form, controller, field, key),
            None => false,
        },
    }
}

/// Inserts pasted text into the focused field.
pub fn handle_paste(form: &mut FormState, controller: &mut FormController, text: &str) {
    let Some(field) = FieldId::from_focus(form.focus) else {
        return;
    };
    let outcome = form
        .cursor_mut(field)
        .insert_str(field_value(controller, field), text);
    if let FieldOutcome::Changed(value) = outcome {
        set_field(controller, field, value);
    }
}

/// Focuses and activates whatever was clicked.
pub fn handle_click(form: &mut FormState, controller: &mut FormController, target: Focus) {
    match target {
        Focus::Identifier | Focus::Secret => {
            set_focus(form, target);
            if let Some(field) = FieldId::from_focus(target) {
                let value = field_value(controller, field);
                form.cursor_mut(field).move_to_end(value);
            }
        }
        Focus::Submit => {
            set_focus(form, Focus::Submit);
            submit(form, controller);
        }
        Focus::Dismiss => dismiss(form, controller),
    }
}

/// Enter (or Space on a button) on the focused control.
fn activate(form: &mut FormState, controller: &mut FormController) {
    match form.focus {
        Focus::Dismiss => dismiss(form, controller),
        Focus::Identifier | Focus::Secret | Focus::Submit => {
            submit(form, controller);
        }
    }
}

fn edit_field(
    form: &mut FormState,
    controller: &mut FormController,
    field: FieldId,
    key: KeyEvent,
) -> bool {
    let outcome = form
        .cursor_mut(field)
        .handle_key(field_value(controller, field), key);
    match outcome {
        FieldOutcome::Changed(value) => {
            set_field(controller, field, value);
            true
        }
        FieldOutcome::Moved => true,
        FieldOutcome::Ignored => false,
    }
}

fn field_value(controller: &FormController, field: FieldId) -> &str {
    match field {
        FieldId::Identifier => controller.identifier(),
        FieldId::Secret => controller.secret(),
    }
}

fn set_field(controller: &mut FormController, field: FieldId, value: String) {
    match field {
        FieldId::Identifier => controller.set_identifier(value),
        FieldId::Secret => controller.set_secret(value),
    }
}
