//! Headless submission.
//!
//! Drives the same controller the form uses and reports the resulting
//! notification as a single `<icon> <text>` line.

use std::io::Write;

use anyhow::{Context, Result};
use signin_core::form::{FormController, SubmitOutcome};
use signin_core::notification::Notification;

/// Sets both fields, submits once, and writes the banner line to `out`.
///
/// A rejected submission is reported through the returned outcome, not as
/// an error.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn run_exec(identifier: &str, secret: &str, out: &mut impl Write) -> Result<SubmitOutcome> {
    let mut controller = FormController::new();
    controller.set_identifier(identifier);
    controller.set_secret(secret);
    let outcome = controller.submit();

    if let Some(notification) = controller.notification() {
        writeln!(out, "{}", format_line(notification)).context("write result")?;
    }
    Ok(outcome)
}

fn format_line(notification: &Notification) -> String {
    format!("{} {}", notification.kind.icon(), notification.text)
}

#[cfg(test)]
mod tests {
    use signin_core::form::MISSING_FIELDS_MESSAGE;

    use super::*;

    fn exec(identifier: &str, secret: &str) -> (SubmitOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_exec(identifier, secret, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_success_line_keeps_identifier_as_typed() {
        let (outcome, line) = exec("  alice ", "pw");
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(line, "✓ Hello!   alice \n");
    }

    #[test]
    fn test_missing_field_line() {
        let (outcome, line) = exec("alice", "   ");
        assert_eq!(outcome, SubmitOutcome::MissingFields);
        assert_eq!(line, format!("✗ {MISSING_FIELDS_MESSAGE}\n"));
    }

    #[test]
    fn test_line_icon_comes_from_kind() {
        let note = Notification::error("nope");
        assert_eq!(format_line(&note), format!("{} nope", note.kind.icon()));
    }
}
