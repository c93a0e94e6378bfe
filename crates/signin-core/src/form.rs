//! Credential form controller.
//!
//! Owns the two field values and the current notification. Hosts bind their
//! input events to the plain methods here:
//! - edits call `set_identifier` / `set_secret` with the full new value
//! - the submit action calls `submit`
//! - the banner's close action calls `dismiss`
//!
//! Everything is synchronous and deterministic given the current fields.

use std::fmt;

use tracing::{debug, info};

use crate::notification::Notification;

/// Error copy shown when either field is empty after trimming.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both User ID and Password.";

/// Prefix of the greeting shown after a successful submit.
pub const GREETING_PREFIX: &str = "Hello! ";

/// The two editable values of the form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub identifier: String,
    pub secret: String,
}

impl FieldState {
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() && self.secret.is_empty()
    }

    fn clear(&mut self) {
        self.identifier.clear();
        self.secret.clear();
    }
}

// Never print the secret itself, only its length.
impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("identifier", &self.identifier)
            .field(
                "secret",
                &format_args!("<redacted {} chars>", self.secret.chars().count()),
            )
            .finish()
    }
}

/// Which branch a submit took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both fields were present; greeting shown and fields cleared.
    Accepted,
    /// At least one field was empty or whitespace-only; fields kept.
    MissingFields,
}

/// Form state machine: fields plus the single optional notification.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    fields: FieldState,
    notification: Option<Notification>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FieldState {
        &self.fields
    }

    pub fn identifier(&self) -> &str {
        &self.fields.identifier
    }

    pub fn secret(&self) -> &str {
        &self.fields.secret
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Replaces the identifier. Validation is deferred to `submit`.
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.fields.identifier = value.into();
    }

    /// Replaces the secret. Validation is deferred to `submit`.
    pub fn set_secret(&mut self, value: impl Into<String>) {
        self.fields.secret = value.into();
    }

    /// Validates the fields and replaces the notification with the result.
    ///
    /// The emptiness check looks at trimmed values, but the greeting uses the
    /// identifier exactly as typed.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.notification = None;

        if self.fields.identifier.trim().is_empty() || self.fields.secret.trim().is_empty() {
            info!(outcome = "missing_fields", "form submitted");
            self.notification = Some(Notification::error(MISSING_FIELDS_MESSAGE));
            return SubmitOutcome::MissingFields;
        }

        info!(
            outcome = "accepted",
            identifier_len = self.fields.identifier.chars().count(),
            "form submitted"
        );
        self.notification = Some(Notification::success(format!(
            "{GREETING_PREFIX}{}",
            self.fields.identifier
        )));
        self.fields.clear();
        SubmitOutcome::Accepted
    }

    /// Clears the notification, whatever its kind.
    pub fn dismiss(&mut self) {
        if let Some(previous) = self.notification.take() {
            debug!(kind = %previous.kind, "notification dismissed");
        }
    }
}
