#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "<redacted>";

/// Current values of the login form inputs.
///
/// Created empty when the form mounts and updated on every input event.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormFieldState {
    /// Username or email.
    pub identifier: String,
    /// Password.
    pub secret: String,
}

impl FormFieldState {
    pub fn set_identifier(&mut self, value: String) {
        self.identifier = value;
    }

    pub fn set_secret(&mut self, value: String) {
        self.secret = value;
    }

    /// Snapshot of the current field values.
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload { identifier: self.identifier.clone(), secret: self.secret.clone() }
    }

    /// Take the payload for a submit and apply `reset` to the fields.
    ///
    /// The returned payload always carries the values as they were before
    /// the reset.
    pub fn submit(&mut self, reset: ResetPolicy) -> SubmissionPayload {
        let payload = self.payload();
        match reset {
            ResetPolicy::Persist => {}
            ResetPolicy::ClearSecret => self.secret.clear(),
            ResetPolicy::ClearAll => {
                self.identifier.clear();
                self.secret.clear();
            }
        }
        payload
    }
}

impl fmt::Debug for FormFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFieldState")
            .field("identifier", &self.identifier)
            .field("secret", &REDACTED)
            .finish()
    }
}

/// Value handed to the `on_submit` callback.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub identifier: String,
    pub secret: String,
}

impl fmt::Debug for SubmissionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionPayload")
            .field("identifier", &self.identifier)
            .field("secret", &REDACTED)
            .finish()
    }
}

/// What the form does with its fields after a submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Keep both fields as typed.
    #[default]
    Persist,
    /// Empty the password, keep the identifier.
    ClearSecret,
    /// Empty both fields.
    ClearAll,
}
