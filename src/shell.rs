//! Form state for a password checker window.
//!
//! A GUI binds its masked input field, its "check" and "clear" buttons and its
//! result label to a [`PasswordForm`]. The form owns the state; analysis stays
//! in the pure functions of [`crate::evaluator`].

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::analyze;

pub const RESULT_PREFIX: &str = "Result: ";
pub const EMPTY_PROMPT: &str = "Result: Please enter a password.";

#[derive(Debug)]
pub struct PasswordForm {
    input: SecretString,
    result: String,
    busy: bool,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordForm {
    pub fn new() -> Self {
        Self {
            input: SecretString::new(String::new().into()),
            result: RESULT_PREFIX.to_string(),
            busy: false,
        }
    }

    /// Replaces the input field content.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = SecretString::new(text.into().into());
    }

    pub fn input_is_empty(&self) -> bool {
        self.input.expose_secret().is_empty()
    }

    /// Text of the result label.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Whether a check is in flight. The check control should be disabled
    /// while this is true.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Runs a check on the current input and updates the result label.
    ///
    /// Empty input shows [`EMPTY_PROMPT`] without analysing anything. Does
    /// nothing while an async check is in flight.
    pub fn check(&mut self) -> &str {
        if self.busy {
            return &self.result;
        }
        if self.input_is_empty() {
            self.result = EMPTY_PROMPT.to_string();
        } else {
            self.result = format!("{}{}", RESULT_PREFIX, analyze(&self.input));
        }
        &self.result
    }

    /// Empties the input and resets the result label.
    pub fn clear(&mut self) {
        self.input = SecretString::new(String::new().into());
        self.result = RESULT_PREFIX.to_string();
    }

    /// Starts an async check, handing back the password to analyse.
    ///
    /// Returns `None` when a check is already in flight, or when the input is
    /// empty (the prompt is shown instead). Pair with [`Self::finish_check`].
    #[cfg(feature = "async")]
    pub fn begin_check(&mut self) -> Option<SecretString> {
        if self.busy {
            return None;
        }
        if self.input_is_empty() {
            self.result = EMPTY_PROMPT.to_string();
            return None;
        }
        self.busy = true;
        Some(SecretString::new(self.input.expose_secret().into()))
    }

    /// Completes an async check. `None` means the check was cancelled and
    /// leaves the result label untouched.
    #[cfg(feature = "async")]
    pub fn finish_check(&mut self, verdict: Option<String>) {
        self.busy = false;
        if let Some(verdict) = verdict {
            self.result = format!("{}{}", RESULT_PREFIX, verdict);
        }
    }
}
