//! Submission lifecycle shared by the login and signup forms
//!
//! `Idle -> Submitting -> (Idle + error | Redirecting)`. `Redirecting` is
//! terminal: the page is about to navigate away.

use url::Url;

use crate::core::auth::{AuthError, AuthSuccess};

/// Where a form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Redirecting(Url),
}

/// Phase plus the messages shown inline above the form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormStatus {
    pub phase: SubmitPhase,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl FormStatus {
    /// Enter `Submitting`, clearing old messages.
    ///
    /// Returns `false` (and changes nothing) unless the form is idle.
    pub fn begin(&mut self) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.error = None;
        self.success = None;
        true
    }

    /// Apply the outcome of a submission.
    ///
    /// Returns the URL to navigate to on success.
    pub fn complete(
        &mut self,
        outcome: Result<AuthSuccess, AuthError>,
        success_message: Option<&str>,
    ) -> Option<Url> {
        if self.phase != SubmitPhase::Submitting {
            return None;
        }

        match outcome {
            Ok(success) => {
                self.success = success_message.map(str::to_string);
                self.phase = SubmitPhase::Redirecting(success.redirect_to.clone());
                Some(success.redirect_to)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.phase = SubmitPhase::Idle;
                None
            }
        }
    }

    /// Navigation could not be started; let the user retry.
    pub fn navigation_failed(&mut self, message: impl Into<String>) {
        self.phase = SubmitPhase::Idle;
        self.success = None;
        self.error = Some(message.into());
    }

    /// Submit button should be disabled
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, SubmitPhase::Idle)
    }
}
