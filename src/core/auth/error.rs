//! Auth error types
//!
//! The `Display` output of each variant is the message shown inline in the form.

use super::validation::MIN_PASSWORD_LENGTH;

/// Local form validation failures, detected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Please select a valid {0}")]
    InvalidChoice(&'static str),
}

/// Outcome of a failed login or signup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Server answered with a non-2xx status
    #[error("{message}")]
    Application { status: u16, message: String },

    /// Request never completed (backend down, DNS, CORS, ...)
    #[error("Connection error. Please check if the backend is running on port {port}.")]
    Connection { port: u16 },

    #[error("Unsupported account role: {0}")]
    UnknownRole(String),

    /// 2xx response whose body is not an auth response
    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, AuthError::Connection { .. })
    }
}
