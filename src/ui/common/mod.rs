//! Shared form building blocks used by the login and signup forms.

pub mod form;
pub mod message;

pub use form::{FormField, PasswordField, SelectField};
pub use message::{ErrorMessage, SuccessMessage};
