//! Core auth logic: API client, form validation, redirect rules and configuration

pub mod auth;
pub mod config;
mod form_state;
#[cfg(test)]
mod tests;

pub use form_state::{FormStatus, SubmitPhase};
