//! Authentication UI module
//!
//! Login and signup forms plus the glue that submits them and sends the
//! browser on to the patient or hospital app.

mod context;
mod login_form;
mod navigation;
mod signup_form;

pub use context::{provide_auth_config, use_auth_config};
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
