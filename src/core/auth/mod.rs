//! Authentication against the PulseSync auth API
//!
//! - `model`: request/response types and role codes
//! - `validation`: local form checks run before any request
//! - `client`: shared submit path for login and signup
//! - `redirect`: where a successful login or signup sends the browser
//! - `transport`: gloo-net (browser) and reqwest (server) HTTP backends

mod client;
mod error;
mod model;
mod redirect;
mod transport;
mod validation;

pub use client::{AuthClient, AuthSuccess, AuthTransport, TransportError, TransportResponse};
pub use error::{AuthError, ValidationError};
pub use model::{
    ApiErrorBody, AuthResponse, Department, HospitalProfile, LoginRequest, Role, SignupRequest,
    StaffPosition, UserId,
};
pub use redirect::{AuthFlow, COMPLETE_PROFILE_PATH, RedirectTargets};
#[cfg(not(feature = "ssr"))]
pub use transport::GlooTransport;
pub use transport::PlatformTransport;
#[cfg(feature = "ssr")]
pub use transport::ReqwestTransport;
pub use validation::{LoginDraft, MIN_PASSWORD_LENGTH, SignupDraft, is_valid_email};
