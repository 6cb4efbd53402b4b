//! Post-authentication redirect targets
//!
//! Patients land on the patient app (home, or the onboarding page while their
//! profile is incomplete); hospital staff land on the hospital dashboard.
//! Every target carries the auth result as query parameters.

use url::Url;

use super::error::AuthError;
use super::model::{AuthResponse, Role};

/// Path on the patient app for unfinished onboarding
pub const COMPLETE_PROFILE_PATH: &str = "complete-profile";

/// Which form produced the auth response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Signup,
}

impl AuthFlow {
    /// Value of the `is_login` marker sent to the hospital app
    pub fn is_login(&self) -> bool {
        matches!(self, AuthFlow::Login)
    }

    /// Message used when the server rejects without saying why
    pub fn fallback_error(&self) -> &'static str {
        match self {
            AuthFlow::Login => "Login failed. Please try again.",
            AuthFlow::Signup => "Signup failed. Please try again.",
        }
    }
}

/// Origins of the apps a user is sent to after authenticating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTargets {
    pub patient_app: Url,
    pub hospital_app: Url,
}

impl RedirectTargets {
    pub fn new(patient_app: Url, hospital_app: Url) -> Self {
        Self {
            patient_app,
            hospital_app,
        }
    }

    /// Build the URL the browser should navigate to
    pub fn redirect_url(&self, response: &AuthResponse, flow: AuthFlow) -> Result<Url, AuthError> {
        let mut url = match response.parsed_role()? {
            Role::Patient if response.profile_complete => self.patient_app.clone(),
            Role::Patient => {
                let mut url = self.patient_app.clone();
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(COMPLETE_PROFILE_PATH);
                }
                url
            }
            Role::Hospital => self.hospital_app.clone(),
        };

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("token", &response.token)
                .append_pair("role", &response.role)
                .append_pair("user_id", &response.user_id.to_string())
                .append_pair("profile_complete", bool_str(response.profile_complete));

            if response.role == Role::Hospital.as_str() {
                query.append_pair("is_login", bool_str(flow.is_login()));
            }
        }

        Ok(url)
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
