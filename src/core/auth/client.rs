//! Auth API client
//!
//! Login and signup share one submission path: validate locally, `POST` the
//! payload, classify the response, then work out where to send the browser.
//! The HTTP layer sits behind [`AuthTransport`] so the browser (gloo-net) and
//! the server (reqwest) plug in their own.

use leptos::logging::{error, log, warn};
use serde::Serialize;
use url::Url;

use super::error::AuthError;
use super::model::{ApiErrorBody, AuthResponse};
use super::redirect::AuthFlow;
use super::validation::{LoginDraft, SignupDraft};
use crate::core::config::AuthConfig;

/// Raw HTTP response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request could not be completed at all
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends a JSON `POST` and hands back status and body text.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<TransportResponse, TransportError>;
}

/// Successful authentication and where it leads
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSuccess {
    pub response: AuthResponse,
    pub redirect_to: Url,
}

/// Client for the login and signup endpoints
#[derive(Debug, Clone)]
pub struct AuthClient<T> {
    transport: T,
    config: AuthConfig,
}

impl<T: AuthTransport> AuthClient<T> {
    pub fn new(transport: T, config: AuthConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in with email and password
    pub async fn login(&self, draft: &LoginDraft) -> Result<AuthSuccess, AuthError> {
        let request = draft.validate()?;
        log!("Login attempt for email: {}", request.email);

        let url = self.config.login_url();
        let response = self.submit(&url, &request, AuthFlow::Login).await?;
        self.finish(response, AuthFlow::Login)
    }

    /// Create an account. Validation failures return before any request.
    pub async fn signup(&self, draft: &SignupDraft) -> Result<AuthSuccess, AuthError> {
        let request = draft.validate()?;
        log!(
            "Signup attempt for email: {} (role: {})",
            request.email,
            request.role
        );

        let url = self.config.signup_url();
        let response = self.submit(&url, &request, AuthFlow::Signup).await?;
        self.finish(response, AuthFlow::Signup)
    }

    /// `POST` a payload and classify the outcome
    pub async fn submit<B: Serialize + ?Sized>(
        &self,
        endpoint: &Url,
        payload: &B,
        flow: AuthFlow,
    ) -> Result<AuthResponse, AuthError> {
        let response = self
            .transport
            .post_json(endpoint, payload)
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", endpoint, e);
                AuthError::Connection {
                    port: self.config.backend_port(),
                }
            })?;

        if !response.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&response.body)
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| flow.fallback_error().to_string());

            warn!(
                "{:?} rejected with status {}: {}",
                flow, response.status, message
            );
            return Err(AuthError::Application {
                status: response.status,
                message,
            });
        }

        serde_json::from_str::<AuthResponse>(&response.body).map_err(|e| {
            error!("Unreadable {:?} response: {}", flow, e);
            AuthError::InvalidResponse(e.to_string())
        })
    }

    fn finish(&self, response: AuthResponse, flow: AuthFlow) -> Result<AuthSuccess, AuthError> {
        let targets = self.config.redirect_targets();
        let redirect_to = targets.redirect_url(&response, flow)?;

        log!(
            "{:?} succeeded for user {} (role: {}, profile_complete: {})",
            flow,
            response.user_id,
            response.role,
            response.profile_complete
        );

        Ok(AuthSuccess {
            response,
            redirect_to,
        })
    }
}
