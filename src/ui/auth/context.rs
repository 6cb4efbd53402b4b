//! Auth wiring for the form components
//!
//! - Provides the [`AuthConfig`] to the component tree
//! - Builds an [`AuthClient`] over the transport for the current target
//! - Drives one submission from `Submitting` to error or redirect

use std::future::Future;

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use url::Url;

use super::navigation::navigate_to;
use crate::core::FormStatus;
use crate::core::auth::{AuthClient, AuthError, AuthSuccess, PlatformTransport};
use crate::core::config::AuthConfig;

/// Message shown when the browser refuses to navigate
const NAVIGATION_FAILED: &str = "Could not open your account. Please try again.";

/// Provide auth config to the component tree
pub fn provide_auth_config(config: AuthConfig) -> AuthConfig {
    provide_context(config.clone());
    config
}

/// Auth config from context, or the compiled-in defaults
pub fn use_auth_config() -> AuthConfig {
    use_context::<AuthConfig>().unwrap_or_default()
}

/// Client for the current build target
pub fn auth_client(config: AuthConfig) -> AuthClient<PlatformTransport> {
    AuthClient::new(PlatformTransport::default(), config)
}

/// Mark the form as submitting.
///
/// Returns `false` when a submission is already running or the page is
/// redirecting.
pub fn begin_submission(status: RwSignal<FormStatus>) -> bool {
    status.try_update(|s| s.begin()).unwrap_or(false)
}

/// Await a login/signup future, record the outcome and navigate on success.
pub fn run_submission<F>(
    status: RwSignal<FormStatus>,
    success_message: Option<&'static str>,
    submission: F,
) where
    F: Future<Output = Result<AuthSuccess, AuthError>> + 'static,
{
    spawn_local(async move {
        let outcome = submission.await;

        if let Some(url) = settle_submission(status, outcome, success_message) {
            log!("Redirecting to {}", url.origin().ascii_serialization());
            if let Err(e) = navigate_to(&url) {
                error!("Navigation failed: {}", e);
                status.try_update(|s| s.navigation_failed(NAVIGATION_FAILED));
            }
        }
    });
}

/// Record the outcome on the form and return the redirect target.
///
/// The target comes from the outcome itself: a form unmounted while the
/// request was in flight still hands the user off.
fn settle_submission(
    status: RwSignal<FormStatus>,
    outcome: Result<AuthSuccess, AuthError>,
    success_message: Option<&'static str>,
) -> Option<Url> {
    let target = outcome
        .as_ref()
        .ok()
        .map(|success| success.redirect_to.clone());

    let recorded = status.try_update(|s| s.complete(outcome, success_message));
    if recorded.is_none() {
        log!("Form was closed before the auth response arrived");
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubmitPhase;
    use crate::core::auth::{AuthResponse, UserId};

    fn success() -> AuthSuccess {
        AuthSuccess {
            response: AuthResponse {
                token: "t".to_string(),
                role: "patient".to_string(),
                user_id: UserId::Number(1),
                profile_complete: true,
            },
            redirect_to: Url::parse("http://localhost:3001/?token=t").unwrap(),
        }
    }

    fn submitting() -> RwSignal<FormStatus> {
        // Signals need an active reactive owner (sandboxed arenas under ssr);
        // the owner is only weakly referenced once set, so keep it alive.
        let owner = leptos::prelude::Owner::new();
        owner.set();
        std::mem::forget(owner);
        let status = RwSignal::new(FormStatus::default());
        status.update(|s| {
            s.begin();
        });
        status
    }

    #[test]
    fn test_settle_records_redirect() {
        let status = submitting();
        let target = settle_submission(status, Ok(success()), None);

        let expected = success().redirect_to;
        assert_eq!(target, Some(expected.clone()));
        assert_eq!(
            status.get_untracked().phase,
            SubmitPhase::Redirecting(expected)
        );
    }

    #[test]
    fn test_settle_records_error_without_target() {
        let status = submitting();
        let outcome = Err(AuthError::Connection { port: 5000 });

        assert_eq!(settle_submission(status, outcome, None), None);
        assert_eq!(status.get_untracked().phase, SubmitPhase::Idle);
        assert!(status.get_untracked().error.is_some());
    }

    #[test]
    fn test_settle_after_form_closed_still_redirects() {
        let status = submitting();
        status.dispose();

        let target = settle_submission(status, Ok(success()), None);
        assert_eq!(target, Some(success().redirect_to));
    }
}
