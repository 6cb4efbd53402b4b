#[cfg(test)]
mod tests {
    use crate::core::auth::{
        AuthClient, AuthError, AuthTransport, LoginDraft, Role, SignupDraft, TransportError,
        TransportResponse,
    };
    use crate::core::config::AuthConfig;
    use crate::core::{FormStatus, SubmitPhase};
    use serde::Serialize;
    use serde_json::{Value, json};
    use std::cell::{Cell, RefCell};
    use url::Url;

    struct FakeBackend {
        reply: Result<TransportResponse, TransportError>,
        calls: Cell<usize>,
        last_body: RefCell<Option<Value>>,
    }

    impl FakeBackend {
        fn ok(body: Value) -> Self {
            Self::status(200, body)
        }

        fn status(status: u16, body: Value) -> Self {
            Self {
                reply: Ok(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
                calls: Cell::new(0),
                last_body: RefCell::new(None),
            }
        }

        fn down() -> Self {
            Self {
                reply: Err(TransportError("Failed to fetch".to_string())),
                calls: Cell::new(0),
                last_body: RefCell::new(None),
            }
        }
    }

    impl AuthTransport for FakeBackend {
        async fn post_json<B: Serialize + ?Sized>(
            &self,
            _url: &Url,
            body: &B,
        ) -> Result<TransportResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_body.borrow_mut() = serde_json::to_value(body).ok();
            self.reply.clone()
        }
    }

    fn client(backend: FakeBackend) -> AuthClient<FakeBackend> {
        AuthClient::new(backend, AuthConfig::default())
    }

    fn login() -> LoginDraft {
        LoginDraft {
            email: "pat@example.com".to_string(),
            password: "hunter22".to_string(),
        }
    }

    fn signup(role: Role) -> SignupDraft {
        SignupDraft {
            role,
            full_name: "Pat Example".to_string(),
            email: "pat@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            registration_number: "HR-2024-001".to_string(),
            department: "pediatrics".to_string(),
            license_number: "LIC-2024-123456".to_string(),
            address: "123 Medical Street, City".to_string(),
            staff_position: "doctor".to_string(),
        }
    }

    const HOSPITAL_KEYS: [&str; 5] = [
        "registrationNumber",
        "department",
        "licenseNumber",
        "address",
        "staffPosition",
    ];

    // ========================================================================
    // Submission lifecycle
    // ========================================================================

    #[test]
    fn test_begin_only_from_idle() {
        let mut status = FormStatus {
            error: Some("old error".to_string()),
            ..Default::default()
        };

        assert!(status.begin());
        assert_eq!(status.phase, SubmitPhase::Submitting);
        assert!(status.error.is_none());
        assert!(status.is_busy());

        // Second click while in flight is ignored
        assert!(!status.begin());
        assert_eq!(status.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn test_failure_returns_to_idle_with_error() {
        let mut status = FormStatus::default();
        status.begin();

        let target = status.complete(Err(AuthError::Connection { port: 5000 }), None);

        assert!(target.is_none());
        assert_eq!(status.phase, SubmitPhase::Idle);
        assert!(!status.is_busy());
        assert!(status.error.as_deref().unwrap().contains("port 5000"));
    }

    #[test]
    fn test_complete_without_begin_is_ignored() {
        let mut status = FormStatus::default();
        let target = status.complete(Err(AuthError::Connection { port: 5000 }), None);
        assert!(target.is_none());
        assert!(status.error.is_none());
    }

    #[test]
    fn test_navigation_failure_reopens_form() {
        let mut status = FormStatus::default();
        status.begin();
        status.navigation_failed("Could not open the patient app");

        assert_eq!(status.phase, SubmitPhase::Idle);
        assert_eq!(
            status.error.as_deref(),
            Some("Could not open the patient app")
        );
    }

    // ========================================================================
    // End-to-end flows against a fake backend
    // ========================================================================

    #[tokio::test]
    async fn test_login_success_redirects_with_response_values() {
        let client = client(FakeBackend::ok(json!({
            "token": "jwt.abc.def",
            "role": "patient",
            "user_id": "64f1c2",
            "profile_complete": true,
        })));

        let mut status = FormStatus::default();
        status.begin();
        let outcome = client.login(&login()).await;
        let target = status.complete(outcome, None).unwrap();

        assert_eq!(status.phase, SubmitPhase::Redirecting(target.clone()));
        assert!(status.is_busy());

        let params: Vec<(String, String)> = target.query_pairs().into_owned().collect();
        assert_eq!(
            params,
            vec![
                ("token".to_string(), "jwt.abc.def".to_string()),
                ("role".to_string(), "patient".to_string()),
                ("user_id".to_string(), "64f1c2".to_string()),
                ("profile_complete".to_string(), "true".to_string()),
            ]
        );
        assert_eq!(target.port(), Some(3001));
        assert_eq!(target.path(), "/");
    }

    #[tokio::test]
    async fn test_hospital_login_sets_is_login_true() {
        let client = client(FakeBackend::ok(json!({
            "token": "t",
            "role": "hospital",
            "user_id": 5,
            "profile_complete": true,
        })));

        let success = client.login(&login()).await.unwrap();
        assert_eq!(success.redirect_to.port(), Some(3002));
        assert!(
            success
                .redirect_to
                .query_pairs()
                .any(|(k, v)| k == "is_login" && v == "true")
        );
    }

    #[tokio::test]
    async fn test_signup_success_shows_message_then_redirects() {
        let client = client(FakeBackend::status(
            201,
            json!({
                "token": "t",
                "role": "patient",
                "user_id": 11,
                "profile_complete": false,
            }),
        ));

        let mut status = FormStatus::default();
        status.begin();
        let outcome = client.signup(&signup(Role::Patient)).await;
        let target = status.complete(
            outcome,
            Some("Account created successfully! Redirecting..."),
        );

        assert_eq!(target.unwrap().path(), "/complete-profile");
        assert_eq!(
            status.success.as_deref(),
            Some("Account created successfully! Redirecting...")
        );
    }

    #[tokio::test]
    async fn test_rejected_login_does_not_redirect() {
        let client = client(FakeBackend::status(401, json!({})));

        let mut status = FormStatus::default();
        status.begin();
        let outcome = client.login(&login()).await;
        let target = status.complete(outcome, None);

        assert!(target.is_none());
        assert_eq!(status.phase, SubmitPhase::Idle);
        assert_eq!(
            status.error.as_deref(),
            Some("Login failed. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_rejected_signup_uses_signup_fallback() {
        let client = client(FakeBackend::status(409, json!({ "error": "" })));

        let err = client.signup(&signup(Role::Patient)).await.unwrap_err();
        assert_eq!(err.to_string(), "Signup failed. Please try again.");
    }

    #[tokio::test]
    async fn test_backend_down_reports_connection_error() {
        let client = client(FakeBackend::down());

        let mut status = FormStatus::default();
        status.begin();
        let outcome = client.signup(&signup(Role::Hospital)).await;
        status.complete(outcome, Some("unused"));

        assert_eq!(status.phase, SubmitPhase::Idle);
        assert!(status.success.is_none());
        assert_eq!(
            status.error.as_deref(),
            Some("Connection error. Please check if the backend is running on port 5000.")
        );
    }

    #[tokio::test]
    async fn test_short_password_never_hits_backend() {
        let client = client(FakeBackend::ok(json!({})));
        let mut draft = signup(Role::Patient);
        draft.password = "abc".to_string();
        draft.confirm_password = "abc".to_string();

        let err = client.signup(&draft).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(client.transport().calls.get(), 0);
    }

    #[tokio::test]
    async fn test_mismatch_never_hits_backend() {
        let client = client(FakeBackend::ok(json!({})));
        let mut draft = signup(Role::Hospital);
        draft.confirm_password = "different".to_string();

        let err = client.signup(&draft).await.unwrap_err();

        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(client.transport().calls.get(), 0);
    }

    #[tokio::test]
    async fn test_payload_keys_follow_role() {
        let reply = json!({
            "token": "t",
            "role": "patient",
            "user_id": 1,
            "profile_complete": false,
        });

        let patient = client(FakeBackend::ok(reply.clone()));
        patient.signup(&signup(Role::Patient)).await.unwrap();
        let body = patient.transport().last_body.borrow().clone().unwrap();
        for key in HOSPITAL_KEYS {
            assert!(body.get(key).is_none(), "patient payload leaked {key}");
        }
        assert_eq!(body["fullName"], "Pat Example");
        assert_eq!(body["role"], "patient");

        let hospital = client(FakeBackend::ok(reply));
        hospital.signup(&signup(Role::Hospital)).await.unwrap();
        let body = hospital.transport().last_body.borrow().clone().unwrap();
        for key in HOSPITAL_KEYS {
            assert!(body.get(key).is_some(), "hospital payload missing {key}");
        }
        assert_eq!(body["role"], "hospital");
    }
}
