//! Auth endpoint and redirect configuration.
//!
//! The browser bundle reads its URLs at compile time (`option_env!`), the
//! server can override them at runtime with `AuthConfig::from_env()` after
//! calling `dotenvy::dotenv()`.

use std::fmt;

use leptos::logging::warn;
use url::Url;

use crate::core::auth::RedirectTargets;

/// Env var holding the auth API base URL
pub const API_BASE_URL_VAR: &str = "PULSESYNC_API_BASE_URL";
/// Env var holding the patient app origin
pub const PATIENT_APP_URL_VAR: &str = "PULSESYNC_PATIENT_APP_URL";
/// Env var holding the hospital app origin
pub const HOSPITAL_APP_URL_VAR: &str = "PULSESYNC_HOSPITAL_APP_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_PATIENT_APP_URL: &str = "http://localhost:3001";
const DEFAULT_HOSPITAL_APP_URL: &str = "http://localhost:3002";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must be an http(s) URL, got {value}")]
    UnsupportedScheme { var: &'static str, value: String },
}

/// URLs the auth forms talk to and redirect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base of the auth API, e.g. `http://localhost:5000/api`
    pub api_base_url: Url,

    /// Patient app origin (home and complete-profile pages)
    pub patient_app_url: Url,

    /// Hospital app origin (dashboard)
    pub hospital_app_url: Url,
}

impl AuthConfig {
    /// Build a config from raw URL strings
    pub fn new(
        api_base_url: &str,
        patient_app_url: &str,
        hospital_app_url: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_http_url(API_BASE_URL_VAR, api_base_url)?,
            patient_app_url: parse_http_url(PATIENT_APP_URL_VAR, patient_app_url)?,
            hospital_app_url: parse_http_url(HOSPITAL_APP_URL_VAR, hospital_app_url)?,
        })
    }

    /// Load configuration from environment variables, falling back to the
    /// compiled-in defaults for anything unset.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            &env_or(API_BASE_URL_VAR, compiled_api_base_url()),
            &env_or(PATIENT_APP_URL_VAR, compiled_patient_app_url()),
            &env_or(HOSPITAL_APP_URL_VAR, compiled_hospital_app_url()),
        )
    }

    /// `POST` target for login
    pub fn login_url(&self) -> Url {
        self.endpoint(&["auth", "login"])
    }

    /// `POST` target for signup
    pub fn signup_url(&self) -> Url {
        self.endpoint(&["auth", "signup"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Port the auth backend listens on, named in connection errors
    pub fn backend_port(&self) -> u16 {
        self.api_base_url.port_or_known_default().unwrap_or(80)
    }

    pub fn redirect_targets(&self) -> RedirectTargets {
        RedirectTargets::new(self.patient_app_url.clone(), self.hospital_app_url.clone())
    }
}

impl fmt::Display for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "api={}, patient_app={}, hospital_app={}",
            self.api_base_url, self.patient_app_url, self.hospital_app_url
        )
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(
            compiled_api_base_url(),
            compiled_patient_app_url(),
            compiled_hospital_app_url(),
        )
        .unwrap_or_else(|e| {
            warn!("Ignoring compiled-in auth URLs: {}", e);
            Self::builtin()
        })
    }
}

impl AuthConfig {
    fn builtin() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL)
                .expect("default API URL is valid"),
            patient_app_url: Url::parse(DEFAULT_PATIENT_APP_URL)
                .expect("default patient URL is valid"),
            hospital_app_url: Url::parse(DEFAULT_HOSPITAL_APP_URL)
                .expect("default hospital URL is valid"),
        }
    }
}

fn compiled_api_base_url() -> &'static str {
    option_env!("PULSESYNC_API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
}

fn compiled_patient_app_url() -> &'static str {
    option_env!("PULSESYNC_PATIENT_APP_URL")
        .unwrap_or(DEFAULT_PATIENT_APP_URL)
}

fn compiled_hospital_app_url() -> &'static str {
    option_env!("PULSESYNC_HOSPITAL_APP_URL")
        .unwrap_or(DEFAULT_HOSPITAL_APP_URL)
}

#[cfg(feature = "ssr")]
fn env_or(name: &str, fallback: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| fallback.to_string())
}

fn parse_http_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|source| ConfigError::InvalidUrl { var, source })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Construction (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_builtin_defaults() {
        let config = AuthConfig::builtin();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:5000/api");
        assert_eq!(config.patient_app_url.port(), Some(3001));
        assert_eq!(config.hospital_app_url.port(), Some(3002));
    }

    #[test]
    fn test_endpoints_append_to_base_path() {
        let config = AuthConfig::builtin();
        assert_eq!(
            config.login_url().as_str(),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(
            config.signup_url().as_str(),
            "http://localhost:5000/api/auth/signup"
        );
    }

    #[test]
    fn test_endpoints_tolerate_trailing_slash() {
        let config = AuthConfig::new(
            "https://api.example.com/v1/",
            "https://patients.example.com",
            "https://hospitals.example.com",
        )
        .unwrap();

        assert_eq!(
            config.login_url().as_str(),
            "https://api.example.com/v1/auth/login"
        );
    }

    #[test]
    fn test_backend_port() {
        assert_eq!(AuthConfig::builtin().backend_port(), 5000);

        let config = AuthConfig::new(
            "https://api.example.com",
            "https://patients.example.com",
            "https://hospitals.example.com",
        )
        .unwrap();
        assert_eq!(config.backend_port(), 443);
    }

    #[test]
    fn test_invalid_url_names_variable() {
        let err = AuthConfig::new(
            "not a url",
            "http://localhost:3001",
            "http://localhost:3002",
        )
        .unwrap_err();
        match &err {
            ConfigError::InvalidUrl { var, .. } => assert_eq!(*var, API_BASE_URL_VAR),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("PULSESYNC_API_BASE_URL"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = AuthConfig::new(
            "http://localhost:5000/api",
            "ftp://files.example.com",
            "http://localhost:3002",
        )
        .unwrap_err();
        match err {
            ConfigError::UnsupportedScheme { var, .. } => assert_eq!(var, PATIENT_APP_URL_VAR),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_lists_every_url() {
        assert_eq!(
            AuthConfig::builtin().to_string(),
            "api=http://localhost:5000/api, patient_app=http://localhost:3001/, \
             hospital_app=http://localhost:3002/"
        );
    }

    #[test]
    fn test_redirect_targets_follow_config() {
        let config = AuthConfig::builtin();
        let targets = config.redirect_targets();
        assert_eq!(targets.patient_app, config.patient_app_url);
        assert_eq!(targets.hospital_app, config.hospital_app_url);
    }
}
