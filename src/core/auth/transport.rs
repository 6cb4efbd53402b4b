//! HTTP transports for [`AuthClient`](super::AuthClient)
//!
//! The browser build uses gloo-net (`fetch`); the server build uses reqwest.

use serde::Serialize;
use url::Url;

use super::client::{AuthTransport, TransportError, TransportResponse};

/// `fetch`-based transport for the hydrated client
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(not(feature = "ssr"))]
impl AuthTransport for GlooTransport {
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<TransportResponse, TransportError> {
        use gloo_net::http::Request;

        let request = Request::post(url.as_str())
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| TransportError(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

/// reqwest-based transport for server-side and native use
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl AuthTransport for ReqwestTransport {
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

/// Transport for the current build target
#[cfg(feature = "ssr")]
pub type PlatformTransport = ReqwestTransport;

#[cfg(not(feature = "ssr"))]
pub type PlatformTransport = GlooTransport;
