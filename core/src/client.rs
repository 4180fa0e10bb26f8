//! Stateless client for the LED lighting service.
//!
//! # Design
//! `LightingClient` holds an immutable `ClientConfig` and a transport, and
//! carries no state between calls. Every operation goes through
//! `send_request`, which is split into three steps:
//! `build_request` (pure), `Transport::execute` (I/O) and `parse_response`
//! (pure). The pure halves are public so callers that bring their own HTTP
//! stack can use the client without a transport.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Endpoint, HexColor, RequestBody};

/// Connection settings, stored exactly as given.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
        }
    }
}

// Keep the token out of logs and panic messages.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Client for the `power_on`, `power_off` and `set_color` endpoints.
#[derive(Debug, Clone)]
pub struct LightingClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl LightingClient {
    /// Client over the default `reqwest` transport. No validation is done on
    /// either argument.
    pub fn new(base_url: &str, auth_token: &str) -> Self {
        Self::with_transport(ClientConfig::new(base_url, auth_token), ReqwestTransport::new())
    }
}

impl<T: Transport> LightingClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Turn the lights on.
    pub async fn power_on(&self) -> Result<Value, RequestError> {
        self.send_request(Endpoint::PowerOn, HttpMethod::Post, RequestBody::Empty)
            .await
    }

    /// Turn the lights off.
    pub async fn power_off(&self) -> Result<Value, RequestError> {
        self.send_request(Endpoint::PowerOff, HttpMethod::Post, RequestBody::Empty)
            .await
    }

    /// Set the light color. `hex_code` must be `#RGB` or `#RRGGBB`; anything
    /// else fails with `RequestError::InvalidColor` before a request is made.
    pub async fn set_color(&self, hex_code: &str) -> Result<Value, RequestError> {
        let color: HexColor = hex_code.parse()?;
        self.send_request(
            Endpoint::SetColor,
            HttpMethod::Post,
            RequestBody::Color(color.into()),
        )
        .await
    }

    async fn send_request(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: RequestBody,
    ) -> Result<Value, RequestError> {
        let request = self.build_request(endpoint, method, &body)?;
        debug!(%endpoint, method = %request.method, url = %request.url, "sending lighting request");

        let response = self.transport.execute(request).await.map_err(|e| {
            warn!(%endpoint, error = %e, "lighting request failed");
            RequestError::from(e)
        })?;

        let result = self.parse_response(response);
        if let Err(e) = &result {
            warn!(%endpoint, error = %e, "lighting request rejected");
        }
        result
    }

    /// Build the request for `endpoint`: `{base_url}/{path}` with the auth
    /// token in `Authorization`, verbatim.
    pub fn build_request(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: &RequestBody,
    ) -> Result<HttpRequest, RequestError> {
        let body = body.to_json()?;
        let mut headers = vec![("authorization".to_string(), self.config.auth_token.clone())];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        Ok(HttpRequest {
            method,
            url: format!(
                "{}/{}",
                self.config.base_url.trim_end_matches('/'),
                endpoint.path()
            ),
            headers,
            body,
        })
    }

    /// Accept exactly 200 and decode its body. An empty 200 body decodes to
    /// `Value::Null`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, RequestError> {
        if response.status != 200 {
            return Err(RequestError::Status {
                status: response.status,
                body: response.body,
            });
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}
