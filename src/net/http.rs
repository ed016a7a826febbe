//! Request credentials, error taxonomy, and dispatch shared by every endpoint.
//!
//! DESIGN
//! ======
//! There is no process-wide default `Authorization` header. Callers hold an
//! [`AuthContext`] derived from the current session and pass it to each
//! request constructor, which attaches `Bearer <token>` itself.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies map to
//! distinct [`ApiError`] variants so pages can word them differently.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use super::types::error_detail;

/// Credential attached to outgoing requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    bearer: Option<String>,
}

impl AuthContext {
    /// Context that sends requests without credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for `token`; an empty token yields an anonymous context.
    pub fn from_token(token: Option<&str>) -> Self {
        Self { bearer: token.filter(|t| !t.is_empty()).map(str::to_owned) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer.is_some()
    }

    /// Value for the `Authorization` header, if any.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a status and raw response body.
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = error_detail(body).unwrap_or_else(|| format!("status {status}"));
        Self::Rejected { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Não foi possível conectar ao servidor.".to_owned(),
            Self::Rejected { detail, .. } => detail.clone(),
            Self::Decode(_) => "Resposta inesperada do servidor.".to_owned(),
            Self::Unavailable => "Operação disponível apenas no navegador.".to_owned(),
        }
    }
}

/// Attach the context's credential to `builder`.
#[cfg(feature = "hydrate")]
pub(crate) fn authorized(builder: gloo_net::http::RequestBuilder, auth: &AuthContext) -> gloo_net::http::RequestBuilder {
    match auth.authorization() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Send a request without a body and require a 2xx status.
#[cfg(feature = "hydrate")]
pub(crate) async fn send(builder: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ApiError> {
    let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp).await
}

/// Send `body` as JSON and require a 2xx status.
#[cfg(feature = "hydrate")]
pub(crate) async fn send_json<B: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp).await
}

/// Decode a successful response body.
#[cfg(feature = "hydrate")]
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::rejected(status, &body))
}
