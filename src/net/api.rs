//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls return [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Login and registration sit behind the [`AuthApi`] trait so the auth
//! container can be driven against a scripted backend. Service-order calls
//! are plain functions taking the config and the caller's [`AuthContext`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::http::{ApiError, AuthContext};
use super::types::{ChecklistItem, LoginResponse, OrderDraft, ServiceOrder};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(config: &ApiConfig) -> String {
    config.url("/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(config: &ApiConfig) -> String {
    config.url("/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn orders_endpoint(config: &ApiConfig) -> String {
    config.url("/ordens-servico/")
}

#[cfg(any(test, feature = "hydrate"))]
fn order_endpoint(config: &ApiConfig, order_id: &str) -> String {
    config.url(&format!("/ordens-servico/{order_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn checklist_endpoint(config: &ApiConfig) -> String {
    config.url("/config/checklist")
}

/// Backend operations used by the auth container.
pub trait AuthApi {
    /// Exchange credentials for a session token.
    fn login(&self, email: &str, password: &str) -> impl Future<Output = Result<LoginResponse, ApiError>>;

    /// Create an account. The response body is not consumed.
    fn register(&self, name: &str, email: &str, password: &str) -> impl Future<Output = Result<(), ApiError>>;
}

/// [`AuthApi`] backed by the real HTTP endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::LoginRequest;

            let builder = gloo_net::http::Request::post(&login_endpoint(&self.config));
            let resp = super::http::send_json(builder, &LoginRequest { email, senha: password }).await?;
            super::http::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::RegisterRequest;

            let builder = gloo_net::http::Request::post(&register_endpoint(&self.config));
            super::http::send_json(builder, &RegisterRequest { name, email, password }).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, email, password);
            Err(ApiError::Unavailable)
        }
    }
}

/// List the signed-in user's service orders via `GET /ordens-servico/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the body
/// does not decode.
pub async fn list_orders(config: &ApiConfig, auth: &AuthContext) -> Result<Vec<ServiceOrder>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = super::http::authorized(gloo_net::http::Request::get(&orders_endpoint(config)), auth);
        let resp = super::http::send(builder).await?;
        super::http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth);
        Err(ApiError::Unavailable)
    }
}

/// Register a new service order via `POST /ordens-servico/`.
///
/// Returns the id assigned by the backend.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects the draft.
pub async fn create_order(config: &ApiConfig, auth: &AuthContext, draft: &OrderDraft) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::CreatedResponse;

        let builder = super::http::authorized(gloo_net::http::Request::post(&orders_endpoint(config)), auth);
        let resp = super::http::send_json(builder, draft).await?;
        let created: CreatedResponse = super::http::decode(resp).await?;
        Ok(created.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth, draft);
        Err(ApiError::Unavailable)
    }
}

/// Replace an existing order via `PUT /ordens-servico/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, or a 404 rejection when the
/// order does not exist or belongs to another user.
pub async fn update_order(
    config: &ApiConfig,
    auth: &AuthContext,
    order_id: &str,
    draft: &OrderDraft,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = super::http::authorized(gloo_net::http::Request::put(&order_endpoint(config, order_id)), auth);
        super::http::send_json(builder, draft).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth, order_id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete an order via `DELETE /ordens-servico/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn delete_order(config: &ApiConfig, auth: &AuthContext, order_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder =
            super::http::authorized(gloo_net::http::Request::delete(&order_endpoint(config, order_id)), auth);
        super::http::send(builder).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth, order_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the default checklist template via `GET /config/checklist`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, is rejected, or the body
/// does not decode.
pub async fn fetch_checklist(config: &ApiConfig, auth: &AuthContext) -> Result<Vec<ChecklistItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = super::http::authorized(gloo_net::http::Request::get(&checklist_endpoint(config)), auth);
        let resp = super::http::send(builder).await?;
        super::http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth);
        Err(ApiError::Unavailable)
    }
}
