//! Bearer-token management
//!
//! The portal issues a short-lived access token and a refresh token at
//! login. [`SessionTokenProvider`] keeps the pair behind a lock and swaps
//! the access token when the transport reports a 401.

use async_trait::async_trait;
use padron_domain::SessionTokens;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::errors::ApiError;
use crate::http::HttpClient;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the current access token.
    async fn access_token(&self) -> Result<String, ApiError>;

    /// Exchange the refresh token for a new access token and return it.
    async fn refresh_access_token(&self) -> Result<String, ApiError>;
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Token provider backed by the portal's refresh endpoint.
pub struct SessionTokenProvider {
    http: HttpClient,
    base_url: String,
    tokens: RwLock<SessionTokens>,
}

impl SessionTokenProvider {
    pub fn new(http: HttpClient, base_url: impl Into<String>, tokens: SessionTokens) -> Self {
        Self { http, base_url: base_url.into(), tokens: RwLock::new(tokens) }
    }

    /// Snapshot of the current token pair, for session persistence.
    pub async fn tokens(&self) -> SessionTokens {
        self.tokens.read().await.clone()
    }
}

#[async_trait]
impl AccessTokenProvider for SessionTokenProvider {
    async fn access_token(&self) -> Result<String, ApiError> {
        Ok(self.tokens.read().await.access.clone())
    }

    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        // Hold the write lock across the exchange so concurrent 401s do not
        // race each other with the same stale refresh token.
        let mut tokens = self.tokens.write().await;
        let url = format!("{}/api/token/refresh/", self.base_url);
        debug!(url = %url, "refreshing access token");

        let request = self
            .http
            .request(Method::POST, &url)
            .json(&RefreshRequest { refresh: &tokens.refresh });
        let response = self.http.send(request).await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Auth(format!(
                "token refresh returned status {status}: {body}"
            )));
        }

        let refreshed: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Auth(format!("malformed refresh response: {e}")))?;

        tokens.access = refreshed.access.clone();
        info!("access token refreshed");
        Ok(refreshed.access)
    }
}
