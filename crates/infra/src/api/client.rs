//! Authenticated JSON transport for the portal API
//!
//! Adds the bearer header, classifies non-success statuses, and retries a
//! request exactly once with a fresh token when the portal answers 401.
//! Login and token refresh go through [`PortalClient::post_public`], which
//! never attempts a refresh.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// JSON client bound to one portal base URL and one token provider.
pub struct PortalClient {
    http: HttpClient,
    base_url: String,
    auth: Arc<dyn AccessTokenProvider>,
}

impl PortalClient {
    pub fn new(
        http: HttpClient,
        base_url: impl Into<String>,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self { http, base_url: base_url.into(), auth }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute an authenticated GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, None).await
    }

    /// Execute an authenticated POST request.
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Client(format!("failed to serialize body: {e}")))?;
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Execute an unauthenticated POST request. Used for login and token
    /// refresh, where a 401 means bad credentials rather than a stale token.
    pub async fn post_public<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "public POST request");

        let request = self
            .http
            .request(Method::POST, &url)
            .header("Content-Type", "application/json")
            .json(body);
        let response = self.http.send(request).await.map_err(ApiError::from)?;
        Self::read_json(&url, response).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, url = %url, "authenticated request");

        let token = self.auth.access_token().await?;
        let response = self.send_with_token(&method, &url, body.as_ref(), &token).await?;

        // One refresh attempt on 401; a second 401 means the session is dead.
        let response = if response.status() == StatusCode::UNAUTHORIZED {
            warn!(url = %url, "access token rejected, refreshing");
            let token = self.auth.refresh_access_token().await?;
            self.send_with_token(&method, &url, body.as_ref(), &token).await?
        } else {
            response
        };

        Self::read_json(&url, response).await
    }

    async fn send_with_token(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        token: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        self.http.send(request).await.map_err(ApiError::from)
    }

    async fn read_json<R: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<R, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, url, body));
        }

        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Client(
                    "no-content response, but the response type expects a body".into(),
                )
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("failed to parse response: {e}")))
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        // The portal wraps its rejection reason in a "detail" field; show
        // that verbatim when present instead of the raw body.
        let message = match Self::extract_detail(&body) {
            Some(detail) => detail,
            None if body.is_empty() => format!("{url} returned status {status}"),
            None => format!("{url} returned status {status}: {body}"),
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }

    fn extract_detail(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value.get("detail")?.as_str().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Clone)]
    struct StaticProvider {
        token: String,
    }

    #[async_trait]
    impl AccessTokenProvider for StaticProvider {
        async fn access_token(&self) -> Result<String, ApiError> {
            Ok(self.token.clone())
        }

        async fn refresh_access_token(&self) -> Result<String, ApiError> {
            Err(ApiError::Auth("no refresh configured".into()))
        }
    }

    /// Provider whose refresh hands out a second token.
    struct RotatingProvider;

    #[async_trait]
    impl AccessTokenProvider for RotatingProvider {
        async fn access_token(&self) -> Result<String, ApiError> {
            Ok("stale-token".into())
        }

        async fn refresh_access_token(&self) -> Result<String, ApiError> {
            Ok("fresh-token".into())
        }
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
    struct Payload {
        message: String,
    }

    fn client(server: &MockServer, auth: Arc<dyn AccessTokenProvider>) -> PortalClient {
        PortalClient::new(HttpClient::new().expect("http client"), server.uri(), auth)
    }

    #[tokio::test]
    async fn get_attaches_the_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(Payload { message: "ok".into() }),
            )
            .mount(&server)
            .await;

        let client = client(&server, Arc::new(StaticProvider { token: "abc".into() }));
        let out: Payload = client.get("/thing").await.expect("response");
        assert_eq!(out.message, "ok");
    }

    #[tokio::test]
    async fn retries_once_with_a_refreshed_token_on_401() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(header("Authorization", "Bearer stale-token"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(header("Authorization", "Bearer fresh-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(Payload { message: "ok".into() }),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, Arc::new(RotatingProvider));
        let out: Payload = client.get("/thing").await.expect("response");
        assert_eq!(out.message, "ok");
    }

    #[tokio::test]
    async fn second_401_surfaces_as_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(ResponseTemplate::new(401).set_body_string("still no"))
            .expect(2)
            .mount(&server)
            .await;

        let client = client(&server, Arc::new(RotatingProvider));
        let err = client.get::<Payload>("/thing").await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[tokio::test]
    async fn public_post_never_refreshes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, Arc::new(RotatingProvider));
        let err = client
            .post_public::<_, Payload>("/api/token/", &Payload { message: "hi".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[tokio::test]
    async fn rejection_surfaces_the_server_detail_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/thing"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"detail": "reporte duplicado"})),
            )
            .mount(&server)
            .await;

        let client = client(&server, Arc::new(StaticProvider { token: "abc".into() }));
        let err = client
            .post::<_, Payload>("/thing", &Payload { message: "hi".into() })
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("reporte duplicado"));
        assert!(!msg.contains("returned status"));
    }

    #[tokio::test]
    async fn no_content_deserializes_into_unit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/done"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client(&server, Arc::new(StaticProvider { token: "abc".into() }));
        client.get::<()>("/done").await.expect("unit response");
    }

    #[tokio::test]
    async fn status_classification() {
        let server = MockServer::start().await;
        for (route, status) in
            [("/limited", 429), ("/broken", 500), ("/missing", 404)]
        {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;
        }

        let client = client(&server, Arc::new(StaticProvider { token: "abc".into() }));
        assert!(matches!(
            client.get::<Payload>("/limited").await.unwrap_err(),
            ApiError::RateLimit(_)
        ));
        assert!(matches!(
            client.get::<Payload>("/broken").await.unwrap_err(),
            ApiError::Server(_)
        ));
        assert!(matches!(
            client.get::<Payload>("/missing").await.unwrap_err(),
            ApiError::Client(_)
        ));
    }
}
