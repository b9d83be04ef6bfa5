// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Credentials for Azure Resource Manager.
//!
//! Clients add the headers returned by [Credentials::headers] to every
//! request. Most applications use a [ServicePrincipal]; tests replaying
//! recorded interactions use [Anonymous].

use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// The default Azure Active Directory authority.
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// The default resource (audience) for Azure Resource Manager tokens.
pub const DEFAULT_RESOURCE: &str = "https://management.core.windows.net/";

// Refresh tokens slightly before they expire.
const EXPIRATION_SLACK: Duration = Duration::from_secs(300);

pub type Result<T> = std::result::Result<T, CredentialsError>;

/// Represents an error creating the authentication headers.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("cannot format the authorization header: {0}")]
    InvalidHeader(#[source] http::header::InvalidHeaderValue),
    #[error("cannot send the token request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("the token endpoint returned {status}: {body}")]
    TokenEndpoint { status: u16, body: String },
    #[error("cannot parse the token response: {0}")]
    Parse(String),
}

/// Implementations return the headers used to authenticate each request.
#[async_trait::async_trait]
pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
    async fn headers(&self) -> Result<HeaderMap>;
}

/// A type-erased [CredentialsProvider].
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn CredentialsProvider>,
}

impl Credentials {
    pub async fn headers(&self) -> gax::Result<HeaderMap> {
        self.inner
            .headers()
            .await
            .map_err(gax::error::Error::authentication)
    }
}

impl<T> From<T> for Credentials
where
    T: CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

/// Credentials that add no headers.
///
/// Useful when replaying recorded interactions, or with local emulators.
#[derive(Clone, Debug, Default)]
pub struct Anonymous;

#[async_trait::async_trait]
impl CredentialsProvider for Anonymous {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

/// Credentials using a pre-acquired bearer token.
#[derive(Clone)]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for AccessToken {
    async fn headers(&self) -> Result<HeaderMap> {
        bearer(&self.token)
    }
}

fn bearer(token: &str) -> Result<HeaderMap> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(CredentialsError::InvalidHeader)?;
    value.set_sensitive(true);
    Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
}

/// Credentials for an Azure Active Directory service principal.
///
/// Exchanges the client id and secret for an access token using the OAuth2
/// client credentials flow. The token is cached until shortly before it
/// expires.
#[derive(Clone)]
pub struct ServicePrincipal {
    tenant_id: String,
    client_id: String,
    client_secret: String,
    authority_host: String,
    resource: String,
    http: reqwest::Client,
    cache: Arc<Mutex<Option<CachedToken>>>,
}

#[derive(Clone, Debug)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl ServicePrincipal {
    pub fn new<T, C, S>(tenant_id: T, client_id: C, client_secret: S) -> Self
    where
        T: Into<String>,
        C: Into<String>,
        S: Into<String>,
    {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            authority_host: DEFAULT_AUTHORITY_HOST.to_string(),
            resource: DEFAULT_RESOURCE.to_string(),
            http: reqwest::Client::new(),
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Overrides the authority host, e.g. for sovereign clouds.
    pub fn with_authority_host<V: Into<String>>(mut self, v: V) -> Self {
        self.authority_host = v.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the resource (audience) of the tokens.
    pub fn with_resource<V: Into<String>>(mut self, v: V) -> Self {
        self.resource = v.into();
        self
    }

    fn token_url(&self) -> String {
        format!("{}/{}/oauth2/token", self.authority_host, self.tenant_id)
    }

    async fn fetch_token(&self) -> Result<CachedToken> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("resource", self.resource.as_str()),
        ];
        let response = self
            .http
            .post(self.token_url())
            .form(&form)
            .send()
            .await
            .map_err(CredentialsError::Request)?;
        let status = response.status();
        let body = response.text().await.map_err(CredentialsError::Request)?;
        if !status.is_success() {
            return Err(CredentialsError::TokenEndpoint {
                status: status.as_u16(),
                body,
            });
        }
        parse_token(&body)
    }
}

impl std::fmt::Debug for ServicePrincipal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServicePrincipal")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("authority_host", &self.authority_host)
            .field("resource", &self.resource)
            .finish()
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for ServicePrincipal {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut guard = self.cache.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > Instant::now() + EXPIRATION_SLACK {
                return bearer(&cached.token);
            }
        }
        let fresh = self.fetch_token().await?;
        let headers = bearer(&fresh.token)?;
        *guard = Some(fresh);
        Ok(headers)
    }
}

// The v1 token endpoint returns `expires_in` as a string, v2 as a number.
fn parse_token(body: &str) -> Result<CachedToken> {
    let value = serde_json::from_str::<serde_json::Value>(body)
        .map_err(|e| CredentialsError::Parse(e.to_string()))?;
    let token = value
        .get("access_token")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| CredentialsError::Parse("missing `access_token`".to_string()))?;
    let expires_in = match value.get("expires_in") {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.parse::<u64>().ok(),
        _ => None,
    }
    .unwrap_or(0);
    Ok(CachedToken {
        token: token.to_string(),
        expires_at: Instant::now() + Duration::from_secs(expires_in),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use std::error::Error as _;

    mockall::mock! {
        #[derive(Debug)]
        Provider {}

        #[async_trait::async_trait]
        impl CredentialsProvider for Provider {
            async fn headers(&self) -> Result<HeaderMap>;
        }
    }

    #[tokio::test]
    async fn anonymous() -> anyhow::Result<()> {
        let cred = Credentials::from(Anonymous);
        assert!(cred.headers().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn access_token() -> anyhow::Result<()> {
        let cred = Credentials::from(AccessToken::new("test-token"));
        let headers = cred.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION).map(|v| v.to_str().unwrap()),
            Some("Bearer test-token")
        );
        let fmt = format!("{cred:?}");
        assert!(!fmt.contains("test-token"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn provider_error() {
        let mut mock = MockProvider::new();
        mock.expect_headers().times(1).returning(|| {
            Err(CredentialsError::TokenEndpoint {
                status: 401,
                body: "unauthorized".to_string(),
            })
        });
        let cred = Credentials::from(mock);
        let err = cred.headers().await.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(
            matches!(source, Some(CredentialsError::TokenEndpoint { status: 401, .. })),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn service_principal_caches_token() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/test-tenant/oauth2/token"),
                request::body(url_decoded(contains(("grant_type", "client_credentials")))),
                request::body(url_decoded(contains(("client_id", "test-client")))),
                request::body(url_decoded(contains(("client_secret", "test-secret")))),
                request::body(url_decoded(contains(("resource", DEFAULT_RESOURCE)))),
            ])
            .times(1)
            .respond_with(json_encoded(serde_json::json!({
                "token_type": "Bearer",
                "expires_in": "3599",
                "access_token": "sp-token",
            }))),
        );
        let sp = ServicePrincipal::new("test-tenant", "test-client", "test-secret")
            .with_authority_host(server.url_str("/"));
        let cred = Credentials::from(sp);
        for _ in 0..3 {
            let headers = cred.headers().await?;
            assert_eq!(
                headers.get(AUTHORIZATION).map(|v| v.to_str().unwrap()),
                Some("Bearer sp-token")
            );
        }
        assert!(!format!("{cred:?}").contains("test-secret"));
        Ok(())
    }

    #[tokio::test]
    async fn service_principal_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/test-tenant/oauth2/token"))
                .respond_with(status_code(400).body("invalid_client")),
        );
        let sp = ServicePrincipal::new("test-tenant", "test-client", "bad-secret")
            .with_authority_host(server.url_str(""));
        let err = sp.headers().await.unwrap_err();
        assert!(
            matches!(&err, CredentialsError::TokenEndpoint { status: 400, body } if body == "invalid_client"),
            "{err:?}"
        );
    }

    #[test]
    fn parse_token_numeric_expiration() -> anyhow::Result<()> {
        let got = parse_token(r#"{"access_token": "abc", "expires_in": 3600}"#)?;
        assert_eq!(got.token, "abc");
        assert!(got.expires_at > Instant::now() + Duration::from_secs(3000));
        Ok(())
    }

    #[test]
    fn parse_token_missing() {
        let err = parse_token(r#"{"expires_in": 3600}"#).unwrap_err();
        assert!(matches!(err, CredentialsError::Parse(_)), "{err:?}");
    }
}
