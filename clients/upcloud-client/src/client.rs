// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP transport
//!
//! [`Client`] dispatches one [`Request`] at a time: it renders the URL and
//! body, attaches the JSON and authorization headers, and turns non-2xx
//! responses into [`Error`]s. It never retries and keeps no per-request
//! state, so a single client can be shared by any number of tasks.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::HeaderValue;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use upcloud_api::{Envelope, EnvelopeList, Request};
use upcloud_auth::{AuthError, Credentials, CredentialsType};

use crate::dump;
use crate::error::{Error, Result};

/// Production API endpoint, including the version prefix
pub const DEFAULT_BASE_URL: &str = "https://api.upcloud.com/1.3";

/// Base URL override, honored only when it is an absolute http(s) URL
pub const ENV_BASE_URL: &str = "UPCLOUD_DEBUG_API_BASE_URL";

/// Enables the request/response dump (`1`, `true` or `yes`)
pub const ENV_DEBUG: &str = "UPCLOUD_DEBUG";

/// Delay between reads while a waiter polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

const JSON: &str = "application/json";

/// `User-Agent` sent when the caller does not set one
pub fn default_user_agent() -> String {
    format!("upcloud-rust-api/{}", env!("CARGO_PKG_VERSION"))
}

/// Base URL to use when the caller does not set one
///
/// A malformed override is ignored without complaint.
pub fn base_url_from_override(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return DEFAULT_BASE_URL.to_string();
    };
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
            value.trim_end_matches('/').to_string()
        }
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

fn debug_from_env(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Builder for [`Client`]
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    credentials: Credentials,
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Duration,
    http: Option<reqwest::Client>,
    debug: Option<bool>,
    poll_interval: Option<Duration>,
}

impl ClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Default::default()
        }
    }

    /// API endpoint including the version prefix, e.g. `https://api.upcloud.com/1.3`
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Per-request timeout; [`Duration::ZERO`] leaves requests unbounded
    ///
    /// Ignored when a caller-supplied HTTP client is used.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use an existing `reqwest` client and its connection pool
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Dump requests and responses, overriding `UPCLOUD_DEBUG`
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Delay between reads in the state waiters
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => {
                // Fails only when a provider is already installed
                let _ = rustls::crypto::ring::default_provider().install_default();
                let mut builder = reqwest::Client::builder();
                if !self.timeout.is_zero() {
                    builder = builder.timeout(self.timeout);
                }
                builder.build()?
            }
        };

        let base_url = match self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => base_url_from_override(env_var(ENV_BASE_URL).as_deref()),
        };

        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);

        let authorization = authorization_header(&self.credentials)?;
        if authorization.is_none() {
            warn!("building UpCloud client without credentials; requests will be unauthenticated");
        }

        let dump = self
            .debug
            .unwrap_or_else(|| debug_from_env(env_var(ENV_DEBUG).as_deref()));

        debug!(
            base_url = %base_url,
            kind = ?self.credentials.kind(),
            source = ?self.credentials.source(),
            dump,
            "UpCloud client configured"
        );

        Ok(Client {
            http,
            base_url,
            user_agent,
            authorization,
            credentials: self.credentials,
            debug: dump,
            poll_interval: self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
        })
    }
}

fn authorization_header(credentials: &Credentials) -> Result<Option<HeaderValue>> {
    let value = match credentials.kind() {
        Some(CredentialsType::Basic) => {
            let pair = format!("{}:{}", credentials.username(), credentials.password());
            format!("Basic {}", STANDARD.encode(pair.as_bytes()))
        }
        Some(CredentialsType::Token) => format!("Bearer {}", credentials.token()),
        None => return Ok(None),
    };
    let mut header = HeaderValue::from_str(&value).map_err(|_| {
        Error::Credentials(AuthError::InvalidEnvironment {
            name: "credentials".to_string(),
            reason: "contain characters that cannot be sent in an HTTP header".to_string(),
        })
    })?;
    header.set_sensitive(true);
    Ok(Some(header))
}

/// UpCloud API client
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    authorization: Option<HeaderValue>,
    credentials: Credentials,
    debug: bool,
    pub(crate) poll_interval: Duration,
}

impl Client {
    /// Client with default settings for already resolved credentials
    pub fn new(credentials: Credentials) -> Result<Self> {
        ClientBuilder::new(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    /// Resolve credentials from the environment and keyring, then build a
    /// client with default settings
    pub async fn from_env() -> Result<Self> {
        let credentials =
            tokio::task::spawn_blocking(|| upcloud_auth::resolve(Credentials::default()))
                .await
                .map_err(|e| Error::Credentials(AuthError::Keyring(e.to_string())))??;
        Self::new(credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The underlying HTTP client
    pub fn inner(&self) -> &reqwest::Client {
        &self.http
    }

    /// Dispatch `request` and return the raw body of a 2xx response
    pub async fn execute<R: Request>(&self, request: &R) -> Result<Vec<u8>> {
        let body = request.body().map_err(Error::Request)?;
        let url = format!("{}{}", self.base_url, request.relative_url());

        let mut builder = self
            .http
            .request(R::METHOD, url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .header(USER_AGENT, &self.user_agent);
        if let Some(authorization) = &self.authorization {
            builder = builder.header(AUTHORIZATION, authorization.clone());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let http_request = builder.build()?;

        if self.debug {
            dump::request(&http_request);
        }
        let method = http_request.method().clone();
        let url = http_request.url().clone();

        let response = self.http.execute(http_request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        debug!(%method, %url, status = status.as_u16(), len = bytes.len(), "UpCloud API response");
        if self.debug {
            dump::response(status, &headers, &bytes);
        }

        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            Err(Error::from_response(status, &headers, &bytes))
        }
    }

    /// Dispatch and discard the response body
    pub(crate) async fn send<R: Request>(&self, request: &R) -> Result<()> {
        self.execute(request).await.map(drop)
    }

    /// Dispatch and decode a plain JSON body
    pub(crate) async fn json<R: Request, T: DeserializeOwned>(&self, request: &R) -> Result<T> {
        let body = self.execute(request).await?;
        decode(body, |b| serde_json::from_slice(b))
    }

    /// Dispatch and decode a `{"<key>":{...}}` body
    pub(crate) async fn one<R: Request, T: Envelope>(&self, request: &R) -> Result<T> {
        let body = self.execute(request).await?;
        decode(body, upcloud_api::decode_one::<T>)
    }

    /// Dispatch and decode a `{"<list>":{"<key>":[...]}}` body
    pub(crate) async fn list<R: Request, T: EnvelopeList>(&self, request: &R) -> Result<Vec<T>> {
        let body = self.execute(request).await?;
        decode(body, upcloud_api::decode_list::<T>)
    }
}

pub(crate) fn decode<T>(
    body: Vec<u8>,
    f: impl FnOnce(&[u8]) -> std::result::Result<T, serde_json::Error>,
) -> Result<T> {
    f(&body).map_err(|source| Error::Decode {
        source,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None => DEFAULT_BASE_URL; "unset")]
    #[test_case(Some("") => DEFAULT_BASE_URL; "empty")]
    #[test_case(Some("http://localhost:8080/1.3") => "http://localhost:8080/1.3"; "http")]
    #[test_case(Some("https://api.example.com/1.3/") => "https://api.example.com/1.3"; "trailing slash")]
    #[test_case(Some("api.example.com/1.3") => DEFAULT_BASE_URL; "relative")]
    #[test_case(Some("ftp://example.com") => DEFAULT_BASE_URL; "wrong scheme")]
    #[test_case(Some("http://") => DEFAULT_BASE_URL; "no host")]
    fn test_base_url_override(value: Option<&str>) -> String {
        base_url_from_override(value)
    }

    #[test_case(Some("1") => true)]
    #[test_case(Some("TRUE") => true)]
    #[test_case(Some("yes") => true)]
    #[test_case(Some("0") => false)]
    #[test_case(Some("") => false)]
    #[test_case(None => false)]
    fn test_debug_from_env(value: Option<&str>) -> bool {
        debug_from_env(value)
    }

    #[test]
    fn test_authorization_header() {
        let basic = authorization_header(&Credentials::basic("user", "pass"))
            .unwrap()
            .unwrap();
        assert_eq!(basic.to_str().unwrap(), "Basic dXNlcjpwYXNz");
        assert!(basic.is_sensitive());

        let token = authorization_header(&Credentials::from_token("ucat_01")).unwrap().unwrap();
        assert_eq!(token.to_str().unwrap(), "Bearer ucat_01");

        assert!(authorization_header(&Credentials::default()).unwrap().is_none());
    }

    #[test]
    fn test_build_records_dump_setting() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("upcloud_client=debug")
            .with_test_writer()
            .try_init();

        let on = Client::builder(Credentials::basic("user", "pass"))
            .debug(true)
            .build()
            .unwrap();
        assert!(on.debug);

        let off = Client::builder(Credentials::basic("user", "pass"))
            .debug(false)
            .build()
            .unwrap();
        assert!(!off.debug);
    }

    #[test]
    fn test_default_user_agent() {
        assert!(default_user_agent().starts_with("upcloud-rust-api/"));
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let err = decode::<u32>(b"not json".to_vec(), |b| serde_json::from_slice(b)).unwrap_err();
        let Error::Decode { body, .. } = err else {
            panic!("expected decode error");
        };
        assert_eq!(body, "not json");
    }
}
