// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client error types
//!
//! Every failure a caller can observe is one [`Error`] variant. Non-2xx
//! responses are classified by their body into the legacy error envelope
//! ([`ApiError`]) or an RFC 7807 problem document ([`ApiProblem`]); the
//! predicate helpers look through both.

use std::fmt;
use std::time::Duration;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, StatusCode};
use serde_json::Value;
use thiserror::Error;
use upcloud_api::types::envelope::unwrap_one;
use upcloud_auth::AuthError;

pub use upcloud_api::types::Problem as ApiProblem;

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Client`](crate::Client) operations
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be dispatched or its response not read
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response carrying the legacy `{"error":{...}}` body
    #[error("{0}")]
    Api(ApiError),

    /// Non-2xx response carrying an RFC 7807 problem document
    #[error("{0}")]
    Problem(ApiProblem),

    /// 2xx response whose body did not have the expected shape
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error(transparent)]
    Credentials(#[from] AuthError),

    #[error(transparent)]
    Wait(#[from] WaitError),

    /// The request value could not be encoded
    #[error("failed to encode request body: {0}")]
    Request(#[source] serde_json::Error),
}

impl Error {
    /// Resource not found, from either error body form or a bare 404
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api(e) => e.is_not_found(),
            Error::Problem(p) => p.is_not_found(),
            _ => false,
        }
    }

    pub fn is_already_exists(&self) -> bool {
        match self {
            Error::Api(e) => e.is_already_exists(),
            Error::Problem(p) => p.is_already_exists(),
            _ => false,
        }
    }

    pub fn is_authentication_failed(&self) -> bool {
        match self {
            Error::Api(e) => e.is_authentication_failed(),
            Error::Problem(p) => p.is_authentication_failed(),
            Error::Credentials(_) => true,
            _ => false,
        }
    }

    /// HTTP status of an API failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            Error::Problem(p) => Some(p.status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Upper-snake error code of an API failure
    ///
    /// For problem documents this is the fragment of the type URI.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Error::Api(e) => Some(e.error.error_code.as_str()).filter(|c| !c.is_empty()),
            Error::Problem(p) => Some(p.error_code()).filter(|c| !c.is_empty()),
            _ => None,
        }
    }

    /// Classify the body of a non-2xx response
    pub(crate) fn from_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Self {
        let is_problem = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with(PROBLEM_CONTENT_TYPE));

        let parsed: Option<Value> = serde_json::from_slice(body).ok();

        if let Some(value) = parsed {
            if !is_problem {
                if let Some(error) = legacy_error(&value) {
                    return Error::Api(ApiError::new(status, error));
                }
            }
            if is_problem || value.get("type").is_some_and(Value::is_string) {
                if let Ok(mut problem) = serde_json::from_value::<ApiProblem>(value) {
                    if problem.status == 0 {
                        problem.status = status.as_u16();
                    }
                    return Error::Problem(problem);
                }
            }
        }

        Error::Api(ApiError::unclassified(status, body))
    }
}

fn legacy_error(value: &Value) -> Option<upcloud_api::Error> {
    if !value.get("error").is_some_and(Value::is_object) {
        return None;
    }
    unwrap_one(value.clone()).ok()
}

/// Failure reported with the legacy error envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub error: upcloud_api::Error,
}

impl ApiError {
    fn new(status: StatusCode, error: upcloud_api::Error) -> Self {
        Self {
            status: status.as_u16(),
            error,
        }
    }

    /// Response that matched neither body form; the raw body becomes the
    /// message
    fn unclassified(status: StatusCode, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body).trim().to_string();
        let message = if text.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            text
        };
        Self {
            status: status.as_u16(),
            error: upcloud_api::Error {
                error_code: String::new(),
                error_message: message,
            },
        }
    }

    pub fn code(&self) -> &str {
        &self.error.error_code
    }

    pub fn message(&self) -> &str {
        &self.error.error_message
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.error.is_not_found()
    }

    pub fn is_already_exists(&self) -> bool {
        self.status == 409 || self.error.is_already_exists()
    }

    pub fn is_authentication_failed(&self) -> bool {
        self.status == 401 || self.error.is_authentication_failed()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.error_code.is_empty() {
            write!(f, "{} (status: {})", self.error.error_message, self.status)
        } else {
            write!(
                f,
                "{} (code: {}, status: {})",
                self.error.error_message, self.error.error_code, self.status
            )
        }
    }
}

/// Outcome of a state waiter other than success
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitError {
    #[error(
        "timed out after {timeout:?} waiting for {resource} {id} to reach state {target} \
         (last observed: {last})"
    )]
    TimedOut {
        resource: &'static str,
        id: String,
        target: String,
        last: String,
        timeout: Duration,
    },

    #[error("cancelled while waiting for {resource} {id} to reach state {target}")]
    Cancelled {
        resource: &'static str,
        id: String,
        target: String,
    },

    #[error("{resource} {id} entered state {state} while waiting for state {target}")]
    Failed {
        resource: &'static str,
        id: String,
        target: String,
        state: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn json_headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_problem_already_exists() {
        let body = br#"{"type":"https://api.upcloud.com/1.3/errors#ERROR_RESOURCE_ALREADY_EXISTS","title":"Validation error.","status":400,"correlation_id":"01FYBN2ZA4Z1VYQ5NBS6XM5XKR"}"#;
        let err = Error::from_response(
            StatusCode::BAD_REQUEST,
            &json_headers("application/problem+json"),
            body,
        );
        assert!(matches!(err, Error::Problem(_)));
        assert!(err.is_already_exists());
        assert!(!err.is_not_found());
        assert_eq!(err.error_code(), Some("ERROR_RESOURCE_ALREADY_EXISTS"));
        assert_eq!(err.status(), Some(400));
        let text = err.to_string();
        assert!(text.contains("Validation error."));
        assert!(text.contains("01FYBN2ZA4Z1VYQ5NBS6XM5XKR"));
    }

    #[test]
    fn test_problem_detected_without_content_type() {
        let body = br#"{"type":"https://developers.upcloud.com/1.3/errors#NOT_FOUND","title":"Resource not found.","status":404}"#;
        let err = Error::from_response(
            StatusCode::NOT_FOUND,
            &json_headers("application/json"),
            body,
        );
        assert!(matches!(err, Error::Problem(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_legacy_error() {
        let body = br#"{"error":{"error_code":"SERVER_NOT_FOUND","error_message":"The server 0000 does not exist."}}"#;
        let err = Error::from_response(
            StatusCode::NOT_FOUND,
            &json_headers("application/json"),
            body,
        );
        let Error::Api(api) = &err else {
            panic!("expected legacy error, got {err:?}");
        };
        assert_eq!(api.code(), "SERVER_NOT_FOUND");
        assert!(err.is_not_found());
        assert!(!err.is_already_exists());
        assert_eq!(
            err.to_string(),
            "The server 0000 does not exist. (code: SERVER_NOT_FOUND, status: 404)"
        );
    }

    #[test]
    fn test_legacy_authentication_failed() {
        let body = br#"{"error":{"error_code":"AUTHENTICATION_FAILED","error_message":"Authentication failed using the given username and password."}}"#;
        let err = Error::from_response(StatusCode::UNAUTHORIZED, &HeaderMap::new(), body);
        assert!(err.is_authentication_failed());
        assert_eq!(err.error_code(), Some("AUTHENTICATION_FAILED"));
    }

    #[test]
    fn test_problem_status_defaults_to_response_status() {
        let body = br#"{"type":"https://api.upcloud.com/1.3/errors#SERVICE_UNAVAILABLE","title":"Try again later."}"#;
        let err = Error::from_response(
            StatusCode::SERVICE_UNAVAILABLE,
            &json_headers("application/problem+json"),
            body,
        );
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_unclassified_body() {
        let err = Error::from_response(
            StatusCode::BAD_GATEWAY,
            &HeaderMap::new(),
            b"<html>bad gateway</html>",
        );
        let Error::Api(api) = &err else {
            panic!("expected fallback error, got {err:?}");
        };
        assert_eq!(api.status, 502);
        assert_eq!(api.message(), "<html>bad gateway</html>");
        assert_eq!(err.error_code(), None);

        let err = Error::from_response(StatusCode::NOT_FOUND, &HeaderMap::new(), b"");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not Found (status: 404)");
    }
}
