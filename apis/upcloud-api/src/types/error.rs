// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! API error payloads
//!
//! Legacy endpoints answer failures with
//! `{"error":{"error_code":"...","error_message":"..."}}`; newer endpoints
//! use RFC 7807 problem documents.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::envelope::Envelope;

pub const ERROR_CODE_AUTHENTICATION_FAILED: &str = "AUTHENTICATION_FAILED";
pub const ERROR_CODE_RESOURCE_ALREADY_EXISTS: &str = "ERROR_RESOURCE_ALREADY_EXISTS";
pub const ERROR_CODE_RESOURCE_NOT_FOUND: &str = "ERROR_RESOURCE_NOT_FOUND";
pub const ERROR_CODE_NOT_FOUND: &str = "NOT_FOUND";

/// Legacy error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    /// Upper-snake error code, e.g. `SERVER_NOT_FOUND`
    pub error_code: String,
    pub error_message: String,
}

impl Envelope for Error {
    const KEY: &'static str = "error";
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        code_is_not_found(&self.error_code)
    }

    pub fn is_already_exists(&self) -> bool {
        code_is_already_exists(&self.error_code)
    }

    pub fn is_authentication_failed(&self) -> bool {
        self.error_code == ERROR_CODE_AUTHENTICATION_FAILED
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error_message, self.error_code)
    }
}

/// One rejected request parameter of a [`Problem`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInvalidParam {
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

/// RFC 7807 problem document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Type URI; the error code is its fragment
    #[serde(rename = "type")]
    pub problem_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_params: Vec<ProblemInvalidParam>,
}

impl Problem {
    /// The part of the type URI after `#`, or the whole URI without one
    pub fn error_code(&self) -> &str {
        match self.problem_type.rsplit_once('#') {
            Some((_, code)) => code,
            None => &self.problem_type,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404 || code_is_not_found(self.error_code())
    }

    pub fn is_already_exists(&self) -> bool {
        self.status == 409 || code_is_already_exists(self.error_code())
    }

    pub fn is_authentication_failed(&self) -> bool {
        self.status == 401 || self.error_code().ends_with(ERROR_CODE_AUTHENTICATION_FAILED)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {}, status: {}", self.title, self.error_code(), self.status)?;
        if let Some(id) = self.correlation_id.as_deref().filter(|id| !id.is_empty()) {
            write!(f, ", correlation id: {id}")?;
        }
        f.write_str(")")?;
        for param in &self.invalid_params {
            write!(f, "; {}: {}", param.name, param.reason)?;
        }
        Ok(())
    }
}

fn code_is_not_found(code: &str) -> bool {
    code.ends_with(ERROR_CODE_NOT_FOUND)
}

fn code_is_already_exists(code: &str) -> bool {
    code.ends_with("_EXISTS")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::decode_one;

    const PROBLEM: &str = r#"{
        "type": "https://api.upcloud.com/1.3/errors#ERROR_RESOURCE_ALREADY_EXISTS",
        "title": "Validation error.",
        "status": 400,
        "correlation_id": "01FYVE2ZX7T8JB6P8ASPJ7B2NB",
        "invalid_params": [{"name": "name", "reason": "Name is already in use."}]
    }"#;

    #[test]
    fn test_problem_classification() {
        let problem: Problem = serde_json::from_str(PROBLEM).unwrap();
        assert_eq!(problem.error_code(), ERROR_CODE_RESOURCE_ALREADY_EXISTS);
        assert!(problem.is_already_exists());
        assert!(!problem.is_not_found());
        let text = problem.to_string();
        assert!(text.contains("Validation error."));
        assert!(text.contains("01FYVE2ZX7T8JB6P8ASPJ7B2NB"));
        assert!(text.contains("Name is already in use."));
    }

    #[test]
    fn test_problem_not_found_by_status() {
        let problem: Problem = serde_json::from_str(
            r#"{"type":"https://api.upcloud.com/1.3/errors#ERROR_RESOURCE_NOT_FOUND","title":"Not found.","status":404}"#,
        )
        .unwrap();
        assert!(problem.is_not_found());
        assert!(!problem.is_already_exists());
        assert!(!problem.to_string().contains("correlation id"));
    }

    #[test]
    fn test_legacy_error() {
        let err: Error = decode_one(
            br#"{"error":{"error_code":"SERVER_NOT_FOUND","error_message":"The server 00f8 does not exist."}}"#,
        )
        .unwrap();
        assert!(err.is_not_found());
        assert!(!err.is_authentication_failed());
        assert_eq!(
            err.to_string(),
            "The server 00f8 does not exist. (SERVER_NOT_FOUND)"
        );
    }
}
