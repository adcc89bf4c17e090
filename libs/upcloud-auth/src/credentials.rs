// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Resolved API credentials

use std::fmt;

use strum::{Display, EnumString};

/// Where a credential value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    Configuration,
    Environment,
    Keyring,
}

/// Authentication scheme a credential maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CredentialsType {
    /// HTTP Basic with username and password
    Basic,
    /// `Authorization: Bearer <token>`
    Token,
}

/// Username/password pair or API token
///
/// Values built by callers carry no [`Source`]; the resolver tags the value
/// it returns. After resolution at most one of the two schemes is populated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    token: String,
    source: Option<Source>,
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> Option<Source> {
        self.source
    }

    /// Scheme in effect, `None` while the value is incomplete
    pub fn kind(&self) -> Option<CredentialsType> {
        if !self.token.is_empty() {
            Some(CredentialsType::Token)
        } else if !self.username.is_empty() && !self.password.is_empty() {
            Some(CredentialsType::Basic)
        } else {
            None
        }
    }

    /// True when either scheme is complete
    pub fn is_defined(&self) -> bool {
        self.kind().is_some()
    }

    /// Drop the basic fields when a token is present
    pub(crate) fn normalized(mut self) -> Self {
        if !self.token.is_empty() {
            self.username.clear();
            self.password.clear();
        }
        self
    }

    pub(crate) fn tagged(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub(crate) fn fill_username(&mut self, value: String) {
        if self.username.is_empty() {
            self.username = value;
        }
    }

    pub(crate) fn fill_password(&mut self, value: String) {
        if self.password.is_empty() {
            self.password = value;
        }
    }

    pub(crate) fn fill_token(&mut self, value: String) {
        if self.token.is_empty() {
            self.token = value;
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(value: &str) -> &'static str {
            if value.is_empty() { "" } else { "[REDACTED]" }
        }
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &mask(&self.password))
            .field("token", &mask(&self.token))
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Credentials::default().kind(), None);
        assert_eq!(Credentials::default().with_username("u").kind(), None);
        assert_eq!(
            Credentials::basic("u", "p").kind(),
            Some(CredentialsType::Basic)
        );
        assert_eq!(
            Credentials::basic("u", "p").with_token("t").kind(),
            Some(CredentialsType::Token)
        );
    }

    #[test]
    fn test_normalized_clears_basic_fields() {
        let creds = Credentials::basic("u", "p").with_token("t").normalized();
        assert_eq!(creds.username(), "");
        assert_eq!(creds.password(), "");
        assert_eq!(creds.token(), "t");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", Credentials::basic("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Keyring.to_string(), "keyring");
        assert_eq!(CredentialsType::Token.to_string(), "token");
    }
}
