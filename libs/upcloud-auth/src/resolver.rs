// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Credential resolution
//!
//! Sources are consulted in order and the first complete value wins:
//!
//! 1. The caller supplied value
//! 2. `UPCLOUD_USERNAME`, `UPCLOUD_PASSWORD` and `UPCLOUD_TOKEN`, filling
//!    only the fields the caller left empty
//! 3. The system keyring: the password of the known username first, then
//!    the token entry
//!
//! A token always takes precedence over a username/password pair.

use std::env::VarError;

use tracing::debug;

use crate::credentials::{Credentials, Source};
use crate::error::AuthError;
use crate::keyring::{KEYRING_SERVICE, Keyring, SystemKeyring, TOKEN_USER};

pub const ENV_USERNAME: &str = "UPCLOUD_USERNAME";
pub const ENV_PASSWORD: &str = "UPCLOUD_PASSWORD";
pub const ENV_TOKEN: &str = "UPCLOUD_TOKEN";

type EnvLookup = dyn Fn(&str) -> Result<String, VarError> + Send + Sync;

fn process_env(name: &str) -> Result<String, VarError> {
    std::env::var(name)
}

/// Resolves credentials from the caller, the environment and a keyring
pub struct Resolver<K = SystemKeyring> {
    env: Box<EnvLookup>,
    keyring: K,
}

impl Resolver<SystemKeyring> {
    /// Resolver over the process environment and the platform keyring
    pub fn system() -> Self {
        Self::new(SystemKeyring)
    }
}

impl Default for Resolver<SystemKeyring> {
    fn default() -> Self {
        Self::system()
    }
}

impl<K: Keyring> Resolver<K> {
    pub fn new(keyring: K) -> Self {
        Self {
            env: Box::new(process_env),
            keyring,
        }
    }

    /// Replace the environment lookup, which defaults to [`std::env::var`]
    pub fn with_env<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError> + Send + Sync + 'static,
    {
        self.env = Box::new(env);
        self
    }

    pub fn resolve(&self, caller: Credentials) -> Result<Credentials, AuthError> {
        if caller.is_defined() {
            return Ok(self.found(caller, Source::Configuration));
        }

        let mut creds = caller;
        if let Some(value) = self.var(ENV_USERNAME)? {
            creds.fill_username(value);
        }
        if let Some(value) = self.var(ENV_PASSWORD)? {
            creds.fill_password(value);
        }
        if let Some(value) = self.var(ENV_TOKEN)? {
            creds.fill_token(value);
        }
        if creds.is_defined() {
            return Ok(self.found(creds, Source::Environment));
        }

        if !creds.username().is_empty() {
            match self.keyring.get(KEYRING_SERVICE, creds.username()) {
                Ok(Some(password)) => {
                    let candidate = creds.clone().with_password(password);
                    if candidate.is_defined() {
                        return Ok(self.found(candidate, Source::Keyring));
                    }
                }
                Ok(None) => debug!(username = creds.username(), "no keyring password entry"),
                Err(e) => debug!(error = %e, "keyring password lookup failed"),
            }
        }

        match self.keyring.get(KEYRING_SERVICE, TOKEN_USER) {
            Ok(Some(token)) => {
                let candidate = creds.with_token(token);
                if candidate.is_defined() {
                    return Ok(self.found(candidate, Source::Keyring));
                }
            }
            Ok(None) => debug!("no keyring token entry"),
            Err(e) => debug!(error = %e, "keyring token lookup failed"),
        }

        Err(AuthError::CredentialsNotFound {
            service: KEYRING_SERVICE.to_string(),
        })
    }

    fn found(&self, creds: Credentials, source: Source) -> Credentials {
        let creds = creds.normalized().tagged(source);
        debug!(
            source = %source,
            kind = ?creds.kind(),
            "resolved API credentials"
        );
        creds
    }

    fn var(&self, name: &str) -> Result<Option<String>, AuthError> {
        match (self.env)(name) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(AuthError::InvalidEnvironment {
                name: name.to_string(),
                reason: "value is not valid unicode".to_string(),
            }),
        }
    }
}

/// Resolve `caller` against the process environment and the platform
/// keyring
pub fn resolve(caller: Credentials) -> Result<Credentials, AuthError> {
    Resolver::system().resolve(caller)
}
