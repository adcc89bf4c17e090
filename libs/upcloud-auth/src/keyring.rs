// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! System keyring access
//!
//! Credentials live under the service name [`KEYRING_SERVICE`]. A password
//! is stored under the account username; an API token is stored under the
//! empty username.

use crate::error::AuthError;

/// Service name of UpCloud entries in the platform secret store
pub const KEYRING_SERVICE: &str = "UpCloud";

/// Username of the entry holding an API token
pub const TOKEN_USER: &str = "";

/// Read-only view of a secret store
pub trait Keyring {
    /// Secret stored for `user` under `service`, `Ok(None)` when absent
    fn get(&self, service: &str, user: &str) -> Result<Option<String>, AuthError>;
}

/// Platform keyring (macOS Keychain, Windows Credential Manager or the
/// Linux kernel keyutils, depending on enabled features)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemKeyring;

impl Keyring for SystemKeyring {
    fn get(&self, service: &str, user: &str) -> Result<Option<String>, AuthError> {
        let entry =
            ::keyring::Entry::new(service, user).map_err(|e| AuthError::Keyring(e.to_string()))?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(::keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AuthError::Keyring(e.to_string())),
        }
    }
}

impl<K: Keyring + ?Sized> Keyring for &K {
    fn get(&self, service: &str, user: &str) -> Result<Option<String>, AuthError> {
        (**self).get(service, user)
    }
}
