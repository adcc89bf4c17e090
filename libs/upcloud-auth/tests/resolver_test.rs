// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Credential precedence across configuration, environment and keyring

use std::cell::RefCell;
use std::collections::HashMap;

use pretty_assertions::assert_eq;
use serial_test::serial;
use upcloud_auth::{
    AuthError, Credentials, CredentialsType, ENV_PASSWORD, ENV_TOKEN, ENV_USERNAME, Keyring,
    Resolver, Source,
};

/// In-memory keyring that records every lookup
#[derive(Default)]
struct FakeKeyring {
    entries: HashMap<String, String>,
    failing: Vec<String>,
    lookups: RefCell<Vec<String>>,
}

impl FakeKeyring {
    fn with_entry(mut self, user: &str, secret: &str) -> Self {
        self.entries.insert(user.to_string(), secret.to_string());
        self
    }

    fn failing_for(mut self, user: &str) -> Self {
        self.failing.push(user.to_string());
        self
    }
}

impl Keyring for FakeKeyring {
    fn get(&self, service: &str, user: &str) -> Result<Option<String>, AuthError> {
        assert_eq!(service, "UpCloud");
        self.lookups.borrow_mut().push(user.to_string());
        if self.failing.iter().any(|u| u == user) {
            return Err(AuthError::Keyring("locked".to_string()));
        }
        Ok(self.entries.get(user).cloned())
    }
}

/// Set the credential variables for the duration of `f`
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let names = [ENV_USERNAME, ENV_PASSWORD, ENV_TOKEN];
    let saved: Vec<_> = names.iter().map(|n| (*n, std::env::var(n).ok())).collect();
    // SAFETY: tests touching the environment are serialized with #[serial]
    unsafe {
        for name in names {
            std::env::remove_var(name);
        }
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
    }
    let result = f();
    // SAFETY: as above, restoring the original values
    unsafe {
        for (name, value) in saved {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }
    result
}

#[test]
#[serial]
fn environment_token_wins_over_basic() {
    let resolved = with_env(
        &[
            (ENV_USERNAME, "override_user"),
            (ENV_PASSWORD, "override_pass"),
            (ENV_TOKEN, "unittest_token"),
        ],
        || Resolver::new(FakeKeyring::default()).resolve(Credentials::default()),
    )
    .unwrap();

    assert_eq!(resolved.username(), "");
    assert_eq!(resolved.password(), "");
    assert_eq!(resolved.token(), "unittest_token");
    assert_eq!(resolved.source(), Some(Source::Environment));
    assert_eq!(resolved.kind(), Some(CredentialsType::Token));
}

#[test]
#[serial]
fn configuration_wins_over_environment() {
    let resolved = with_env(
        &[
            (ENV_USERNAME, "override_user"),
            (ENV_PASSWORD, "override_pass"),
            (ENV_TOKEN, "unittest_token"),
        ],
        || Resolver::new(FakeKeyring::default()).resolve(Credentials::basic("u", "p")),
    )
    .unwrap();

    assert_eq!(resolved.username(), "u");
    assert_eq!(resolved.password(), "p");
    assert_eq!(resolved.token(), "");
    assert_eq!(resolved.source(), Some(Source::Configuration));
    assert_eq!(resolved.kind(), Some(CredentialsType::Basic));
}

#[test]
#[serial]
fn environment_fills_only_missing_fields() {
    let resolved = with_env(&[(ENV_USERNAME, "env_user"), (ENV_PASSWORD, "env_pass")], || {
        Resolver::new(FakeKeyring::default())
            .resolve(Credentials::default().with_username("caller_user"))
    })
    .unwrap();

    assert_eq!(resolved.username(), "caller_user");
    assert_eq!(resolved.password(), "env_pass");
    assert_eq!(resolved.source(), Some(Source::Environment));
}

#[test]
fn keyring_password_is_looked_up_by_username() {
    let keyring = FakeKeyring::default()
        .with_entry("alice", "s3cret")
        .with_entry("", "keyring_token");
    let resolver = Resolver::new(&keyring).with_env(|_| Err(std::env::VarError::NotPresent));

    let resolved = resolver
        .resolve(Credentials::default().with_username("alice"))
        .unwrap();

    assert_eq!(resolved.username(), "alice");
    assert_eq!(resolved.password(), "s3cret");
    assert_eq!(resolved.source(), Some(Source::Keyring));
    assert_eq!(*keyring.lookups.borrow(), vec!["alice".to_string()]);
}

#[test]
fn keyring_falls_back_to_token_when_password_lookup_fails() {
    let keyring = FakeKeyring::default()
        .failing_for("alice")
        .with_entry("", "keyring_token");
    let resolver = Resolver::new(&keyring).with_env(|_| Err(std::env::VarError::NotPresent));

    let resolved = resolver
        .resolve(Credentials::default().with_username("alice"))
        .unwrap();

    assert_eq!(resolved.username(), "");
    assert_eq!(resolved.token(), "keyring_token");
    assert_eq!(resolved.kind(), Some(CredentialsType::Token));
    assert_eq!(resolved.source(), Some(Source::Keyring));
    assert_eq!(
        *keyring.lookups.borrow(),
        vec!["alice".to_string(), String::new()]
    );
}

#[test]
fn keyring_without_username_reads_token_entry_only() {
    let keyring = FakeKeyring::default().with_entry("", "keyring_token");
    let resolver = Resolver::new(&keyring).with_env(|_| Err(std::env::VarError::NotPresent));

    let resolved = resolver.resolve(Credentials::default()).unwrap();

    assert_eq!(resolved.token(), "keyring_token");
    assert_eq!(*keyring.lookups.borrow(), vec![String::new()]);
}

#[test]
fn empty_sources_report_not_found() {
    let resolver = Resolver::new(FakeKeyring::default())
        .with_env(|_| Err(std::env::VarError::NotPresent));

    let err = resolver.resolve(Credentials::default()).unwrap_err();
    assert!(matches!(err, AuthError::CredentialsNotFound { .. }));
}
