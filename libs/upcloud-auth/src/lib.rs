// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! UpCloud API credential resolution
//!
//! The UpCloud API accepts either HTTP Basic authentication with an
//! account username and password, or a bearer API token. This crate turns
//! whatever the caller has at hand into exactly one of the two:
//!
//! - explicit configuration ([`Credentials::basic`], [`Credentials::from_token`])
//! - `UPCLOUD_USERNAME` / `UPCLOUD_PASSWORD` / `UPCLOUD_TOKEN`
//! - the system keyring, service `UpCloud`
//!
//! # Example
//!
//! ```ignore
//! use upcloud_auth::{Credentials, resolve};
//!
//! let creds = resolve(Credentials::default())?;
//! println!("using {:?} credentials from {:?}", creds.kind(), creds.source());
//! ```
//!
//! Keyring lookups are blocking; async callers should resolve inside
//! `tokio::task::spawn_blocking`.

pub mod credentials;
pub mod error;
pub mod keyring;
pub mod resolver;

pub use credentials::{Credentials, CredentialsType, Source};
pub use error::AuthError;
pub use self::keyring::{KEYRING_SERVICE, Keyring, SystemKeyring};
pub use resolver::{ENV_PASSWORD, ENV_TOKEN, ENV_USERNAME, Resolver, resolve};
