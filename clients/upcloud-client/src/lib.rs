// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! UpCloud API Client Library
//!
//! This client provides typed access to the UpCloud public API (1.3).
//! Every endpoint is a request type in [`upcloud_api::request`]; the
//! [`Client`] sends it, classifies failures into [`Error`] and decodes the
//! response, unwrapping the envelope object the older endpoints use.
//!
//! ## Usage
//!
//! ### Credentials from the environment (Recommended)
//!
//! `UPCLOUD_USERNAME` / `UPCLOUD_PASSWORD` or `UPCLOUD_TOKEN` are read
//! first, then the system keyring:
//!
//! ```ignore
//! use upcloud_client::Client;
//! use upcloud_client::upcloud_api::request::GetServersRequest;
//!
//! let client = Client::from_env().await?;
//! let servers = client.get_servers(&GetServersRequest::default()).await?;
//! ```
//!
//! ### Explicit configuration
//!
//! ```ignore
//! use std::time::Duration;
//! use upcloud_client::Client;
//! use upcloud_client::upcloud_auth::Credentials;
//!
//! let client = Client::builder(Credentials::from_token("ucat_..."))
//!     .timeout(Duration::from_secs(30))
//!     .user_agent("my-tool/1.0")
//!     .build()?;
//! ```
//!
//! ### Waiting for state changes
//!
//! Mutations return before the platform has finished; the `wait_for_*`
//! methods poll until the resource reaches the requested state:
//!
//! ```ignore
//! use std::time::Duration;
//! use upcloud_client::CancellationToken;
//! use upcloud_client::upcloud_api::ServerState;
//!
//! let cancel = CancellationToken::new();
//! client
//!     .wait_for_server_state(&uuid, ServerState::Started, Duration::from_secs(600), &cancel)
//!     .await?;
//! ```
//!
//! ### Debugging
//!
//! With `UPCLOUD_DEBUG=1` (or [`ClientBuilder::debug`]) every request and
//! response is written to the `upcloud_client::dump` tracing target with
//! the `Authorization` header redacted.

mod client;
mod dump;
pub mod error;
mod service;
pub mod wait;

pub use client::{
    Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL, ENV_BASE_URL, ENV_DEBUG,
    base_url_from_override, default_user_agent,
};
pub use error::{ApiError, ApiProblem, Error, Result, WaitError};
pub use wait::WaitState;

pub use tokio_util::sync::CancellationToken;

// Re-export the model and credential crates for convenience
pub use upcloud_api;
pub use upcloud_auth;
