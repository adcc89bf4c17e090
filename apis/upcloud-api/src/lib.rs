// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! UpCloud API model
//!
//! This crate holds the typed resource model of the UpCloud public API
//! (version 1.3) and one request type per endpoint. It performs no I/O:
//! a request knows its HTTP method, its URL relative to the API base and
//! how to encode its body, and the response types know how to decode
//! themselves. `upcloud-client` executes requests over HTTP.

pub mod request;
pub mod types;

pub use request::{Page, QueryFilter, Request};
pub use types::*;

/// Version segment of the API base URL
pub const API_VERSION: &str = "1.3";
