// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request catalogue
//!
//! One type per API operation. Identifier fields are interpolated into
//! the path; every other field belongs to the body. Bodies of the legacy
//! endpoints are wrapped in their envelope key (`{"server":{...}}`), the
//! newer endpoints take the value as is.

use http::Method;
use serde::Serialize;

use crate::types::Wrapped;

pub mod account;
pub mod file_storage;
pub mod filter;
pub mod firewall;
pub mod gateway;
pub mod ip_address;
pub mod kubernetes;
pub mod load_balancer;
pub mod managed_database;
pub mod managed_object_storage;
pub mod network;
pub mod server;
pub mod server_group;
pub mod storage;
pub mod tag;
pub mod zone;

pub use account::*;
pub use file_storage::*;
pub use filter::*;
pub use firewall::*;
pub use gateway::*;
pub use ip_address::*;
pub use kubernetes::*;
pub use load_balancer::*;
pub use managed_database::*;
pub use managed_object_storage::*;
pub use network::*;
pub use server::*;
pub use server_group::*;
pub use storage::*;
pub use tag::*;
pub use zone::*;

/// A single API operation
pub trait Request {
    const METHOD: Method;

    /// Path relative to the API base, starting with `/`, with the query
    /// string already encoded
    fn relative_url(&self) -> String;

    /// JSON request body, `None` for requests without one
    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        Ok(None)
    }
}

/// Encode `value` as a plain JSON body
pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> Result<Option<Vec<u8>>, serde_json::Error> {
    serde_json::to_vec(value).map(Some)
}

/// Encode `value` as `{"<key>": value}`
pub(crate) fn enveloped<T: Serialize + ?Sized>(
    key: &'static str,
    value: &T,
) -> Result<Option<Vec<u8>>, serde_json::Error> {
    json(&Wrapped::new(key, value))
}
