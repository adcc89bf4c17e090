// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! UpCloud resource model

pub mod account;
pub mod codec;
pub mod common;
pub mod envelope;
pub mod error;
pub mod file_storage;
pub mod firewall;
pub mod gateway;
pub mod ip_address;
pub mod kubernetes;
pub mod load_balancer;
pub mod managed_database;
pub mod managed_object_storage;
pub mod network;
pub mod network_peering;
pub mod server;
pub mod server_group;
pub mod storage;
pub mod tag;
pub mod zone;

pub use account::*;
pub use common::*;
pub use envelope::{Envelope, EnvelopeList, Wrapped, decode_list, decode_one};
pub use error::*;
pub use file_storage::*;
pub use firewall::*;
pub use gateway::*;
pub use ip_address::*;
pub use kubernetes::*;
pub use load_balancer::*;
pub use managed_database::*;
pub use managed_object_storage::*;
pub use network::*;
pub use network_peering::*;
pub use server::*;
pub use server_group::*;
pub use storage::*;
pub use tag::*;
pub use zone::*;
