// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed operations, one `impl Client` block per API area

mod account;
mod file_storage;
mod firewall;
mod gateway;
mod ip_address;
mod kubernetes;
mod load_balancer;
mod managed_database;
mod managed_object_storage;
mod network;
mod server;
mod server_group;
mod storage;
mod tag;
mod zone;
