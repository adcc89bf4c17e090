// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network, router and interface types

use serde::{Deserialize, Serialize};

use super::codec;
use super::common::{Boolean, Label};
use super::envelope::{Envelope, EnvelopeList, seq};
use super::ip_address::{IpAddress, IpAddressFamily, NetworkType};

/// Subnet of a network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpNetwork {
    /// CIDR, e.g. `172.16.0.0/22`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub dhcp: Boolean,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub dhcp_default_route: Boolean,
    #[serde(
        default,
        deserialize_with = "codec::string_list::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dhcp_dns: Vec<String>,
    #[serde(
        default,
        deserialize_with = "codec::string_list::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dhcp_routes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<IpAddressFamily>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gateway: String,
}

/// Server attached to a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkServer {
    #[serde(rename = "uuid")]
    pub server_uuid: String,
    #[serde(default, rename = "title")]
    pub server_title: String,
}

/// Software defined network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default, with = "seq::ip_networks")]
    pub ip_networks: Vec<IpNetwork>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: NetworkType,
    pub uuid: String,
    #[serde(default)]
    pub zone: String,
    /// UUID of the attached router, empty when detached
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub router: String,
    #[serde(default, with = "seq::servers", skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<NetworkServer>,
    #[serde(default, with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Envelope for Network {
    const KEY: &'static str = "network";
}

impl EnvelopeList for Network {
    const LIST_KEY: &'static str = "networks";
}

/// Network attached to a router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterNetwork {
    #[serde(rename = "uuid")]
    pub network_uuid: String,
}

/// Static route of a router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRoute {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub nexthop: String,
    pub route: String,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub route_type: String,
}

/// Router connecting private networks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Router {
    #[serde(default, with = "seq::networks")]
    pub attached_networks: Vec<RouterNetwork>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub router_type: String,
    pub uuid: String,
    #[serde(default, with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_routes: Vec<StaticRoute>,
}

impl Envelope for Router {
    const KEY: &'static str = "router";
}

impl EnvelopeList for Router {
    const LIST_KEY: &'static str = "routers";
}

/// Network interface of a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(with = "codec::lenient")]
    pub index: u32,
    #[serde(default, with = "seq::ip_addresses")]
    pub ip_addresses: Vec<IpAddress>,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub network: String,
    #[serde(rename = "type")]
    pub interface_type: NetworkType,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub bootable: Boolean,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub source_ip_filtering: Boolean,
}

impl Envelope for Interface {
    const KEY: &'static str = "interface";
}

impl EnvelopeList for Interface {
    const LIST_KEY: &'static str = "interfaces";
}

/// Networking configuration of a server, in interface index order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Networking {
    #[serde(default, with = "seq::interfaces")]
    pub interfaces: Vec<Interface>,
}

impl Envelope for Networking {
    const KEY: &'static str = "networking";
}
