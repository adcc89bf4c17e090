// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IP address types

use serde::{Deserialize, Serialize};

use super::common::Boolean;
use super::envelope::{Envelope, EnvelopeList};

/// Address family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpAddressFamily {
    #[serde(rename = "IPv4")]
    IPv4,
    #[serde(rename = "IPv6")]
    IPv6,
}

/// Network access level, shared by IP addresses, interfaces and networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Public,
    Utility,
    Private,
    #[serde(other)]
    Unknown,
}

/// IP address assigned to an account or a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<NetworkType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<IpAddressFamily>,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub part_of_plan: Boolean,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ptr_record: String,
    /// UUID of the server the address is attached to
    #[serde(default, rename = "server", skip_serializing_if = "String::is_empty")]
    pub server_uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mac: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub floating: Boolean,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub release_policy: String,
}

impl Envelope for IpAddress {
    const KEY: &'static str = "ip_address";
}

impl EnvelopeList for IpAddress {
    const LIST_KEY: &'static str = "ip_addresses";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::decode_list;

    #[test]
    fn test_decode_ip_addresses() {
        let body = br#"{
            "ip_addresses": {
                "ip_address": [
                    {"access":"utility","address":"10.1.0.101","family":"IPv4","ptr_record":"","server":"0053cd80-5945-4105-9081-11192806a8f7"},
                    {"access":"public","address":"2a04:3540:1000:310:a0bd:4ff:fe17:3a11","family":"IPv6","part_of_plan":"no","ptr_record":"x.upcloud.host","server":"0053cd80-5945-4105-9081-11192806a8f7","floating":"no","zone":"fi-hel1"}
                ]
            }
        }"#;
        let addrs: Vec<IpAddress> = decode_list(body).unwrap();
        assert_eq!(addrs.len(), 2);
        assert_eq!(addrs[0].access, Some(NetworkType::Utility));
        assert_eq!(addrs[0].family, Some(IpAddressFamily::IPv4));
        assert_eq!(addrs[0].floating, Boolean::Unset);
        assert_eq!(addrs[1].family, Some(IpAddressFamily::IPv6));
        assert_eq!(addrs[1].floating, Boolean::False);
        assert_eq!(addrs[1].server_uuid, "0053cd80-5945-4105-9081-11192806a8f7");
    }
}
