// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server firewall rule types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::codec;
use super::envelope::{Envelope, EnvelopeList};
use super::ip_address::IpAddressFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirewallRuleDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirewallRuleAction {
    Accept,
    Reject,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirewallRuleProtocol {
    Tcp,
    Udp,
    Icmp,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// Firewall rule of a server
///
/// `position` is 1-based and assigned by the API in list order when left at
/// zero. Port and address bounds stay strings because the API accepts and
/// returns them verbatim (`""` meaning "any").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub action: FirewallRuleAction,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub destination_address_end: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub destination_address_start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub destination_port_end: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub destination_port_start: String,
    pub direction: FirewallRuleDirection,
    #[serde(
        default,
        deserialize_with = "codec::empty_as_none::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub family: Option<IpAddressFamily>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icmp_type: String,
    #[serde(default, with = "codec::quoted", skip_serializing_if = "is_zero")]
    pub position: u32,
    #[serde(
        default,
        deserialize_with = "codec::empty_as_none::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub protocol: Option<FirewallRuleProtocol>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_address_end: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_address_start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_port_end: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_port_start: String,
}

impl FirewallRule {
    /// Rule with the given direction and action and everything else open
    pub fn new(direction: FirewallRuleDirection, action: FirewallRuleAction) -> Self {
        Self {
            action,
            comment: String::new(),
            destination_address_end: String::new(),
            destination_address_start: String::new(),
            destination_port_end: String::new(),
            destination_port_start: String::new(),
            direction,
            family: None,
            icmp_type: String::new(),
            position: 0,
            protocol: None,
            source_address_end: String::new(),
            source_address_start: String::new(),
            source_port_end: String::new(),
            source_port_start: String::new(),
        }
    }
}

impl Envelope for FirewallRule {
    const KEY: &'static str = "firewall_rule";
}

impl EnvelopeList for FirewallRule {
    const LIST_KEY: &'static str = "firewall_rules";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::decode_one;

    #[test]
    fn test_decode_single_rule() {
        let body = br#"{
            "firewall_rule": {
                "action": "accept",
                "comment": "Allow HTTP from anywhere",
                "destination_port_end": "80",
                "destination_port_start": "80",
                "direction": "in",
                "family": "IPv4",
                "icmp_type": "",
                "position": "1",
                "protocol": "tcp",
                "source_address_end": "",
                "source_address_start": ""
            }
        }"#;
        let rule: FirewallRule = decode_one(body).unwrap();
        assert_eq!(rule.position, 1);
        assert_eq!(rule.protocol, Some(FirewallRuleProtocol::Tcp));
        assert_eq!(rule.family, Some(IpAddressFamily::IPv4));
        assert_eq!(rule.destination_port_start, "80");
    }

    #[test]
    fn test_unset_position_is_omitted() {
        let rule = FirewallRule::new(FirewallRuleDirection::In, FirewallRuleAction::Drop);
        let body = serde_json::to_string(&rule).unwrap();
        assert_eq!(body, r#"{"action":"drop","direction":"in"}"#);
    }

    #[test]
    fn test_empty_protocol_is_none() {
        let rule: FirewallRule =
            serde_json::from_str(r#"{"action":"drop","direction":"in","protocol":"","family":""}"#)
                .unwrap();
        assert_eq!(rule.protocol, None);
        assert_eq!(rule.family, None);
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(FirewallRuleAction::Reject.to_string(), "reject");
        assert_eq!(
            "out".parse::<FirewallRuleDirection>().unwrap(),
            FirewallRuleDirection::Out
        );
    }
}
