// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network peering types

use serde::{Deserialize, Serialize};

use super::common::Label;
use super::envelope::{Envelope, EnvelopeList};
use super::ip_address::IpAddressFamily;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkPeeringConfiguredStatus {
    #[default]
    Active,
    Disabled,
}

/// Observed state of a peering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkPeeringState {
    Active,
    Disabled,
    Provisioning,
    PendingPeer,
    PeerNetworkNotFound,
    DeletedPeerNetwork,
    Deleting,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPeeringIpNetwork {
    pub address: String,
    pub family: IpAddressFamily,
}

/// One side of a peering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPeeringNetwork {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_networks: Vec<NetworkPeeringIpNetwork>,
    pub uuid: String,
}

impl NetworkPeeringNetwork {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            ip_networks: Vec::new(),
            uuid: uuid.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPeering {
    pub configured_status: NetworkPeeringConfiguredStatus,
    pub name: String,
    pub network: NetworkPeeringNetwork,
    pub peer_network: NetworkPeeringNetwork,
    pub state: NetworkPeeringState,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Envelope for NetworkPeering {
    const KEY: &'static str = "network_peering";
}

impl EnvelopeList for NetworkPeering {
    const LIST_KEY: &'static str = "network_peerings";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::{decode_list, decode_one};

    const PEERING: &str = r#"{
        "configured_status": "active",
        "name": "Peering A->B",
        "network": {
            "ip_networks": [{"address": "192.168.0.0/24", "family": "IPv4"}],
            "uuid": "03126dc1-a69f-4bc2-8b24-e31c22d64712"
        },
        "peer_network": {
            "ip_networks": [{"address": "192.168.99.0/24", "family": "IPv4"}],
            "uuid": "03585987-bf7d-4544-8e9b-5a1b4d74a333"
        },
        "state": "pending-peer",
        "uuid": "0f7984bc-5d72-4aaf-b587-90e6a8f32efc",
        "labels": [{"key": "env", "value": "dev"}]
    }"#;

    #[test]
    fn test_decode_network_peering() {
        let body = format!(r#"{{"network_peering":{PEERING}}}"#);
        let peering: NetworkPeering = decode_one(body.as_bytes()).unwrap();
        assert_eq!(peering.state, NetworkPeeringState::PendingPeer);
        assert_eq!(peering.network.ip_networks[0].family, IpAddressFamily::IPv4);
        assert_eq!(peering.labels, vec![Label::new("env", "dev")]);
    }

    #[test]
    fn test_decode_network_peerings() {
        let body = format!(r#"{{"network_peerings":{{"network_peering":[{PEERING}]}}}}"#);
        let peerings: Vec<NetworkPeering> = decode_list(body.as_bytes()).unwrap();
        assert_eq!(peerings.len(), 1);
        assert_eq!(
            peerings[0].configured_status,
            NetworkPeeringConfiguredStatus::Active
        );
    }
}
