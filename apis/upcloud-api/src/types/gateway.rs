// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network gateway (NAT and VPN) types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::common::{ConfiguredStatus, Label};

pub type GatewayConfiguredStatus = ConfiguredStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GatewayOperationalState {
    Pending,
    SetupServer,
    SetupNetwork,
    SetupGw,
    SetupDns,
    Checkup,
    Running,
    DeleteDns,
    DeleteNetwork,
    DeleteServer,
    DeleteService,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayFeature {
    Nat,
    Vpn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayRouter {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayAddress {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayRoute {
    pub name: String,
    /// `static`
    #[serde(rename = "type")]
    pub route_type: String,
    pub static_network: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTunnelLocalAddress {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTunnelRemoteAddress {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTunnelIpsecAuth {
    /// `psk`
    pub authentication: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub psk: String,
}

/// IPsec settings of a tunnel; unset values use the service defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTunnelIpsec {
    pub authentication: GatewayTunnelIpsecAuth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_rekey_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpd_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpd_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ike_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rekey_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase1_algorithms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase1_integrity_algorithms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase1_dh_group_numbers: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase2_algorithms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase2_integrity_algorithms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase2_dh_group_numbers: Vec<u32>,
}

impl GatewayTunnelIpsec {
    pub fn psk(psk: impl Into<String>) -> Self {
        Self {
            authentication: GatewayTunnelIpsecAuth {
                authentication: "psk".to_string(),
                psk: psk.into(),
            },
            child_rekey_time: None,
            dpd_delay: None,
            dpd_timeout: None,
            ike_lifetime: None,
            rekey_time: None,
            phase1_algorithms: Vec::new(),
            phase1_integrity_algorithms: Vec::new(),
            phase1_dh_group_numbers: Vec::new(),
            phase2_algorithms: Vec::new(),
            phase2_integrity_algorithms: Vec::new(),
            phase2_dh_group_numbers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTunnel {
    pub name: String,
    pub local_address: GatewayTunnelLocalAddress,
    pub remote_address: GatewayTunnelRemoteAddress,
    pub ipsec: GatewayTunnelIpsec,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operational_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Site-to-site VPN connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConnection {
    pub name: String,
    /// `ipsec`
    #[serde(rename = "type")]
    pub connection_type: String,
    #[serde(default)]
    pub local_routes: Vec<GatewayRoute>,
    #[serde(default)]
    pub remote_routes: Vec<GatewayRoute>,
    #[serde(default)]
    pub tunnels: Vec<GatewayTunnel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gateway {
    pub uuid: String,
    pub name: String,
    pub zone: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub features: Vec<GatewayFeature>,
    #[serde(default)]
    pub routers: Vec<GatewayRouter>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub configured_status: GatewayConfiguredStatus,
    pub operational_state: GatewayOperationalState,
    #[serde(default)]
    pub addresses: Vec<GatewayAddress>,
    #[serde(default)]
    pub connections: Vec<GatewayConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayPlan {
    pub name: String,
    #[serde(default)]
    pub per_gateway_bandwidth_mbps: u32,
    #[serde(default)]
    pub per_gateway_max_connections: u32,
    #[serde(default)]
    pub server_number: u32,
    #[serde(default)]
    pub supported_features: Vec<GatewayFeature>,
    #[serde(default)]
    pub vpn_tunnel_amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTunnelMetrics {
    pub name: String,
    #[serde(default)]
    pub ipsec_sa_state: String,
    #[serde(default)]
    pub ipsec_sa_bytes_in: u64,
    #[serde(default)]
    pub ipsec_sa_bytes_out: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConnectionMetrics {
    pub name: String,
    #[serde(default)]
    pub tunnels: Vec<GatewayTunnelMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayMetrics {
    #[serde(default)]
    pub connections: Vec<GatewayConnectionMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_gateway() {
        let gw: Gateway = serde_json::from_value(json!({
            "configured_status": "started",
            "created_at": "2022-12-01T09:04:08.529138Z",
            "features": ["nat", "vpn"],
            "name": "example-gateway",
            "operational_state": "setup-gw",
            "plan": "advanced",
            "routers": [{"created_at": "2022-12-01T09:04:08.529138Z", "uuid": "0485d477-8d8f-4c97-9bef-731933187538"}],
            "labels": [{"key": "env", "value": "testing"}],
            "addresses": [{"address": "192.0.2.96", "name": "public-ip-1"}],
            "connections": [{
                "name": "example-connection",
                "type": "ipsec",
                "local_routes": [{"name": "local-route", "type": "static", "static_network": "10.0.0.0/24"}],
                "remote_routes": [{"name": "remote-route", "type": "static", "static_network": "10.0.1.0/24"}],
                "tunnels": [{
                    "name": "example-tunnel",
                    "local_address": {"name": "public-ip-1"},
                    "remote_address": {"address": "100.10.0.111"},
                    "ipsec": {"authentication": {"authentication": "psk"}, "child_rekey_time": 1440, "dpd_delay": 30}
                }]
            }],
            "updated_at": "2022-12-01T09:04:08.529138Z",
            "uuid": "10c153e0-12e4-4dea-8748-4f34850ff76d",
            "zone": "fi-hel1"
        }))
        .unwrap();
        assert_eq!(gw.operational_state, GatewayOperationalState::SetupGw);
        assert_eq!(gw.features, vec![GatewayFeature::Nat, GatewayFeature::Vpn]);
        let tunnel = &gw.connections[0].tunnels[0];
        assert_eq!(tunnel.ipsec.child_rekey_time, Some(1440));
        assert_eq!(tunnel.ipsec.dpd_delay, Some(30));
    }
}
