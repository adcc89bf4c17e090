// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network gateway requests

use http::Method;
use serde::Serialize;

use super::filter::{Filter, filter_params, with_query};
use super::{Request, json};
use crate::types::{
    GatewayAddress, GatewayConfiguredStatus, GatewayFeature, GatewayRoute,
    GatewayTunnelIpsec, GatewayTunnelLocalAddress, GatewayTunnelRemoteAddress, Label,
};

const BASE: &str = "/gateway";

fn service(uuid: &str) -> String {
    format!("{BASE}/{uuid}")
}

fn connection(service_uuid: &str, name: &str) -> String {
    format!("{}/connections/{name}", service(service_uuid))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayRouterSpec {
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayTunnelSpec {
    pub name: String,
    pub local_address: GatewayTunnelLocalAddress,
    pub remote_address: GatewayTunnelRemoteAddress,
    pub ipsec: GatewayTunnelIpsec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayConnectionSpec {
    pub name: String,
    /// `ipsec`
    #[serde(rename = "type")]
    pub connection_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub local_routes: Vec<GatewayRoute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remote_routes: Vec<GatewayRoute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tunnels: Vec<GatewayTunnelSpec>,
}

#[derive(Debug, Clone, Default)]
pub struct GetGatewaysRequest {
    pub filters: Vec<Filter>,
}

impl Request for GetGatewaysRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query(BASE, filter_params(&self.filters))
    }
}

#[derive(Debug, Clone)]
pub struct GetGatewayRequest {
    pub uuid: String,
}

impl Request for GetGatewayRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetGatewayPlansRequest;

impl Request for GetGatewayPlansRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/plans")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGatewayRequest {
    pub name: String,
    pub zone: String,
    pub features: Vec<GatewayFeature>,
    pub routers: Vec<GatewayRouterSpec>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    pub configured_status: GatewayConfiguredStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<GatewayAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<GatewayConnectionSpec>,
}

impl Request for CreateGatewayRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        BASE.to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyGatewayRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_status: Option<GatewayConfiguredStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<GatewayConnectionSpec>>,
}

impl Request for ModifyGatewayRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteGatewayRequest {
    pub uuid: String,
}

impl Request for DeleteGatewayRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

#[derive(Debug, Clone)]
pub struct GetGatewayMetricsRequest {
    pub uuid: String,
}

impl Request for GetGatewayMetricsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/metrics", service(&self.uuid))
    }
}

// Connections

#[derive(Debug, Clone)]
pub struct GetGatewayConnectionsRequest {
    pub service_uuid: String,
}

impl Request for GetGatewayConnectionsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/connections", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetGatewayConnectionRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for GetGatewayConnectionRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        connection(&self.service_uuid, &self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateGatewayConnectionRequest {
    pub service_uuid: String,
    pub connection: GatewayConnectionSpec,
}

impl Request for CreateGatewayConnectionRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/connections", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.connection)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyGatewayConnectionRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_routes: Option<Vec<GatewayRoute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_routes: Option<Vec<GatewayRoute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnels: Option<Vec<GatewayTunnelSpec>>,
}

impl Request for ModifyGatewayConnectionRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        connection(&self.service_uuid, &self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteGatewayConnectionRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteGatewayConnectionRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        connection(&self.service_uuid, &self.name)
    }
}

// Tunnels

#[derive(Debug, Clone)]
pub struct GetGatewayConnectionTunnelsRequest {
    pub service_uuid: String,
    pub connection_name: String,
}

impl Request for GetGatewayConnectionTunnelsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!(
            "{}/tunnels",
            connection(&self.service_uuid, &self.connection_name)
        )
    }
}

#[derive(Debug, Clone)]
pub struct GetGatewayConnectionTunnelRequest {
    pub service_uuid: String,
    pub connection_name: String,
    pub name: String,
}

impl Request for GetGatewayConnectionTunnelRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!(
            "{}/tunnels/{}",
            connection(&self.service_uuid, &self.connection_name),
            self.name
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateGatewayConnectionTunnelRequest {
    pub service_uuid: String,
    pub connection_name: String,
    pub tunnel: GatewayTunnelSpec,
}

impl Request for CreateGatewayConnectionTunnelRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!(
            "{}/tunnels",
            connection(&self.service_uuid, &self.connection_name)
        )
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.tunnel)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyGatewayConnectionTunnelRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub connection_name: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_address: Option<GatewayTunnelLocalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_address: Option<GatewayTunnelRemoteAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipsec: Option<GatewayTunnelIpsec>,
}

impl Request for ModifyGatewayConnectionTunnelRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!(
            "{}/tunnels/{}",
            connection(&self.service_uuid, &self.connection_name),
            self.name
        )
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteGatewayConnectionTunnelRequest {
    pub service_uuid: String,
    pub connection_name: String,
    pub name: String,
}

impl Request for DeleteGatewayConnectionTunnelRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!(
            "{}/tunnels/{}",
            connection(&self.service_uuid, &self.connection_name),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::FilterLabel;
    use crate::types::ConfiguredStatus;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn body<R: Request>(r: &R) -> Value {
        serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_list_with_label_filter() {
        let r = GetGatewaysRequest {
            filters: vec![FilterLabel::new("env", "prod").into()],
        };
        assert_eq!(r.relative_url(), "/gateway?label=env%3Dprod");
    }

    #[test]
    fn test_create_with_vpn_tunnel() {
        let r = CreateGatewayRequest {
            name: "gw".to_string(),
            zone: "fi-hel1".to_string(),
            features: vec![GatewayFeature::Vpn],
            routers: vec![GatewayRouterSpec {
                uuid: "router-1".to_string(),
            }],
            plan: "advanced".to_string(),
            labels: Vec::new(),
            configured_status: ConfiguredStatus::Started,
            addresses: vec![GatewayAddress {
                address: String::new(),
                name: "public-ip-1".to_string(),
            }],
            connections: vec![GatewayConnectionSpec {
                name: "conn".to_string(),
                connection_type: "ipsec".to_string(),
                local_routes: Vec::new(),
                remote_routes: Vec::new(),
                tunnels: vec![GatewayTunnelSpec {
                    name: "tunnel".to_string(),
                    local_address: GatewayTunnelLocalAddress {
                        name: "public-ip-1".to_string(),
                    },
                    remote_address: GatewayTunnelRemoteAddress {
                        address: "100.10.0.111".to_string(),
                    },
                    ipsec: GatewayTunnelIpsec::psk("secret"),
                }],
            }],
        };
        assert_eq!(
            body(&r),
            json!({
                "name": "gw",
                "zone": "fi-hel1",
                "features": ["vpn"],
                "routers": [{"uuid": "router-1"}],
                "plan": "advanced",
                "configured_status": "started",
                "addresses": [{"name": "public-ip-1"}],
                "connections": [{
                    "name": "conn",
                    "type": "ipsec",
                    "tunnels": [{
                        "name": "tunnel",
                        "local_address": {"name": "public-ip-1"},
                        "remote_address": {"address": "100.10.0.111"},
                        "ipsec": {"authentication": {"authentication": "psk", "psk": "secret"}}
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_tunnel_urls() {
        let r = DeleteGatewayConnectionTunnelRequest {
            service_uuid: "gw".to_string(),
            connection_name: "conn".to_string(),
            name: "tunnel".to_string(),
        };
        assert_eq!(r.relative_url(), "/gateway/gw/connections/conn/tunnels/tunnel");
    }
}
