// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network, router and network peering requests

use http::Method;
use serde::Serialize;

use super::filter::{Filter, filter_params, with_query};
use super::{Request, enveloped};
use crate::types::envelope::seq;
use crate::types::{
    IpNetwork, Label, NetworkPeeringConfiguredStatus, NetworkPeeringNetwork, Nullable,
    StaticRoute,
};

/// List networks, optionally restricted to a zone and to label filters
#[derive(Debug, Clone, Default)]
pub struct GetNetworksRequest {
    pub zone: Option<String>,
    pub filters: Vec<Filter>,
}

impl Request for GetNetworksRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        let mut params = filter_params(&self.filters);
        if let Some(zone) = &self.zone {
            params.push(("zone".to_string(), zone.clone()));
        }
        with_query("/network", params)
    }
}

#[derive(Debug, Clone)]
pub struct GetNetworkDetailsRequest {
    pub uuid: String,
}

impl Request for GetNetworkDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/network/{}", self.uuid)
    }
}

/// Create a private network, body `{"network":{...}}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetworkRequest {
    pub name: String,
    pub zone: String,
    /// Router to attach, none when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub router: String,
    #[serde(with = "seq::ip_networks")]
    pub ip_networks: Vec<IpNetwork>,
    #[serde(with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Request for CreateNetworkRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/network".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("network", self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyNetworkRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(with = "seq::ip_networks::option", skip_serializing_if = "Option::is_none")]
    pub ip_networks: Option<Vec<IpNetwork>>,
    #[serde(with = "seq::labels::option", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
}

impl Request for ModifyNetworkRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/network/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("network", self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteNetworkRequest {
    pub uuid: String,
}

impl Request for DeleteNetworkRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/network/{}", self.uuid)
    }
}

#[derive(Debug, Clone, Serialize)]
struct RouterAttachment<'a> {
    router: Nullable<&'a str>,
}

/// Attach a router, body `{"network":{"router":"<uuid>"}}`
#[derive(Debug, Clone)]
pub struct AttachNetworkRouterRequest {
    pub network_uuid: String,
    pub router_uuid: String,
}

impl Request for AttachNetworkRouterRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/network/{}", self.network_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        let attachment = RouterAttachment {
            router: Nullable::Value(self.router_uuid.as_str()),
        };
        enveloped("network", &attachment)
    }
}

/// Detach the router, body `{"network":{"router":null}}`
#[derive(Debug, Clone)]
pub struct DetachNetworkRouterRequest {
    pub network_uuid: String,
}

impl Request for DetachNetworkRouterRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/network/{}", self.network_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("network", &RouterAttachment { router: Nullable::Null })
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetRoutersRequest {
    pub filters: Vec<Filter>,
}

impl Request for GetRoutersRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query("/router", filter_params(&self.filters))
    }
}

#[derive(Debug, Clone)]
pub struct GetRouterDetailsRequest {
    pub uuid: String,
}

impl Request for GetRouterDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/router/{}", self.uuid)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRouterRequest {
    pub name: String,
    #[serde(with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub static_routes: Vec<StaticRoute>,
}

impl Request for CreateRouterRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/router".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("router", self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyRouterRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(with = "seq::labels::option", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_routes: Option<Vec<StaticRoute>>,
}

impl Request for ModifyRouterRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("/router/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("router", self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteRouterRequest {
    pub uuid: String,
}

impl Request for DeleteRouterRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/router/{}", self.uuid)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetNetworkPeeringsRequest {
    pub filters: Vec<Filter>,
}

impl Request for GetNetworkPeeringsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query("/network-peering", filter_params(&self.filters))
    }
}

#[derive(Debug, Clone)]
pub struct GetNetworkPeeringRequest {
    pub uuid: String,
}

impl Request for GetNetworkPeeringRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/network-peering/{}", self.uuid)
    }
}

/// Peer two private networks, body `{"network_peering":{...}}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetworkPeeringRequest {
    pub configured_status: NetworkPeeringConfiguredStatus,
    pub name: String,
    pub network: NetworkPeeringNetwork,
    pub peer_network: NetworkPeeringNetwork,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Request for CreateNetworkPeeringRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/network-peering".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("network_peering", self)
    }
}

/// Patch a peering
///
/// `labels` distinguishes "unchanged" ([`Nullable::Absent`]), "cleared"
/// ([`Nullable::Null`]) and a new, possibly empty, list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyNetworkPeeringRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_status: Option<NetworkPeeringConfiguredStatus>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub labels: Nullable<Vec<Label>>,
}

impl Request for ModifyNetworkPeeringRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("/network-peering/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("network_peering", self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteNetworkPeeringRequest {
    pub uuid: String,
}

impl Request for DeleteNetworkPeeringRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/network-peering/{}", self.uuid)
    }
}
