// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Private network, router and network peering operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    AttachNetworkRouterRequest, CreateNetworkPeeringRequest, CreateNetworkRequest,
    CreateRouterRequest, DeleteNetworkPeeringRequest, DeleteNetworkRequest, DeleteRouterRequest,
    DetachNetworkRouterRequest, GetNetworkDetailsRequest, GetNetworkPeeringRequest,
    GetNetworkPeeringsRequest, GetNetworksRequest, GetRouterDetailsRequest, GetRoutersRequest,
    ModifyNetworkPeeringRequest, ModifyNetworkRequest, ModifyRouterRequest,
};
use upcloud_api::types::{Network, NetworkPeering, NetworkPeeringState, Router};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Networks
    // ========================================================================

    pub async fn get_networks(&self, r: &GetNetworksRequest) -> Result<Vec<Network>> {
        self.list(r).await
    }

    pub async fn get_network_details(&self, r: &GetNetworkDetailsRequest) -> Result<Network> {
        self.one(r).await
    }

    pub async fn create_network(&self, r: &CreateNetworkRequest) -> Result<Network> {
        self.one(r).await
    }

    pub async fn modify_network(&self, r: &ModifyNetworkRequest) -> Result<Network> {
        self.one(r).await
    }

    pub async fn delete_network(&self, r: &DeleteNetworkRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn attach_network_router(&self, r: &AttachNetworkRouterRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn detach_network_router(&self, r: &DetachNetworkRouterRequest) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Routers
    // ========================================================================

    pub async fn get_routers(&self, r: &GetRoutersRequest) -> Result<Vec<Router>> {
        self.list(r).await
    }

    pub async fn get_router_details(&self, r: &GetRouterDetailsRequest) -> Result<Router> {
        self.one(r).await
    }

    pub async fn create_router(&self, r: &CreateRouterRequest) -> Result<Router> {
        self.one(r).await
    }

    pub async fn modify_router(&self, r: &ModifyRouterRequest) -> Result<Router> {
        self.one(r).await
    }

    pub async fn delete_router(&self, r: &DeleteRouterRequest) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Network peerings
    // ========================================================================

    pub async fn get_network_peerings(
        &self,
        r: &GetNetworkPeeringsRequest,
    ) -> Result<Vec<NetworkPeering>> {
        self.list(r).await
    }

    pub async fn get_network_peering(
        &self,
        r: &GetNetworkPeeringRequest,
    ) -> Result<NetworkPeering> {
        self.one(r).await
    }

    pub async fn create_network_peering(
        &self,
        r: &CreateNetworkPeeringRequest,
    ) -> Result<NetworkPeering> {
        self.one(r).await
    }

    pub async fn modify_network_peering(
        &self,
        r: &ModifyNetworkPeeringRequest,
    ) -> Result<NetworkPeering> {
        self.one(r).await
    }

    pub async fn delete_network_peering(&self, r: &DeleteNetworkPeeringRequest) -> Result<()> {
        self.send(r).await
    }

    /// Wait for a peering to reach `desired`
    ///
    /// A peering only becomes `active` once the other side has been created
    /// too; until then it stays `pending-peer`.
    pub async fn wait_for_network_peering_state(
        &self,
        uuid: &str,
        desired: NetworkPeeringState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<NetworkPeering> {
        let request = GetNetworkPeeringRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "network peering",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_network_peering(&request),
            |peering| peering.state,
        )
        .await
    }
}
