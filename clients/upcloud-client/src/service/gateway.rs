// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network gateway operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    CreateGatewayConnectionRequest, CreateGatewayConnectionTunnelRequest, CreateGatewayRequest,
    DeleteGatewayConnectionRequest, DeleteGatewayConnectionTunnelRequest, DeleteGatewayRequest,
    GetGatewayConnectionRequest, GetGatewayConnectionTunnelRequest,
    GetGatewayConnectionTunnelsRequest, GetGatewayConnectionsRequest, GetGatewayMetricsRequest,
    GetGatewayPlansRequest, GetGatewayRequest, GetGatewaysRequest, ModifyGatewayConnectionRequest,
    ModifyGatewayConnectionTunnelRequest, ModifyGatewayRequest,
};
use upcloud_api::types::{
    Gateway, GatewayConnection, GatewayMetrics, GatewayOperationalState, GatewayPlan, GatewayTunnel,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Gateways
    // ========================================================================

    pub async fn get_gateways(&self, r: &GetGatewaysRequest) -> Result<Vec<Gateway>> {
        self.json(r).await
    }

    pub async fn get_gateway(&self, r: &GetGatewayRequest) -> Result<Gateway> {
        self.json(r).await
    }

    pub async fn get_gateway_plans(&self) -> Result<Vec<GatewayPlan>> {
        self.json(&GetGatewayPlansRequest).await
    }

    pub async fn create_gateway(&self, r: &CreateGatewayRequest) -> Result<Gateway> {
        self.json(r).await
    }

    pub async fn modify_gateway(&self, r: &ModifyGatewayRequest) -> Result<Gateway> {
        self.json(r).await
    }

    pub async fn delete_gateway(&self, r: &DeleteGatewayRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_gateway_metrics(
        &self,
        r: &GetGatewayMetricsRequest,
    ) -> Result<GatewayMetrics> {
        self.json(r).await
    }

    /// Wait for a gateway to reach `desired`
    ///
    /// Gateways have no failure state, so a stuck gateway times out.
    pub async fn wait_for_gateway_operational_state(
        &self,
        uuid: &str,
        desired: GatewayOperationalState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<Gateway> {
        let request = GetGatewayRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "gateway",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_gateway(&request),
            |gateway| gateway.operational_state,
        )
        .await
    }

    // ========================================================================
    // Connections
    // ========================================================================

    pub async fn get_gateway_connections(
        &self,
        r: &GetGatewayConnectionsRequest,
    ) -> Result<Vec<GatewayConnection>> {
        self.json(r).await
    }

    pub async fn get_gateway_connection(
        &self,
        r: &GetGatewayConnectionRequest,
    ) -> Result<GatewayConnection> {
        self.json(r).await
    }

    pub async fn create_gateway_connection(
        &self,
        r: &CreateGatewayConnectionRequest,
    ) -> Result<GatewayConnection> {
        self.json(r).await
    }

    pub async fn modify_gateway_connection(
        &self,
        r: &ModifyGatewayConnectionRequest,
    ) -> Result<GatewayConnection> {
        self.json(r).await
    }

    pub async fn delete_gateway_connection(
        &self,
        r: &DeleteGatewayConnectionRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Tunnels
    // ========================================================================

    pub async fn get_gateway_connection_tunnels(
        &self,
        r: &GetGatewayConnectionTunnelsRequest,
    ) -> Result<Vec<GatewayTunnel>> {
        self.json(r).await
    }

    pub async fn get_gateway_connection_tunnel(
        &self,
        r: &GetGatewayConnectionTunnelRequest,
    ) -> Result<GatewayTunnel> {
        self.json(r).await
    }

    pub async fn create_gateway_connection_tunnel(
        &self,
        r: &CreateGatewayConnectionTunnelRequest,
    ) -> Result<GatewayTunnel> {
        self.json(r).await
    }

    pub async fn modify_gateway_connection_tunnel(
        &self,
        r: &ModifyGatewayConnectionTunnelRequest,
    ) -> Result<GatewayTunnel> {
        self.json(r).await
    }

    pub async fn delete_gateway_connection_tunnel(
        &self,
        r: &DeleteGatewayConnectionTunnelRequest,
    ) -> Result<()> {
        self.send(r).await
    }
}
