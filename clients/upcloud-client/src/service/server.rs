// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    CreateNetworkInterfaceRequest, CreateServerRequest, DeleteNetworkInterfaceRequest,
    DeleteServerAndStoragesRequest, DeleteServerRequest, GetServerConfigurationsRequest,
    GetServerDetailsRequest, GetServerNetworksRequest, GetServersRequest,
    ModifyNetworkInterfaceRequest, ModifyServerRequest, RestartServerRequest, StartServerRequest,
    StopServerRequest, TagServerRequest, UntagServerRequest,
};
use upcloud_api::types::{
    Interface, Networking, Server, ServerConfiguration, ServerDetails, ServerState,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Servers
    // ========================================================================

    pub async fn get_servers(&self, r: &GetServersRequest) -> Result<Vec<Server>> {
        self.list(r).await
    }

    pub async fn get_server_details(&self, r: &GetServerDetailsRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    /// Core / memory combinations accepted by custom plans
    pub async fn get_server_configurations(&self) -> Result<Vec<ServerConfiguration>> {
        self.list(&GetServerConfigurationsRequest).await
    }

    pub async fn create_server(&self, r: &CreateServerRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    pub async fn modify_server(&self, r: &ModifyServerRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    /// Delete a stopped server, leaving its storages in place
    pub async fn delete_server(&self, r: &DeleteServerRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn delete_server_and_storages(
        &self,
        r: &DeleteServerAndStoragesRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Power
    // ========================================================================

    pub async fn start_server(&self, r: &StartServerRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    pub async fn stop_server(&self, r: &StopServerRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    pub async fn restart_server(&self, r: &RestartServerRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    /// Wait for a server to reach `desired`
    ///
    /// # Arguments
    ///
    /// * `uuid` - Server UUID
    /// * `desired` - Target state; `error` ends the wait early
    /// * `timeout` - Wall clock limit for the whole wait
    /// * `cancel` - Ends the wait with [`WaitError::Cancelled`](crate::WaitError::Cancelled)
    pub async fn wait_for_server_state(
        &self,
        uuid: &str,
        desired: ServerState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<ServerDetails> {
        let request = GetServerDetailsRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "server",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_server_details(&request),
            |details| details.server.state,
        )
        .await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    pub async fn tag_server(&self, r: &TagServerRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    pub async fn untag_server(&self, r: &UntagServerRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    // ========================================================================
    // Network interfaces
    // ========================================================================

    pub async fn get_server_networks(&self, r: &GetServerNetworksRequest) -> Result<Networking> {
        self.one(r).await
    }

    pub async fn create_network_interface(
        &self,
        r: &CreateNetworkInterfaceRequest,
    ) -> Result<Interface> {
        self.one(r).await
    }

    pub async fn modify_network_interface(
        &self,
        r: &ModifyNetworkInterfaceRequest,
    ) -> Result<Interface> {
        self.one(r).await
    }

    pub async fn delete_network_interface(&self, r: &DeleteNetworkInterfaceRequest) -> Result<()> {
        self.send(r).await
    }
}
