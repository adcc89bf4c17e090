// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use tracing::debug;
use upcloud_api::request::{
    AddServerToServerGroupRequest, CreateServerGroupRequest, DeleteServerGroupRequest,
    GetServerGroupRequest, GetServerGroupsRequest, ModifyServerGroupRequest,
    RemoveServerFromServerGroupRequest,
};
use upcloud_api::types::ServerGroup;

use crate::Client;
use crate::error::Result;

impl Client {
    pub async fn get_server_groups(&self, r: &GetServerGroupsRequest) -> Result<Vec<ServerGroup>> {
        self.list(r).await
    }

    pub async fn get_server_group(&self, r: &GetServerGroupRequest) -> Result<ServerGroup> {
        self.one(r).await
    }

    pub async fn create_server_group(&self, r: &CreateServerGroupRequest) -> Result<ServerGroup> {
        self.one(r).await
    }

    pub async fn modify_server_group(&self, r: &ModifyServerGroupRequest) -> Result<ServerGroup> {
        self.one(r).await
    }

    pub async fn delete_server_group(&self, r: &DeleteServerGroupRequest) -> Result<()> {
        self.send(r).await
    }

    /// Add a server to a group by reading the group and patching its
    /// member list; a server that already is a member is left alone
    pub async fn add_server_to_server_group(
        &self,
        r: &AddServerToServerGroupRequest,
    ) -> Result<()> {
        let group = self
            .get_server_group(&GetServerGroupRequest {
                uuid: r.server_group_uuid.clone(),
            })
            .await?;
        match r.modify(&group.members) {
            Some(patch) => self.modify_server_group(&patch).await.map(drop),
            None => {
                debug!(server = %r.server_uuid, group = %r.server_group_uuid, "already a member");
                Ok(())
            }
        }
    }

    pub async fn remove_server_from_server_group(
        &self,
        r: &RemoveServerFromServerGroupRequest,
    ) -> Result<()> {
        let group = self
            .get_server_group(&GetServerGroupRequest {
                uuid: r.server_group_uuid.clone(),
            })
            .await?;
        match r.modify(&group.members) {
            Some(patch) => self.modify_server_group(&patch).await.map(drop),
            None => {
                debug!(server = %r.server_uuid, group = %r.server_group_uuid, "not a member");
                Ok(())
            }
        }
    }
}
