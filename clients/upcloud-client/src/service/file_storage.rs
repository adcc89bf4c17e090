// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! File storage operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    CreateFileStorageNetworkRequest, CreateFileStorageRequest, CreateFileStorageShareRequest,
    DeleteFileStorageNetworkRequest, DeleteFileStorageRequest, DeleteFileStorageShareRequest,
    GetFileStorageNetworkRequest, GetFileStorageNetworksRequest, GetFileStorageRequest,
    GetFileStorageShareRequest, GetFileStorageSharesRequest, GetFileStoragesRequest,
    ModifyFileStorageNetworkRequest, ModifyFileStorageRequest, ModifyFileStorageShareRequest,
    ReplaceFileStorageRequest,
};
use upcloud_api::types::{
    FileStorage, FileStorageNetwork, FileStorageOperationalState, FileStorageShare,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // File storages
    // ========================================================================

    pub async fn get_file_storages(&self, r: &GetFileStoragesRequest) -> Result<Vec<FileStorage>> {
        self.json(r).await
    }

    pub async fn get_file_storage(&self, r: &GetFileStorageRequest) -> Result<FileStorage> {
        self.json(r).await
    }

    pub async fn create_file_storage(&self, r: &CreateFileStorageRequest) -> Result<FileStorage> {
        self.json(r).await
    }

    pub async fn replace_file_storage(&self, r: &ReplaceFileStorageRequest) -> Result<FileStorage> {
        self.json(r).await
    }

    pub async fn modify_file_storage(&self, r: &ModifyFileStorageRequest) -> Result<FileStorage> {
        self.json(r).await
    }

    pub async fn delete_file_storage(&self, r: &DeleteFileStorageRequest) -> Result<()> {
        self.send(r).await
    }

    /// Wait for a file storage to reach `desired`; `error` and `failed` end
    /// the wait early
    pub async fn wait_for_file_storage_operational_state(
        &self,
        uuid: &str,
        desired: FileStorageOperationalState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<FileStorage> {
        let request = GetFileStorageRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "file storage",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_file_storage(&request),
            |storage| storage.operational_state,
        )
        .await
    }

    // ========================================================================
    // Networks
    // ========================================================================

    pub async fn get_file_storage_networks(
        &self,
        r: &GetFileStorageNetworksRequest,
    ) -> Result<Vec<FileStorageNetwork>> {
        self.json(r).await
    }

    pub async fn get_file_storage_network(
        &self,
        r: &GetFileStorageNetworkRequest,
    ) -> Result<FileStorageNetwork> {
        self.json(r).await
    }

    pub async fn create_file_storage_network(
        &self,
        r: &CreateFileStorageNetworkRequest,
    ) -> Result<FileStorageNetwork> {
        self.json(r).await
    }

    pub async fn modify_file_storage_network(
        &self,
        r: &ModifyFileStorageNetworkRequest,
    ) -> Result<FileStorageNetwork> {
        self.json(r).await
    }

    pub async fn delete_file_storage_network(
        &self,
        r: &DeleteFileStorageNetworkRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Shares
    // ========================================================================

    pub async fn get_file_storage_shares(
        &self,
        r: &GetFileStorageSharesRequest,
    ) -> Result<Vec<FileStorageShare>> {
        self.json(r).await
    }

    pub async fn get_file_storage_share(
        &self,
        r: &GetFileStorageShareRequest,
    ) -> Result<FileStorageShare> {
        self.json(r).await
    }

    pub async fn create_file_storage_share(
        &self,
        r: &CreateFileStorageShareRequest,
    ) -> Result<FileStorageShare> {
        self.json(r).await
    }

    pub async fn modify_file_storage_share(
        &self,
        r: &ModifyFileStorageShareRequest,
    ) -> Result<FileStorageShare> {
        self.json(r).await
    }

    pub async fn delete_file_storage_share(&self, r: &DeleteFileStorageShareRequest) -> Result<()> {
        self.send(r).await
    }
}
