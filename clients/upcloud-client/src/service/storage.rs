// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Storage operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    AttachStorageRequest, CancelOperationRequest, CloneStorageRequest, CreateBackupRequest,
    CreateStorageImportRequest, CreateStorageRequest, DeleteStorageRequest, DetachStorageRequest,
    EjectCdromRequest, GetStorageDetailsRequest, GetStorageImportDetailsRequest,
    GetStoragesRequest, LoadCdromRequest, ModifyStorageRequest, ResizeStorageFilesystemRequest,
    RestoreBackupRequest, TemplatizeStorageRequest,
};
use upcloud_api::types::{
    ResizeStorageFilesystemBackup, ServerDetails, Storage, StorageDetails, StorageImportDetails,
    StorageState,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Storages
    // ========================================================================

    pub async fn get_storages(&self, r: &GetStoragesRequest) -> Result<Vec<Storage>> {
        self.list(r).await
    }

    pub async fn get_storage_details(
        &self,
        r: &GetStorageDetailsRequest,
    ) -> Result<StorageDetails> {
        self.one(r).await
    }

    pub async fn create_storage(&self, r: &CreateStorageRequest) -> Result<StorageDetails> {
        self.one(r).await
    }

    pub async fn modify_storage(&self, r: &ModifyStorageRequest) -> Result<StorageDetails> {
        self.one(r).await
    }

    pub async fn delete_storage(&self, r: &DeleteStorageRequest) -> Result<()> {
        self.send(r).await
    }

    /// Wait for a storage to reach `desired`; `error` ends the wait early
    pub async fn wait_for_storage_state(
        &self,
        uuid: &str,
        desired: StorageState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<StorageDetails> {
        let request = GetStorageDetailsRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "storage",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_storage_details(&request),
            |details| details.storage.state,
        )
        .await
    }

    // ========================================================================
    // Server attachment
    // ========================================================================

    pub async fn attach_storage(&self, r: &AttachStorageRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    pub async fn detach_storage(&self, r: &DetachStorageRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    pub async fn load_cdrom(&self, r: &LoadCdromRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    pub async fn eject_cdrom(&self, r: &EjectCdromRequest) -> Result<ServerDetails> {
        self.one(r).await
    }

    // ========================================================================
    // Copies and backups
    // ========================================================================

    pub async fn clone_storage(&self, r: &CloneStorageRequest) -> Result<StorageDetails> {
        self.one(r).await
    }

    pub async fn templatize_storage(&self, r: &TemplatizeStorageRequest) -> Result<StorageDetails> {
        self.one(r).await
    }

    pub async fn create_backup(&self, r: &CreateBackupRequest) -> Result<StorageDetails> {
        self.one(r).await
    }

    pub async fn restore_backup(&self, r: &RestoreBackupRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn cancel_storage_operation(&self, r: &CancelOperationRequest) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Imports and resizing
    // ========================================================================

    pub async fn create_storage_import(
        &self,
        r: &CreateStorageImportRequest,
    ) -> Result<StorageImportDetails> {
        self.one(r).await
    }

    pub async fn get_storage_import_details(
        &self,
        r: &GetStorageImportDetailsRequest,
    ) -> Result<StorageImportDetails> {
        self.one(r).await
    }

    /// Grow the filesystem after the storage itself was resized; the
    /// response names the backup taken before the operation
    pub async fn resize_storage_filesystem(
        &self,
        r: &ResizeStorageFilesystemRequest,
    ) -> Result<ResizeStorageFilesystemBackup> {
        self.one(r).await
    }
}
