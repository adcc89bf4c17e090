// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed object storage operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    AttachManagedObjectStorageUserPolicyRequest, CreateManagedObjectStorageCustomDomainRequest,
    CreateManagedObjectStorageNetworkRequest, CreateManagedObjectStoragePolicyRequest,
    CreateManagedObjectStorageRequest, CreateManagedObjectStorageUserAccessKeyRequest,
    CreateManagedObjectStorageUserRequest, DeleteManagedObjectStorageCustomDomainRequest,
    DeleteManagedObjectStorageNetworkRequest, DeleteManagedObjectStoragePolicyRequest,
    DeleteManagedObjectStorageRequest, DeleteManagedObjectStorageUserAccessKeyRequest,
    DeleteManagedObjectStorageUserRequest, DetachManagedObjectStorageUserPolicyRequest,
    GetManagedObjectStorageBucketMetricsRequest, GetManagedObjectStorageCustomDomainsRequest,
    GetManagedObjectStorageNetworkRequest, GetManagedObjectStorageNetworksRequest,
    GetManagedObjectStoragePoliciesRequest, GetManagedObjectStoragePolicyRequest,
    GetManagedObjectStorageRegionRequest, GetManagedObjectStorageRegionsRequest,
    GetManagedObjectStorageRequest, GetManagedObjectStorageUserAccessKeyRequest,
    GetManagedObjectStorageUserAccessKeysRequest, GetManagedObjectStorageUserPoliciesRequest,
    GetManagedObjectStorageUserRequest, GetManagedObjectStorageUsersRequest,
    GetManagedObjectStoragesRequest, ModifyManagedObjectStorageCustomDomainRequest,
    ModifyManagedObjectStorageRequest, ModifyManagedObjectStorageUserAccessKeyRequest,
    ReplaceManagedObjectStorageRequest,
};
use upcloud_api::types::{
    ManagedObjectStorage, ManagedObjectStorageBucketMetrics, ManagedObjectStorageCustomDomain,
    ManagedObjectStorageNetwork, ManagedObjectStorageOperationalState, ManagedObjectStoragePolicy,
    ManagedObjectStorageRegion, ManagedObjectStorageUser, ManagedObjectStorageUserAccessKey,
    ManagedObjectStorageUserPolicy,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Regions
    // ========================================================================

    pub async fn get_managed_object_storage_regions(
        &self,
        r: &GetManagedObjectStorageRegionsRequest,
    ) -> Result<Vec<ManagedObjectStorageRegion>> {
        self.json(r).await
    }

    pub async fn get_managed_object_storage_region(
        &self,
        r: &GetManagedObjectStorageRegionRequest,
    ) -> Result<ManagedObjectStorageRegion> {
        self.json(r).await
    }

    // ========================================================================
    // Services
    // ========================================================================

    pub async fn get_managed_object_storages(
        &self,
        r: &GetManagedObjectStoragesRequest,
    ) -> Result<Vec<ManagedObjectStorage>> {
        self.json(r).await
    }

    pub async fn get_managed_object_storage(
        &self,
        r: &GetManagedObjectStorageRequest,
    ) -> Result<ManagedObjectStorage> {
        self.json(r).await
    }

    pub async fn create_managed_object_storage(
        &self,
        r: &CreateManagedObjectStorageRequest,
    ) -> Result<ManagedObjectStorage> {
        self.json(r).await
    }

    pub async fn replace_managed_object_storage(
        &self,
        r: &ReplaceManagedObjectStorageRequest,
    ) -> Result<ManagedObjectStorage> {
        self.json(r).await
    }

    pub async fn modify_managed_object_storage(
        &self,
        r: &ModifyManagedObjectStorageRequest,
    ) -> Result<ManagedObjectStorage> {
        self.json(r).await
    }

    pub async fn delete_managed_object_storage(
        &self,
        r: &DeleteManagedObjectStorageRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    /// Per bucket usage
    pub async fn get_managed_object_storage_bucket_metrics(
        &self,
        r: &GetManagedObjectStorageBucketMetricsRequest,
    ) -> Result<Vec<ManagedObjectStorageBucketMetrics>> {
        self.json(r).await
    }

    /// Wait for an object storage service to reach `desired`; `error` ends the wait early
    pub async fn wait_for_managed_object_storage_operational_state(
        &self,
        uuid: &str,
        desired: ManagedObjectStorageOperationalState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<ManagedObjectStorage> {
        let request = GetManagedObjectStorageRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "managed object storage",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_managed_object_storage(&request),
            |storage| storage.operational_state,
        )
        .await
    }

    // ========================================================================
    // Networks
    // ========================================================================

    pub async fn get_managed_object_storage_networks(
        &self,
        r: &GetManagedObjectStorageNetworksRequest,
    ) -> Result<Vec<ManagedObjectStorageNetwork>> {
        self.json(r).await
    }

    pub async fn get_managed_object_storage_network(
        &self,
        r: &GetManagedObjectStorageNetworkRequest,
    ) -> Result<ManagedObjectStorageNetwork> {
        self.json(r).await
    }

    pub async fn create_managed_object_storage_network(
        &self,
        r: &CreateManagedObjectStorageNetworkRequest,
    ) -> Result<ManagedObjectStorageNetwork> {
        self.json(r).await
    }

    pub async fn delete_managed_object_storage_network(
        &self,
        r: &DeleteManagedObjectStorageNetworkRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Users and access keys
    // ========================================================================

    pub async fn get_managed_object_storage_users(
        &self,
        r: &GetManagedObjectStorageUsersRequest,
    ) -> Result<Vec<ManagedObjectStorageUser>> {
        self.json(r).await
    }

    pub async fn get_managed_object_storage_user(
        &self,
        r: &GetManagedObjectStorageUserRequest,
    ) -> Result<ManagedObjectStorageUser> {
        self.json(r).await
    }

    pub async fn create_managed_object_storage_user(
        &self,
        r: &CreateManagedObjectStorageUserRequest,
    ) -> Result<ManagedObjectStorageUser> {
        self.json(r).await
    }

    pub async fn delete_managed_object_storage_user(
        &self,
        r: &DeleteManagedObjectStorageUserRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_managed_object_storage_user_access_keys(
        &self,
        r: &GetManagedObjectStorageUserAccessKeysRequest,
    ) -> Result<Vec<ManagedObjectStorageUserAccessKey>> {
        self.json(r).await
    }

    pub async fn get_managed_object_storage_user_access_key(
        &self,
        r: &GetManagedObjectStorageUserAccessKeyRequest,
    ) -> Result<ManagedObjectStorageUserAccessKey> {
        self.json(r).await
    }

    /// The secret is only present in this response
    pub async fn create_managed_object_storage_user_access_key(
        &self,
        r: &CreateManagedObjectStorageUserAccessKeyRequest,
    ) -> Result<ManagedObjectStorageUserAccessKey> {
        self.json(r).await
    }

    pub async fn modify_managed_object_storage_user_access_key(
        &self,
        r: &ModifyManagedObjectStorageUserAccessKeyRequest,
    ) -> Result<ManagedObjectStorageUserAccessKey> {
        self.json(r).await
    }

    pub async fn delete_managed_object_storage_user_access_key(
        &self,
        r: &DeleteManagedObjectStorageUserAccessKeyRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Policies
    // ========================================================================

    pub async fn get_managed_object_storage_policies(
        &self,
        r: &GetManagedObjectStoragePoliciesRequest,
    ) -> Result<Vec<ManagedObjectStoragePolicy>> {
        self.json(r).await
    }

    pub async fn get_managed_object_storage_policy(
        &self,
        r: &GetManagedObjectStoragePolicyRequest,
    ) -> Result<ManagedObjectStoragePolicy> {
        self.json(r).await
    }

    pub async fn create_managed_object_storage_policy(
        &self,
        r: &CreateManagedObjectStoragePolicyRequest,
    ) -> Result<ManagedObjectStoragePolicy> {
        self.json(r).await
    }

    pub async fn delete_managed_object_storage_policy(
        &self,
        r: &DeleteManagedObjectStoragePolicyRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_managed_object_storage_user_policies(
        &self,
        r: &GetManagedObjectStorageUserPoliciesRequest,
    ) -> Result<Vec<ManagedObjectStorageUserPolicy>> {
        self.json(r).await
    }

    pub async fn attach_managed_object_storage_user_policy(
        &self,
        r: &AttachManagedObjectStorageUserPolicyRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn detach_managed_object_storage_user_policy(
        &self,
        r: &DetachManagedObjectStorageUserPolicyRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Custom domains
    // ========================================================================

    pub async fn get_managed_object_storage_custom_domains(
        &self,
        r: &GetManagedObjectStorageCustomDomainsRequest,
    ) -> Result<Vec<ManagedObjectStorageCustomDomain>> {
        self.json(r).await
    }

    pub async fn create_managed_object_storage_custom_domain(
        &self,
        r: &CreateManagedObjectStorageCustomDomainRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn modify_managed_object_storage_custom_domain(
        &self,
        r: &ModifyManagedObjectStorageCustomDomainRequest,
    ) -> Result<ManagedObjectStorageCustomDomain> {
        self.json(r).await
    }

    pub async fn delete_managed_object_storage_custom_domain(
        &self,
        r: &DeleteManagedObjectStorageCustomDomainRequest,
    ) -> Result<()> {
        self.send(r).await
    }
}
