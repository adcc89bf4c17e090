// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed database operations

use std::collections::BTreeMap;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    CancelManagedDatabaseConnectionRequest, CloneManagedDatabaseRequest,
    CreateManagedDatabaseLogicalDatabaseRequest, CreateManagedDatabaseRequest,
    CreateManagedDatabaseUserRequest, DeleteManagedDatabaseIndexRequest,
    DeleteManagedDatabaseLogicalDatabaseRequest, DeleteManagedDatabaseRequest,
    DeleteManagedDatabaseUserRequest, GetManagedDatabaseConnectionsRequest,
    GetManagedDatabaseIndicesRequest, GetManagedDatabaseLogicalDatabasesRequest,
    GetManagedDatabaseLogsRequest, GetManagedDatabaseMetricsRequest,
    GetManagedDatabaseQueryStatisticsRequest, GetManagedDatabaseRequest,
    GetManagedDatabaseServiceTypeRequest, GetManagedDatabaseServiceTypesRequest,
    GetManagedDatabaseUpgradeAvailableVersionsRequest, GetManagedDatabaseUserRequest,
    GetManagedDatabaseUsersRequest, GetManagedDatabaseVersionsRequest, GetManagedDatabasesRequest,
    ModifyManagedDatabaseRequest, ModifyManagedDatabaseUserAccessControlRequest,
    ModifyManagedDatabaseUserRequest, ShutdownManagedDatabaseRequest, StartManagedDatabaseRequest,
    UpgradeManagedDatabaseVersionRequest,
};
use upcloud_api::types::{
    ManagedDatabase, ManagedDatabaseConnection, ManagedDatabaseIndex,
    ManagedDatabaseLogicalDatabase, ManagedDatabaseLogs, ManagedDatabaseMetrics,
    ManagedDatabaseQueryStatistics, ManagedDatabaseState, ManagedDatabaseType,
    ManagedDatabaseUpgradeAvailableVersions, ManagedDatabaseUser,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Services
    // ========================================================================

    /// Available engines keyed by type name
    pub async fn get_managed_database_service_types(
        &self,
    ) -> Result<BTreeMap<String, ManagedDatabaseType>> {
        self.json(&GetManagedDatabaseServiceTypesRequest).await
    }

    pub async fn get_managed_database_service_type(
        &self,
        r: &GetManagedDatabaseServiceTypeRequest,
    ) -> Result<ManagedDatabaseType> {
        self.json(r).await
    }

    pub async fn get_managed_databases(
        &self,
        r: &GetManagedDatabasesRequest,
    ) -> Result<Vec<ManagedDatabase>> {
        self.json(r).await
    }

    pub async fn get_managed_database(
        &self,
        r: &GetManagedDatabaseRequest,
    ) -> Result<ManagedDatabase> {
        self.json(r).await
    }

    pub async fn create_managed_database(
        &self,
        r: &CreateManagedDatabaseRequest,
    ) -> Result<ManagedDatabase> {
        self.json(r).await
    }

    pub async fn modify_managed_database(
        &self,
        r: &ModifyManagedDatabaseRequest,
    ) -> Result<ManagedDatabase> {
        self.json(r).await
    }

    pub async fn delete_managed_database(&self, r: &DeleteManagedDatabaseRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn start_managed_database(
        &self,
        r: &StartManagedDatabaseRequest,
    ) -> Result<ManagedDatabase> {
        self.json(r).await
    }

    pub async fn shutdown_managed_database(
        &self,
        r: &ShutdownManagedDatabaseRequest,
    ) -> Result<ManagedDatabase> {
        self.json(r).await
    }

    pub async fn clone_managed_database(
        &self,
        r: &CloneManagedDatabaseRequest,
    ) -> Result<ManagedDatabase> {
        self.json(r).await
    }

    /// Wait for a database to reach `desired`
    ///
    /// Databases have no failure state; a service that never gets there
    /// ends the wait with a timeout.
    pub async fn wait_for_managed_database_state(
        &self,
        uuid: &str,
        desired: ManagedDatabaseState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<ManagedDatabase> {
        let request = GetManagedDatabaseRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "managed database",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_managed_database(&request),
            |db| db.state,
        )
        .await
    }

    // ========================================================================
    // Versions
    // ========================================================================

    pub async fn get_managed_database_versions(
        &self,
        r: &GetManagedDatabaseVersionsRequest,
    ) -> Result<Vec<String>> {
        self.json(r).await
    }

    pub async fn get_managed_database_upgrade_available_versions(
        &self,
        r: &GetManagedDatabaseUpgradeAvailableVersionsRequest,
    ) -> Result<ManagedDatabaseUpgradeAvailableVersions> {
        self.json(r).await
    }

    /// Start a major version upgrade; the service keeps running meanwhile
    pub async fn upgrade_managed_database_version(
        &self,
        r: &UpgradeManagedDatabaseVersionRequest,
    ) -> Result<ManagedDatabase> {
        self.json(r).await
    }

    // ========================================================================
    // Users and logical databases
    // ========================================================================

    pub async fn get_managed_database_users(
        &self,
        r: &GetManagedDatabaseUsersRequest,
    ) -> Result<Vec<ManagedDatabaseUser>> {
        self.json(r).await
    }

    pub async fn get_managed_database_user(
        &self,
        r: &GetManagedDatabaseUserRequest,
    ) -> Result<ManagedDatabaseUser> {
        self.json(r).await
    }

    pub async fn create_managed_database_user(
        &self,
        r: &CreateManagedDatabaseUserRequest,
    ) -> Result<ManagedDatabaseUser> {
        self.json(r).await
    }

    pub async fn modify_managed_database_user(
        &self,
        r: &ModifyManagedDatabaseUserRequest,
    ) -> Result<ManagedDatabaseUser> {
        self.json(r).await
    }

    pub async fn modify_managed_database_user_access_control(
        &self,
        r: &ModifyManagedDatabaseUserAccessControlRequest,
    ) -> Result<ManagedDatabaseUser> {
        self.json(r).await
    }

    pub async fn delete_managed_database_user(
        &self,
        r: &DeleteManagedDatabaseUserRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_managed_database_logical_databases(
        &self,
        r: &GetManagedDatabaseLogicalDatabasesRequest,
    ) -> Result<Vec<ManagedDatabaseLogicalDatabase>> {
        self.json(r).await
    }

    pub async fn create_managed_database_logical_database(
        &self,
        r: &CreateManagedDatabaseLogicalDatabaseRequest,
    ) -> Result<ManagedDatabaseLogicalDatabase> {
        self.json(r).await
    }

    pub async fn delete_managed_database_logical_database(
        &self,
        r: &DeleteManagedDatabaseLogicalDatabaseRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Sessions and diagnostics
    // ========================================================================

    pub async fn get_managed_database_connections(
        &self,
        r: &GetManagedDatabaseConnectionsRequest,
    ) -> Result<Vec<ManagedDatabaseConnection>> {
        self.json(r).await
    }

    pub async fn cancel_managed_database_connection(
        &self,
        r: &CancelManagedDatabaseConnectionRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_managed_database_query_statistics(
        &self,
        r: &GetManagedDatabaseQueryStatisticsRequest,
    ) -> Result<ManagedDatabaseQueryStatistics> {
        self.json(r).await
    }

    pub async fn get_managed_database_metrics(
        &self,
        r: &GetManagedDatabaseMetricsRequest,
    ) -> Result<ManagedDatabaseMetrics> {
        self.json(r).await
    }

    pub async fn get_managed_database_logs(
        &self,
        r: &GetManagedDatabaseLogsRequest,
    ) -> Result<ManagedDatabaseLogs> {
        self.json(r).await
    }

    /// OpenSearch indices
    pub async fn get_managed_database_indices(
        &self,
        r: &GetManagedDatabaseIndicesRequest,
    ) -> Result<Vec<ManagedDatabaseIndex>> {
        self.json(r).await
    }

    pub async fn delete_managed_database_index(
        &self,
        r: &DeleteManagedDatabaseIndexRequest,
    ) -> Result<()> {
        self.send(r).await
    }
}
