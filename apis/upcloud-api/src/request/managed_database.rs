// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed database requests

use chrono::{DateTime, Utc};
use http::Method;
use serde::Serialize;

use super::filter::{Page, QueryFilter, with_query};
use super::{Request, json};
use crate::types::{
    Label, ManagedDatabaseLogOrder, ManagedDatabaseLogicalDatabase,
    ManagedDatabaseMaintenanceTime, ManagedDatabaseMetricPeriod, ManagedDatabaseNetwork,
    ManagedDatabaseProperties, ManagedDatabaseServiceType, ManagedDatabaseUserAuthentication,
    ManagedDatabaseUserOpenSearchAccessControl, ManagedDatabaseUserPgAccessControl,
    ManagedDatabaseUserRedisAccessControl, ManagedDatabaseUserValkeyAccessControl,
};

const BASE: &str = "/database";

fn service(uuid: &str) -> String {
    format!("{BASE}/{uuid}")
}

fn page_params(limit: Option<u32>, offset: Option<u64>) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(limit) = limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset".to_string(), offset.to_string()));
    }
    params
}

// Service types

#[derive(Debug, Clone, Default)]
pub struct GetManagedDatabaseServiceTypesRequest;

impl Request for GetManagedDatabaseServiceTypesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/service-types")
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseServiceTypeRequest {
    pub service_type: ManagedDatabaseServiceType,
}

impl Request for GetManagedDatabaseServiceTypeRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/service-types/{}", self.service_type)
    }
}

// Services

#[derive(Debug, Clone, Default)]
pub struct GetManagedDatabasesRequest {
    pub page: Option<Page>,
}

impl Request for GetManagedDatabasesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query(
            BASE,
            self.page.map(|p| p.query_params()).unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseRequest {
    pub uuid: String,
}

impl Request for GetManagedDatabaseRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateManagedDatabaseRequest {
    pub hostname_prefix: String,
    pub plan: String,
    pub title: String,
    #[serde(rename = "type")]
    pub service_type: ManagedDatabaseServiceType,
    pub zone: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<ManagedDatabaseMaintenanceTime>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<ManagedDatabaseNetwork>,
    #[serde(skip_serializing_if = "ManagedDatabaseProperties::is_empty")]
    pub properties: ManagedDatabaseProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_protection: Option<bool>,
}

impl Request for CreateManagedDatabaseRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        BASE.to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

/// Partial update; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModifyManagedDatabaseRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<ManagedDatabaseMaintenanceTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<ManagedDatabaseNetwork>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ManagedDatabaseProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_protection: Option<bool>,
}

impl Request for ModifyManagedDatabaseRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Serialize)]
struct Powered {
    powered: bool,
}

#[derive(Debug, Clone)]
pub struct StartManagedDatabaseRequest {
    pub uuid: String,
}

impl Request for StartManagedDatabaseRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&Powered { powered: true })
    }
}

#[derive(Debug, Clone)]
pub struct ShutdownManagedDatabaseRequest {
    pub uuid: String,
}

impl Request for ShutdownManagedDatabaseRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&Powered { powered: false })
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedDatabaseRequest {
    pub uuid: String,
}

impl Request for DeleteManagedDatabaseRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

/// Clone a service, optionally from a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloneManagedDatabaseRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_time: Option<DateTime<Utc>>,
    pub hostname_prefix: String,
    pub plan: String,
    pub title: String,
    pub zone: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<ManagedDatabaseMaintenanceTime>,
    #[serde(skip_serializing_if = "ManagedDatabaseProperties::is_empty")]
    pub properties: ManagedDatabaseProperties,
}

impl Request for CloneManagedDatabaseRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/clone", service(&self.uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseVersionsRequest {
    pub uuid: String,
}

impl Request for GetManagedDatabaseVersionsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/versions", service(&self.uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseUpgradeAvailableVersionsRequest {
    pub uuid: String,
}

impl Request for GetManagedDatabaseUpgradeAvailableVersionsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/upgrade", service(&self.uuid))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpgradeManagedDatabaseVersionRequest {
    #[serde(skip)]
    pub uuid: String,
    pub target_version: String,
}

impl Request for UpgradeManagedDatabaseVersionRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/upgrade", service(&self.uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

// Users

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseUsersRequest {
    pub service_uuid: String,
}

impl Request for GetManagedDatabaseUsersRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/users", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseUserRequest {
    pub service_uuid: String,
    pub username: String,
}

impl Request for GetManagedDatabaseUserRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/users/{}", service(&self.service_uuid), self.username)
    }
}

/// Create a user; the password is generated when left empty
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateManagedDatabaseUserRequest {
    #[serde(skip)]
    pub service_uuid: String,
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ManagedDatabaseUserAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg_access_control: Option<ManagedDatabaseUserPgAccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis_access_control: Option<ManagedDatabaseUserRedisAccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valkey_access_control: Option<ManagedDatabaseUserValkeyAccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensearch_access_control: Option<ManagedDatabaseUserOpenSearchAccessControl>,
}

impl Request for CreateManagedDatabaseUserRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/users", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyManagedDatabaseUserRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ManagedDatabaseUserAuthentication>,
}

impl Request for ModifyManagedDatabaseUserRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/users/{}", service(&self.service_uuid), self.username)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

/// Replace the engine specific access control of a user
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyManagedDatabaseUserAccessControlRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg_access_control: Option<ManagedDatabaseUserPgAccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis_access_control: Option<ManagedDatabaseUserRedisAccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valkey_access_control: Option<ManagedDatabaseUserValkeyAccessControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensearch_access_control: Option<ManagedDatabaseUserOpenSearchAccessControl>,
}

impl Request for ModifyManagedDatabaseUserAccessControlRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!(
            "{}/users/{}/access-control",
            service(&self.service_uuid),
            self.username
        )
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedDatabaseUserRequest {
    pub service_uuid: String,
    pub username: String,
}

impl Request for DeleteManagedDatabaseUserRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/users/{}", service(&self.service_uuid), self.username)
    }
}

// Logical databases

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseLogicalDatabasesRequest {
    pub service_uuid: String,
}

impl Request for GetManagedDatabaseLogicalDatabasesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/databases", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct CreateManagedDatabaseLogicalDatabaseRequest {
    pub service_uuid: String,
    pub database: ManagedDatabaseLogicalDatabase,
}

impl Request for CreateManagedDatabaseLogicalDatabaseRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/databases", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.database)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedDatabaseLogicalDatabaseRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteManagedDatabaseLogicalDatabaseRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/databases/{}", service(&self.service_uuid), self.name)
    }
}

// Connections and diagnostics

#[derive(Debug, Clone, Default)]
pub struct GetManagedDatabaseConnectionsRequest {
    pub uuid: String,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl Request for GetManagedDatabaseConnectionsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query(
            format!("{}/connections", service(&self.uuid)),
            page_params(self.limit, self.offset),
        )
    }
}

/// Cancel the query of a session, or terminate the session entirely
#[derive(Debug, Clone)]
pub struct CancelManagedDatabaseConnectionRequest {
    pub uuid: String,
    pub pid: u64,
    pub terminate: bool,
}

impl Request for CancelManagedDatabaseConnectionRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        with_query(
            format!("{}/connections/{}", service(&self.uuid), self.pid),
            vec![("terminate".to_string(), self.terminate.to_string())],
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetManagedDatabaseQueryStatisticsRequest {
    pub uuid: String,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl Request for GetManagedDatabaseQueryStatisticsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query(
            format!("{}/query-statistics", service(&self.uuid)),
            page_params(self.limit, self.offset),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetManagedDatabaseMetricsRequest {
    pub uuid: String,
    pub period: ManagedDatabaseMetricPeriod,
}

impl Request for GetManagedDatabaseMetricsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query(
            format!("{}/metrics", service(&self.uuid)),
            vec![("period".to_string(), self.period.to_string())],
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetManagedDatabaseLogsRequest {
    pub uuid: String,
    pub limit: Option<u32>,
    pub offset: Option<u64>,
    pub order: Option<ManagedDatabaseLogOrder>,
}

impl Request for GetManagedDatabaseLogsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        let mut params = page_params(self.limit, self.offset);
        if let Some(order) = self.order {
            params.push(("order".to_string(), order.to_string()));
        }
        with_query(format!("{}/logs", service(&self.uuid)), params)
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedDatabaseIndicesRequest {
    pub service_uuid: String,
}

impl Request for GetManagedDatabaseIndicesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/indices", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedDatabaseIndexRequest {
    pub service_uuid: String,
    pub index_name: String,
}

impl Request for DeleteManagedDatabaseIndexRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/indices/{}", service(&self.service_uuid), self.index_name)
    }
}
