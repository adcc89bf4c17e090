// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed object storage types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::common::{ConfiguredStatus, Label};

pub type ManagedObjectStorageConfiguredStatus = ConfiguredStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ManagedObjectStorageOperationalState {
    Pending,
    Started,
    Stopped,
    SetupNetwork,
    SetupService,
    SetupCheckup,
    DeleteNetwork,
    DeleteService,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageRegionZone {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageRegion {
    pub name: String,
    pub primary_zone: String,
    #[serde(default)]
    pub zones: Vec<ManagedObjectStorageRegionZone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageEndpoint {
    pub domain_name: String,
    /// `public` or `private`
    #[serde(rename = "type")]
    pub endpoint_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iam_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sts_url: String,
}

/// Network the service is reachable from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageNetwork {
    pub name: String,
    /// `public` or `private`
    #[serde(rename = "type")]
    pub network_type: String,
    #[serde(default)]
    pub family: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageUser {
    pub username: String,
    #[serde(default)]
    pub arn: String,
    #[serde(default)]
    pub operational_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagedObjectStorageUserAccessKeyStatus {
    Active,
    Inactive,
}

/// S3 access key; `secret_access_key` is only returned on creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageUserAccessKey {
    pub access_key_id: String,
    pub status: ManagedObjectStorageUserAccessKeyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStoragePolicy {
    pub name: String,
    #[serde(default)]
    pub arn: String,
    #[serde(default)]
    pub attachment_count: u32,
    #[serde(default)]
    pub default_version_id: String,
    #[serde(default)]
    pub description: String,
    /// URL-encoded IAM policy document
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageUserPolicy {
    pub name: String,
    #[serde(default)]
    pub arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageCustomDomain {
    pub domain_name: String,
    #[serde(rename = "type")]
    pub domain_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorageBucketMetrics {
    pub name: String,
    #[serde(default)]
    pub total_objects: u64,
    #[serde(default)]
    pub total_size_bytes: u64,
    #[serde(default)]
    pub deleted: bool,
}

/// Managed object storage service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedObjectStorage {
    pub uuid: String,
    pub name: String,
    pub region: String,
    pub configured_status: ManagedObjectStorageConfiguredStatus,
    pub operational_state: ManagedObjectStorageOperationalState,
    #[serde(default)]
    pub endpoints: Vec<ManagedObjectStorageEndpoint>,
    #[serde(default)]
    pub networks: Vec<ManagedObjectStorageNetwork>,
    #[serde(default)]
    pub users: Vec<ManagedObjectStorageUser>,
    #[serde(default)]
    pub custom_domains: Vec<ManagedObjectStorageCustomDomain>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_object_storage() {
        let storage: ManagedObjectStorage = serde_json::from_value(json!({
            "configured_status": "started",
            "created_at": "2023-05-07T15:55:24.655776Z",
            "endpoints": [{"domain_name": "7mf5k.upbucks.cloud", "type": "public", "iam_url": "https://7mf5k.upbucks.cloud:4443/iam", "sts_url": "https://7mf5k.upbucks.cloud:4443/sts"}],
            "labels": [{"key": "managed-by", "value": "team-one"}],
            "name": "example",
            "networks": [{"family": "IPv4", "name": "example-public-network", "type": "public"}],
            "operational_state": "setup-service",
            "region": "europe-1",
            "updated_at": "2023-05-07T21:38:15.757405Z",
            "users": [{"username": "example", "arn": "arn:aws:iam::123:user/example", "operational_state": "ready"}],
            "uuid": "1200ecde-db95-4d1c-9133-6508f3232567"
        }))
        .unwrap();
        assert_eq!(
            storage.operational_state,
            ManagedObjectStorageOperationalState::SetupService
        );
        assert_eq!(storage.configured_status, ConfiguredStatus::Started);
        assert_eq!(storage.endpoints[0].endpoint_type, "public");
        assert!(storage.custom_domains.is_empty());
    }

    #[test]
    fn test_decode_access_key() {
        let key: ManagedObjectStorageUserAccessKey = serde_json::from_value(json!({
            "access_key_id": "AKIA63F41D01345BB477",
            "created_at": "2023-05-07T20:52:19.705405Z",
            "last_used_at": "2023-05-07T20:52:17Z",
            "secret_access_key": "QXpUO4rhu5skiS3Bw9b6vo9C2rC9ZO+iVKaCLLin",
            "status": "Active"
        }))
        .unwrap();
        assert_eq!(key.status, ManagedObjectStorageUserAccessKeyStatus::Active);
        assert!(key.secret_access_key.is_some());
    }
}
