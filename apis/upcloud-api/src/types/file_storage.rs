// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed file storage (NFS) types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::common::{ConfiguredStatus, Label};

pub type FileStorageConfiguredStatus = ConfiguredStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FileStorageOperationalState {
    Pending,
    Running,
    Stopped,
    SetupNetwork,
    SetupService,
    SetupShares,
    DeleteNetwork,
    DeleteService,
    Error,
    Failed,
    #[serde(other)]
    Unknown,
}

impl FileStorageOperationalState {
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Error | Self::Failed)
    }
}

/// Private network the file storage is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStorageNetwork {
    pub uuid: String,
    pub name: String,
    /// `IPv4`
    pub family: String,
    pub ip_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileStorageSharePermission {
    Ro,
    Rw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStorageShareAcl {
    /// Client address, CIDR or `*`
    pub target: String,
    pub permission: FileStorageSharePermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStorageShare {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub acl: Vec<FileStorageShareAcl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStorage {
    pub uuid: String,
    pub name: String,
    pub zone: String,
    pub size_gib: u32,
    pub configured_status: FileStorageConfiguredStatus,
    pub operational_state: FileStorageOperationalState,
    #[serde(default)]
    pub networks: Vec<FileStorageNetwork>,
    #[serde(default)]
    pub shares: Vec<FileStorageShare>,
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
    fn test_decode_file_storage() {
        let fs: FileStorage = serde_json::from_value(json!({
            "uuid": "0a1b2c3d-0000-4000-8000-000000000001",
            "name": "nfs-1",
            "zone": "fi-hel2",
            "size_gib": 250,
            "configured_status": "started",
            "operational_state": "setup-shares",
            "networks": [{
                "uuid": "03e4b9a4-1b1c-4b4e-9a5e-1e2f3a4b5c6d",
                "name": "nfs-net",
                "family": "IPv4",
                "ip_address": "172.16.8.11"
            }],
            "shares": [{
                "name": "write-to-project",
                "path": "/project",
                "acl": [{"target": "172.16.8.12", "permission": "rw"}]
            }],
            "labels": [{"key": "env", "value": "prod"}],
            "created_at": "2025-01-02T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(fs.operational_state, FileStorageOperationalState::SetupShares);
        assert_eq!(
            fs.shares[0].acl[0].permission,
            FileStorageSharePermission::Rw
        );
        assert!(fs.updated_at.is_none());
    }

    #[test]
    fn test_unknown_state_is_tolerated() {
        let state: FileStorageOperationalState = serde_json::from_value(json!("resizing")).unwrap();
        assert_eq!(state, FileStorageOperationalState::Unknown);
        assert!(FileStorageOperationalState::Failed.is_failure());
        assert!(!FileStorageOperationalState::Running.is_failure());
    }
}
