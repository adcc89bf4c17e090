// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Storage types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::codec;
use super::common::{Boolean, Label};
use super::envelope::{Envelope, EnvelopeList, seq};

/// Storage state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageState {
    Online,
    Maintenance,
    Cloning,
    Backuping,
    Syncing,
    Error,
    #[serde(other)]
    Unknown,
}

impl StorageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageState::Online => "online",
            StorageState::Maintenance => "maintenance",
            StorageState::Cloning => "cloning",
            StorageState::Backuping => "backuping",
            StorageState::Syncing => "syncing",
            StorageState::Error => "error",
            StorageState::Unknown => "unknown",
        }
    }
}

/// Storage tier
pub mod tier {
    pub const HDD: &str = "hdd";
    pub const MAXIOPS: &str = "maxiops";
    pub const STANDARD: &str = "standard";
}

/// Storage type as used by list filters
pub mod kind {
    pub const NORMAL: &str = "normal";
    pub const BACKUP: &str = "backup";
    pub const CDROM: &str = "cdrom";
    pub const TEMPLATE: &str = "template";
}

/// Storage access level as used by list filters
pub mod access {
    pub const PUBLIC: &str = "public";
    pub const PRIVATE: &str = "private";
}

/// Automatic backup schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRule {
    /// `daily` or a weekday (`mon`, `tue`, ...)
    pub interval: String,
    /// `HHMM`
    pub time: String,
    #[serde(with = "codec::quoted")]
    pub retention: u32,
}

/// Storage as returned by the storage list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default)]
    pub access: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub encrypted: Boolean,
    #[serde(default)]
    pub license: f64,
    #[serde(default, with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub part_of_plan: String,
    #[serde(default, with = "codec::quoted")]
    pub progress: u32,
    #[serde(with = "codec::lenient")]
    pub size: u32,
    pub state: StorageState,
    #[serde(default)]
    pub template_type: String,
    #[serde(default)]
    pub tier: String,
    pub title: String,
    #[serde(rename = "type")]
    pub storage_type: String,
    pub uuid: String,
    #[serde(default)]
    pub zone: String,
    /// UUID of the storage a backup was taken from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(
        default,
        with = "codec::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
}

impl Envelope for Storage {
    const KEY: &'static str = "storage";
}

impl EnvelopeList for Storage {
    const LIST_KEY: &'static str = "storages";
}

/// Full storage description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageDetails {
    #[serde(flatten)]
    pub storage: Storage,
    #[serde(
        default,
        deserialize_with = "codec::empty_as_none::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub backup_rule: Option<BackupRule>,
    /// UUIDs of backups taken from this storage
    #[serde(default, with = "seq::backups")]
    pub backups: Vec<String>,
    /// UUIDs of servers the storage is attached to
    #[serde(default, rename = "servers", with = "seq::servers")]
    pub server_uuids: Vec<String>,
}

impl Envelope for StorageDetails {
    const KEY: &'static str = "storage";
}

/// Storage import source
pub mod import_source {
    pub const HTTP_IMPORT: &str = "http_import";
    pub const DIRECT_UPLOAD: &str = "direct_upload";
}

/// State of a storage import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageImportState {
    Prepared,
    Pending,
    Importing,
    Failed,
    Cancelling,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Progress of an import into a storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageImportDetails {
    #[serde(default)]
    pub client_content_length: u64,
    #[serde(default)]
    pub client_content_type: String,
    #[serde(
        default,
        with = "codec::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "codec::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub direct_upload_url: String,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub md5sum: String,
    #[serde(default)]
    pub read_bytes: u64,
    #[serde(default)]
    pub sha256sum: String,
    pub source: String,
    #[serde(default)]
    pub source_type: String,
    pub state: StorageImportState,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub written_bytes: u64,
}

impl Envelope for StorageImportDetails {
    const KEY: &'static str = "storage_import";
}

/// Backup taken before an offline filesystem resize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeStorageFilesystemBackup {
    #[serde(
        default,
        with = "codec::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    pub uuid: String,
}

impl Envelope for ResizeStorageFilesystemBackup {
    const KEY: &'static str = "resize_backup";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::{decode_list, decode_one};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_storages() {
        let body = br#"{
            "storages": {
                "storage": [
                    {"access":"private","license":0,"size":10,"state":"online","tier":"hdd","title":"Operating system disk","type":"normal","uuid":"01eff7ad-168e-413e-83b0-054f6a28fa23","zone":"uk-lon1"},
                    {"access":"private","license":0,"part_of_plan":"yes","size":50,"state":"backuping","tier":"maxiops","title":"Databases","type":"normal","uuid":"01f3286c-a5ea-4670-8121-d0b9767d625b","zone":"fi-hel1","labels":{"label":[{"key":"db","value":"pg"}]}}
                ]
            }
        }"#;
        let storages: Vec<Storage> = decode_list(body).unwrap();
        assert_eq!(storages.len(), 2);
        assert_eq!(storages[0].size, 10);
        assert_eq!(storages[0].state, StorageState::Online);
        assert_eq!(storages[1].state, StorageState::Backuping);
        assert_eq!(storages[1].labels, vec![Label::new("db", "pg")]);
    }

    #[test]
    fn test_decode_storage_details() {
        let body = br#"{
            "storage": {
                "access": "private",
                "backup_rule": {"interval": "daily", "time": "0400", "retention": "7"},
                "backups": {"backup": ["37c96670-4f51-4a01-a6f2-9c8c5b5d6f73"]},
                "license": 0,
                "servers": {"server": ["00798b85-efdc-41ca-8021-f6ef457b8531"]},
                "size": "10",
                "state": "online",
                "tier": "maxiops",
                "title": "Operating system disk",
                "type": "normal",
                "uuid": "01d4fcd4-e446-433b-8a9c-551a1284952e",
                "zone": "fi-hel1",
                "created": "2020-08-11T12:01:42Z"
            }
        }"#;
        let details: StorageDetails = decode_one(body).unwrap();
        assert_eq!(details.storage.size, 10);
        assert_eq!(
            details.backup_rule,
            Some(BackupRule {
                interval: "daily".to_string(),
                time: "0400".to_string(),
                retention: 7,
            })
        );
        assert_eq!(details.backups.len(), 1);
        assert_eq!(
            details.server_uuids,
            vec!["00798b85-efdc-41ca-8021-f6ef457b8531"]
        );
        assert!(details.storage.created.is_some());

        let encoded = serde_json::to_vec(&serde_json::json!({ "storage": details })).unwrap();
        let again: StorageDetails = decode_one(&encoded).unwrap();
        assert_eq!(again, details);
    }

    #[test]
    fn test_empty_backup_rule_is_none() {
        let body = br#"{"storage":{"backup_rule":"","size":10,"state":"online","title":"t","type":"normal","uuid":"u","servers":{"server":[]}}}"#;
        let details: StorageDetails = decode_one(body).unwrap();
        assert_eq!(details.backup_rule, None);
        assert!(details.server_uuids.is_empty());
    }

    #[test]
    fn test_decode_storage_import() {
        let body = br#"{"storage_import":{"client_content_length":0,"client_content_type":"","completed":"","created":"2020-08-11T12:01:42Z","direct_upload_url":"https://fi-hel1.img.upcloud.com/uploader/session/07a6c9a3","error_code":"","error_message":"","md5sum":"","read_bytes":0,"sha256sum":"","source":"direct_upload","source_type":"","state":"prepared","uuid":"07a6c9a3-300e-4d0e-b935-624f3dbdff3f","written_bytes":0}}"#;
        let import: StorageImportDetails = decode_one(body).unwrap();
        assert_eq!(import.state, StorageImportState::Prepared);
        assert_eq!(import.completed, None);
        assert!(import.created.is_some());
    }
}
