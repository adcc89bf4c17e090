// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Storage requests

use http::Method;
use serde::Serialize;
use strum::{Display, EnumString};

use super::filter::with_query;
use super::{Request, enveloped};
use crate::types::envelope::seq;
use crate::types::{BackupRule, Boolean, Label};

/// What happens to the backups of a deleted storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum DeleteBackups {
    Keep,
    KeepLatest,
    Delete,
}

/// List storages
///
/// At most one selector applies, checked in the order `access`,
/// `storage_type`, `favorite`; with none set every storage is listed.
#[derive(Debug, Clone, Default)]
pub struct GetStoragesRequest {
    /// `public` or `private`
    pub access: Option<String>,
    /// `normal`, `backup`, `cdrom` or `template`
    pub storage_type: Option<String>,
    pub favorite: bool,
}

impl Request for GetStoragesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        if let Some(access) = &self.access {
            format!("/storage/{access}")
        } else if let Some(storage_type) = &self.storage_type {
            format!("/storage/{storage_type}")
        } else if self.favorite {
            "/storage/favorite".to_string()
        } else {
            "/storage".to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetStorageDetailsRequest {
    pub uuid: String,
}

impl Request for GetStorageDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/storage/{}", self.uuid)
    }
}

/// Create an empty storage, body `{"storage":{...}}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateStorageRequest {
    #[serde(with = "crate::types::codec::quoted")]
    pub size: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tier: String,
    pub title: String,
    pub zone: String,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub encrypted: Boolean,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
    #[serde(with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Request for CreateStorageRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/storage".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage", self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyStorageRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(
        with = "crate::types::codec::quoted::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
    #[serde(with = "seq::labels::option", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
}

impl Request for ModifyStorageRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/storage/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage", self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteStorageRequest {
    pub uuid: String,
    pub backups: Option<DeleteBackups>,
}

impl Request for DeleteStorageRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        let params = self
            .backups
            .map(|b| vec![("backups".to_string(), b.to_string())])
            .unwrap_or_default();
        with_query(format!("/storage/{}", self.uuid), params)
    }
}

/// Attach a storage to a server, body `{"storage_device":{...}}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttachStorageRequest {
    #[serde(skip)]
    pub server_uuid: String,
    /// `disk` or `cdrom`
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub device_type: String,
    /// Bus address, assigned by the API when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(rename = "storage")]
    pub storage_uuid: String,
    #[serde(
        with = "crate::types::codec::quoted::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub boot_disk: Option<u32>,
}

impl Request for AttachStorageRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/storage/attach", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage_device", self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DetachStorageRequest {
    #[serde(skip)]
    pub server_uuid: String,
    pub address: String,
}

impl Request for DetachStorageRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/storage/detach", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage_device", self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadCdromRequest {
    #[serde(skip)]
    pub server_uuid: String,
    #[serde(rename = "storage")]
    pub storage_uuid: String,
}

impl Request for LoadCdromRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/cdrom/load", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage_device", self)
    }
}

#[derive(Debug, Clone)]
pub struct EjectCdromRequest {
    pub server_uuid: String,
}

impl Request for EjectCdromRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/cdrom/eject", self.server_uuid)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CloneStorageRequest {
    #[serde(skip)]
    pub uuid: String,
    pub zone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tier: String,
    pub title: String,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub encrypted: Boolean,
}

impl Request for CloneStorageRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/storage/{}/clone", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage", self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplatizeStorageRequest {
    #[serde(skip)]
    pub uuid: String,
    pub title: String,
}

impl Request for TemplatizeStorageRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/storage/{}/templatize", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage", self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBackupRequest {
    #[serde(skip)]
    pub uuid: String,
    pub title: String,
}

impl Request for CreateBackupRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/storage/{}/backup", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage", self)
    }
}

/// Restore a backup over the storage it was taken from
#[derive(Debug, Clone)]
pub struct RestoreBackupRequest {
    pub uuid: String,
}

impl Request for RestoreBackupRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/storage/{}/restore", self.uuid)
    }
}

/// Cancel a running clone or backup
#[derive(Debug, Clone)]
pub struct CancelOperationRequest {
    pub uuid: String,
}

impl Request for CancelOperationRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/storage/{}/cancel", self.uuid)
    }
}

/// Start an import into a storage, body `{"storage_import":{...}}`
#[derive(Debug, Clone, Serialize)]
pub struct CreateStorageImportRequest {
    #[serde(skip)]
    pub storage_uuid: String,
    /// One of [`crate::types::import_source`]
    pub source: String,
    /// URL for `http_import`, unused for `direct_upload`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_location: String,
}

impl Request for CreateStorageImportRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/storage/{}/import", self.storage_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("storage_import", self)
    }
}

#[derive(Debug, Clone)]
pub struct GetStorageImportDetailsRequest {
    pub uuid: String,
}

impl Request for GetStorageImportDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/storage/{}/import", self.uuid)
    }
}

/// Grow the last partition and filesystem after a storage resize
#[derive(Debug, Clone)]
pub struct ResizeStorageFilesystemRequest {
    pub uuid: String,
}

impl Request for ResizeStorageFilesystemRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/storage/{}/resize", self.uuid)
    }
}
