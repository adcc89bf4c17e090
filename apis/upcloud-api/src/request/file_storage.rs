// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed file storage requests

use http::Method;
use serde::Serialize;

use super::filter::{Page, QueryFilter, with_query};
use super::{Request, json};
use crate::types::{
    FileStorageConfiguredStatus, FileStorageShare, FileStorageShareAcl, Label, Nullable,
};

const BASE: &str = "/file-storage";

fn service(uuid: &str) -> String {
    format!("{BASE}/{uuid}")
}

/// Private network attachment; the address is allocated when left empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStorageNetworkSpec {
    pub uuid: String,
    pub name: String,
    /// `IPv4`
    pub family: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetFileStoragesRequest {
    pub page: Option<Page>,
}

impl Request for GetFileStoragesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query(BASE, self.page.map(|p| p.query_params()).unwrap_or_default())
    }
}

#[derive(Debug, Clone)]
pub struct GetFileStorageRequest {
    pub uuid: String,
}

impl Request for GetFileStorageRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFileStorageRequest {
    pub name: String,
    pub zone: String,
    pub size_gib: u32,
    pub configured_status: FileStorageConfiguredStatus,
    pub networks: Vec<FileStorageNetworkSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shares: Vec<FileStorageShare>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Request for CreateFileStorageRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        BASE.to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

/// Replace the whole definition; shares and networks not listed are removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceFileStorageRequest {
    #[serde(skip)]
    pub uuid: String,
    pub name: String,
    pub size_gib: u32,
    pub configured_status: FileStorageConfiguredStatus,
    pub networks: Vec<FileStorageNetworkSpec>,
    pub shares: Vec<FileStorageShare>,
    pub labels: Vec<Label>,
}

impl Request for ReplaceFileStorageRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

/// Partial update; `labels` set to [`Nullable::Null`] clears them
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyFileStorageRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_gib: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_status: Option<FileStorageConfiguredStatus>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub labels: Nullable<Vec<Label>>,
}

impl Request for ModifyFileStorageRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteFileStorageRequest {
    pub uuid: String,
}

impl Request for DeleteFileStorageRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

// Networks

#[derive(Debug, Clone)]
pub struct GetFileStorageNetworksRequest {
    pub service_uuid: String,
}

impl Request for GetFileStorageNetworksRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/networks", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetFileStorageNetworkRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for GetFileStorageNetworkRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/networks/{}", service(&self.service_uuid), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateFileStorageNetworkRequest {
    pub service_uuid: String,
    pub network: FileStorageNetworkSpec,
}

impl Request for CreateFileStorageNetworkRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/networks", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.network)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyFileStorageNetworkRequest {
    #[serde(skip)]
    pub service_uuid: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl Request for ModifyFileStorageNetworkRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/networks/{}", service(&self.service_uuid), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteFileStorageNetworkRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteFileStorageNetworkRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/networks/{}", service(&self.service_uuid), self.name)
    }
}

// Shares

#[derive(Debug, Clone)]
pub struct GetFileStorageSharesRequest {
    pub service_uuid: String,
}

impl Request for GetFileStorageSharesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/shares", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetFileStorageShareRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for GetFileStorageShareRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/shares/{}", service(&self.service_uuid), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateFileStorageShareRequest {
    pub service_uuid: String,
    pub share: FileStorageShare,
}

impl Request for CreateFileStorageShareRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/shares", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.share)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyFileStorageShareRequest {
    #[serde(skip)]
    pub service_uuid: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<Vec<FileStorageShareAcl>>,
}

impl Request for ModifyFileStorageShareRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/shares/{}", service(&self.service_uuid), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteFileStorageShareRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteFileStorageShareRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/shares/{}", service(&self.service_uuid), self.name)
    }
}
