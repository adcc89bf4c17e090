// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IP address requests

use http::Method;
use serde::Serialize;

use super::{Request, enveloped};
use crate::types::{Boolean, IpAddressFamily, NetworkType};

#[derive(Debug, Clone, Default)]
pub struct GetIpAddressesRequest;

impl Request for GetIpAddressesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/ip_address".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GetIpAddressDetailsRequest {
    pub address: String,
}

impl Request for GetIpAddressDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/ip_address/{}", self.address)
    }
}

/// Assign a new address, either to a server or as a floating address
/// bound to a MAC address
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssignIpAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<NetworkType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<IpAddressFamily>,
    #[serde(rename = "server", skip_serializing_if = "String::is_empty")]
    pub server_uuid: String,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub floating: Boolean,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mac: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone: String,
}

impl Request for AssignIpAddressRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/ip_address".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("ip_address", self)
    }
}

/// Change the reverse DNS name, or move a floating address by MAC
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyIpAddressRequest {
    #[serde(skip)]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ptr_record: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mac: String,
}

impl Request for ModifyIpAddressRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/ip_address/{}", self.address)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("ip_address", self)
    }
}

#[derive(Debug, Clone)]
pub struct ReleaseIpAddressRequest {
    pub address: String,
}

impl Request for ReleaseIpAddressRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/ip_address/{}", self.address)
    }
}
