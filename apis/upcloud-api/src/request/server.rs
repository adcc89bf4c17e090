// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server requests

use std::time::Duration;

use http::Method;
use serde::{Serialize, Serializer};
use strum::{Display, EnumString};

use super::filter::{Filter, filter_params, with_query};
use super::storage::DeleteBackups;
use super::{Request, enveloped};
use crate::types::envelope::seq;
use crate::types::{BackupRule, Boolean, IpAddressFamily, Label, NetworkType, codec};

#[derive(Debug, Clone, Default)]
pub struct GetServersRequest {
    pub filters: Vec<Filter>,
}

impl Request for GetServersRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query("/server", filter_params(&self.filters))
    }
}

#[derive(Debug, Clone)]
pub struct GetServerDetailsRequest {
    pub uuid: String,
}

impl Request for GetServerDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/server/{}", self.uuid)
    }
}

/// Available core / memory combinations
#[derive(Debug, Clone, Default)]
pub struct GetServerConfigurationsRequest;

impl Request for GetServerConfigurationsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/server_size".to_string()
    }
}

/// What to do with a storage device while creating a server
pub mod storage_device_action {
    pub const CREATE: &str = "create";
    pub const CLONE: &str = "clone";
    pub const ATTACH: &str = "attach";
}

/// Storage device of a new server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateServerStorageDevice {
    /// One of [`storage_device_action`]
    pub action: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub encrypted: Boolean,
    /// Source storage UUID for `clone` and `attach`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage: String,
    pub title: String,
    /// Size in GiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tier: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub device_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateServerIpAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<IpAddressFamily>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
}

impl CreateServerIpAddress {
    pub fn family(family: IpAddressFamily) -> Self {
        Self {
            family: Some(family),
            address: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateServerInterface {
    #[serde(with = "seq::ip_addresses")]
    pub ip_addresses: Vec<CreateServerIpAddress>,
    #[serde(rename = "type")]
    pub interface_type: NetworkType,
    /// Network UUID, required for private interfaces
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network: String,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub source_ip_filtering: Boolean,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub bootable: Boolean,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl CreateServerInterface {
    pub fn new(interface_type: NetworkType, family: IpAddressFamily) -> Self {
        Self {
            ip_addresses: vec![CreateServerIpAddress::family(family)],
            interface_type,
            network: String::new(),
            source_ip_filtering: Boolean::Unset,
            bootable: Boolean::Unset,
            index: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateServerNetworking {
    #[serde(with = "seq::interfaces")]
    pub interfaces: Vec<CreateServerInterface>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginUser {
    /// `yes` or `no`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub create_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(with = "seq::ssh_keys", skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
}

/// Create a server, body `{"server":{...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateServerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_host: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<u64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub boot_order: String,
    #[serde(with = "codec::quoted::option", skip_serializing_if = "Option::is_none")]
    pub core_number: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall: String,
    pub hostname: String,
    #[serde(with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_user: Option<LoginUser>,
    #[serde(with = "codec::quoted::option", skip_serializing_if = "Option::is_none")]
    pub memory_amount: Option<u32>,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub metadata: Boolean,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nic_model: String,
    pub networking: CreateServerNetworking,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password_delivery: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub server_group: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub simple_backup: String,
    #[serde(with = "seq::storage_devices")]
    pub storage_devices: Vec<CreateServerStorageDevice>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub video_model: String,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub remote_access_enabled: Boolean,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_access_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_access_password: String,
    pub zone: String,
}

impl Request for CreateServerRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/server".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("server", self)
    }
}

/// Modify a server; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModifyServerRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub boot_order: String,
    #[serde(with = "codec::quoted::option", skip_serializing_if = "Option::is_none")]
    pub core_number: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    #[serde(with = "seq::labels::option", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(with = "codec::quoted::option", skip_serializing_if = "Option::is_none")]
    pub memory_amount: Option<u32>,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub metadata: Boolean,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nic_model: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub simple_backup: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub video_model: String,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub remote_access_enabled: Boolean,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_access_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_access_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone: String,
}

impl Request for ModifyServerRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/server/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("server", self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteServerRequest {
    pub uuid: String,
}

impl Request for DeleteServerRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/server/{}", self.uuid)
    }
}

/// Delete a server together with its attached storages
#[derive(Debug, Clone)]
pub struct DeleteServerAndStoragesRequest {
    pub uuid: String,
    pub backups: Option<DeleteBackups>,
}

impl Request for DeleteServerAndStoragesRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        let mut params = vec![("storages".to_string(), "1".to_string())];
        if let Some(backups) = self.backups {
            params.push(("backups".to_string(), backups.to_string()));
        }
        with_query(format!("/server/{}", self.uuid), params)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StartServerRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_host: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<u64>,
}

impl Request for StartServerRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/start", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        if self.avoid_host.is_none() && self.host.is_none() {
            return Ok(None);
        }
        enveloped("server", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StopType {
    Soft,
    Hard,
}

/// Action taken when a soft stop of a restart times out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RestartTimeoutAction {
    Destroy,
    Ignore,
}

/// Timeout in whole seconds, sent as a string
fn seconds<S: Serializer>(timeout: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    match timeout {
        Some(t) => serializer.serialize_str(&t.as_secs().to_string()),
        None => serializer.serialize_none(),
    }
}

/// Stop a server, body `{"stop_server":{...}}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct StopServerRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<StopType>,
    #[serde(serialize_with = "seconds", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl Request for StopServerRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/stop", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("stop_server", self)
    }
}

/// Restart a server, body `{"restart_server":{...}}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct RestartServerRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<StopType>,
    #[serde(serialize_with = "seconds", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<RestartTimeoutAction>,
}

impl Request for RestartServerRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/restart", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("restart_server", self)
    }
}

/// Attach existing tags to a server
///
/// The tag names are joined with commas into the path without percent
/// encoding; the API expects them raw.
#[derive(Debug, Clone)]
pub struct TagServerRequest {
    pub uuid: String,
    pub tags: Vec<String>,
}

impl Request for TagServerRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/tag/{}", self.uuid, self.tags.join(","))
    }
}

#[derive(Debug, Clone)]
pub struct UntagServerRequest {
    pub uuid: String,
    pub tags: Vec<String>,
}

impl Request for UntagServerRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/untag/{}", self.uuid, self.tags.join(","))
    }
}

#[derive(Debug, Clone)]
pub struct GetServerNetworksRequest {
    pub server_uuid: String,
}

impl Request for GetServerNetworksRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/server/{}/networking", self.server_uuid)
    }
}

/// Add a network interface, body `{"interface":{...}}`
#[derive(Debug, Clone, Serialize)]
pub struct CreateNetworkInterfaceRequest {
    #[serde(skip)]
    pub server_uuid: String,
    #[serde(rename = "type")]
    pub interface_type: NetworkType,
    #[serde(rename = "network", skip_serializing_if = "String::is_empty")]
    pub network_uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(with = "seq::ip_addresses")]
    pub ip_addresses: Vec<CreateServerIpAddress>,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub source_ip_filtering: Boolean,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub bootable: Boolean,
}

impl Request for CreateNetworkInterfaceRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/networking/interface", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("interface", self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyNetworkInterfaceRequest {
    #[serde(skip)]
    pub server_uuid: String,
    #[serde(skip)]
    pub current_index: u32,
    #[serde(rename = "index", skip_serializing_if = "Option::is_none")]
    pub new_index: Option<u32>,
    #[serde(
        with = "seq::ip_addresses::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_addresses: Option<Vec<CreateServerIpAddress>>,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub source_ip_filtering: Boolean,
    #[serde(skip_serializing_if = "Boolean::is_unset")]
    pub bootable: Boolean,
}

impl Request for ModifyNetworkInterfaceRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!(
            "/server/{}/networking/interface/{}",
            self.server_uuid, self.current_index
        )
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("interface", self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteNetworkInterfaceRequest {
    pub server_uuid: String,
    pub index: u32,
}

impl Request for DeleteNetworkInterfaceRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!(
            "/server/{}/networking/interface/{}",
            self.server_uuid, self.index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::filter::{FilterLabel, FilterLabelKey};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn body<R: Request>(r: &R) -> Value {
        serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_get_servers_with_filters() {
        let r = GetServersRequest {
            filters: vec![
                FilterLabel::new("env", "test").into(),
                FilterLabelKey::new("owner").into(),
            ],
        };
        assert_eq!(r.relative_url(), "/server?label=env%3Dtest&label=owner");
        assert_eq!(GetServersRequest::default().relative_url(), "/server");
    }

    #[test]
    fn test_stop_server() {
        let r = StopServerRequest {
            uuid: "009d64ef-31d1-4684-a26b-c86c955cbf46".to_string(),
            stop_type: Some(StopType::Soft),
            timeout: Some(Duration::from_secs(60)),
        };
        assert_eq!(
            r.relative_url(),
            "/server/009d64ef-31d1-4684-a26b-c86c955cbf46/stop"
        );
        assert_eq!(
            body(&r),
            json!({"stop_server": {"stop_type": "soft", "timeout": "60"}})
        );
    }

    #[test]
    fn test_restart_server() {
        let r = RestartServerRequest {
            uuid: "u".to_string(),
            stop_type: Some(StopType::Hard),
            timeout: Some(Duration::from_secs(30)),
            timeout_action: Some(RestartTimeoutAction::Destroy),
        };
        assert_eq!(
            body(&r),
            json!({"restart_server": {"stop_type": "hard", "timeout": "30", "timeout_action": "destroy"}})
        );
    }

    #[test]
    fn test_start_server_body_only_when_host_set() {
        let r = StartServerRequest {
            uuid: "u".to_string(),
            ..Default::default()
        };
        assert!(r.body().unwrap().is_none());
        let r = StartServerRequest {
            uuid: "u".to_string(),
            host: Some(8055964291),
            ..Default::default()
        };
        assert_eq!(body(&r), json!({"server": {"host": 8055964291u64}}));
    }

    #[test]
    fn test_tag_server_keeps_raw_tags() {
        let r = TagServerRequest {
            uuid: "u".to_string(),
            tags: vec!["tag1".to_string(), "tag 2".to_string()],
        };
        assert_eq!(r.relative_url(), "/server/u/tag/tag1,tag 2");
        let r = UntagServerRequest {
            uuid: "u".to_string(),
            tags: vec!["tag1".to_string()],
        };
        assert_eq!(r.relative_url(), "/server/u/untag/tag1");
    }

    #[test]
    fn test_delete_server_and_storages() {
        let r = DeleteServerAndStoragesRequest {
            uuid: "u".to_string(),
            backups: None,
        };
        assert_eq!(r.relative_url(), "/server/u?storages=1");
        let r = DeleteServerAndStoragesRequest {
            uuid: "u".to_string(),
            backups: Some(DeleteBackups::KeepLatest),
        };
        assert_eq!(r.relative_url(), "/server/u?backups=keep_latest&storages=1");
    }

    #[test]
    fn test_modify_server_quotes_sizes() {
        let r = ModifyServerRequest {
            uuid: "u".to_string(),
            core_number: Some(2),
            memory_amount: Some(2048),
            labels: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(
            body(&r),
            json!({"server": {"core_number": "2", "memory_amount": "2048", "labels": {"label": []}}})
        );
    }

    #[test]
    fn test_network_interface_requests() {
        let r = CreateNetworkInterfaceRequest {
            server_uuid: "u".to_string(),
            interface_type: NetworkType::Private,
            network_uuid: "0374ce47".to_string(),
            index: Some(3),
            ip_addresses: vec![CreateServerIpAddress {
                family: Some(IpAddressFamily::IPv4),
                address: "10.0.0.20".to_string(),
            }],
            source_ip_filtering: Boolean::False,
            bootable: Boolean::Unset,
        };
        assert_eq!(r.relative_url(), "/server/u/networking/interface");
        assert_eq!(
            body(&r),
            json!({"interface": {
                "type": "private",
                "network": "0374ce47",
                "index": 3,
                "ip_addresses": {"ip_address": [{"family": "IPv4", "address": "10.0.0.20"}]},
                "source_ip_filtering": "no"
            }})
        );

        let r = ModifyNetworkInterfaceRequest {
            server_uuid: "u".to_string(),
            current_index: 3,
            new_index: Some(4),
            ..Default::default()
        };
        assert_eq!(r.relative_url(), "/server/u/networking/interface/3");
        assert_eq!(body(&r), json!({"interface": {"index": 4}}));
    }
}
