// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server types

use serde::{Deserialize, Serialize};

use super::codec;
use super::common::{Boolean, Label};
use super::envelope::{Envelope, EnvelopeList, seq};
use super::ip_address::IpAddress;
use super::network::Networking;

/// Server state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerState {
    Started,
    Stopped,
    Maintenance,
    Error,
    #[serde(other)]
    Unknown,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerState::Started => "started",
            ServerState::Stopped => "stopped",
            ServerState::Maintenance => "maintenance",
            ServerState::Error => "error",
            ServerState::Unknown => "unknown",
        }
    }
}

/// Server as returned by the server list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    #[serde(default, with = "codec::quoted")]
    pub core_number: u32,
    #[serde(default)]
    pub hostname: String,
    #[serde(default, with = "seq::labels")]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub license: f64,
    #[serde(default, with = "codec::quoted")]
    pub memory_amount: u32,
    #[serde(default)]
    pub plan: String,
    #[serde(default, with = "codec::quoted")]
    pub progress: u32,
    pub state: ServerState,
    #[serde(default, with = "seq::tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub title: String,
    pub uuid: String,
    #[serde(default)]
    pub zone: String,
}

impl Envelope for Server {
    const KEY: &'static str = "server";
}

impl EnvelopeList for Server {
    const LIST_KEY: &'static str = "servers";
}

/// Storage device attached to a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStorageDevice {
    /// Bus address, e.g. `virtio:0`
    pub address: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub part_of_plan: Boolean,
    #[serde(rename = "storage")]
    pub uuid: String,
    #[serde(default, rename = "storage_size", with = "codec::lenient")]
    pub size: u32,
    #[serde(default, rename = "storage_title")]
    pub title: String,
    /// `disk`, `cdrom` or `floppy`
    #[serde(default, rename = "type")]
    pub device_type: String,
    #[serde(default, with = "codec::quoted")]
    pub boot_disk: u32,
    #[serde(default, rename = "storage_tier", skip_serializing_if = "String::is_empty")]
    pub tier: String,
    #[serde(
        default,
        rename = "storage_encrypted",
        skip_serializing_if = "Boolean::is_unset"
    )]
    pub encrypted: Boolean,
}

/// Full server description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDetails {
    #[serde(flatten)]
    pub server: Server,
    #[serde(default)]
    pub boot_order: String,
    /// `on` or `off`
    #[serde(default)]
    pub firewall: String,
    #[serde(default, with = "codec::lenient")]
    pub host: u64,
    #[serde(default, with = "seq::ip_addresses")]
    pub ip_addresses: Vec<IpAddress>,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub metadata: Boolean,
    #[serde(default)]
    pub nic_model: String,
    #[serde(default)]
    pub networking: Networking,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server_group: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub simple_backup: String,
    #[serde(default, with = "seq::storage_devices")]
    pub storage_devices: Vec<ServerStorageDevice>,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub video_model: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub remote_access_enabled: Boolean,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remote_access_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remote_access_host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remote_access_password: String,
    #[serde(default, with = "codec::quoted")]
    pub remote_access_port: u32,
}

impl Envelope for ServerDetails {
    const KEY: &'static str = "server";
}

impl ServerDetails {
    /// Storage device at the given bus address
    pub fn storage_device(&self, address: &str) -> Option<&ServerStorageDevice> {
        self.storage_devices.iter().find(|d| d.address == address)
    }
}

/// Core / memory combination available for custom plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfiguration {
    #[serde(with = "codec::quoted")]
    pub core_number: u32,
    #[serde(with = "codec::quoted")]
    pub memory_amount: u32,
}

impl Envelope for ServerConfiguration {
    const KEY: &'static str = "server_size";
}

impl EnvelopeList for ServerConfiguration {
    const LIST_KEY: &'static str = "server_sizes";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::{decode_list, decode_one};
    use crate::types::ip_address::NetworkType;
    use pretty_assertions::assert_eq;

    const SERVERS: &str = r#"{
        "servers": {
            "server": [
                {
                    "core_number": "1",
                    "hostname": "server1.example.com",
                    "labels": {"label": [{"key": "env", "value": "test"}]},
                    "license": 0,
                    "memory_amount": "1024",
                    "plan": "1xCPU-1GB",
                    "plan_ipv4_bytes": "3565675343",
                    "plan_ipv6_bytes": "4534432",
                    "progress": "0",
                    "state": "started",
                    "tags": {"tag": ["PROD", "CentOS"]},
                    "title": "Server #1",
                    "uuid": "00798b85-efdc-41ca-8021-f6ef457b8531",
                    "zone": "fi-hel1"
                },
                {
                    "core_number": "1",
                    "hostname": "server2.example.com",
                    "license": 0,
                    "memory_amount": "1024",
                    "plan": "custom",
                    "state": "stopped",
                    "tags": {"tag": []},
                    "title": "Server #2",
                    "uuid": "009d64ef-31d1-4684-a26b-c86c955cbf46",
                    "zone": "fi-hel1"
                }
            ]
        }
    }"#;

    #[test]
    fn test_decode_servers() {
        let servers: Vec<Server> = decode_list(SERVERS.as_bytes()).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].core_number, 1);
        assert_eq!(servers[0].memory_amount, 1024);
        assert_eq!(servers[0].state, ServerState::Started);
        assert_eq!(servers[0].tags, vec!["PROD", "CentOS"]);
        assert_eq!(servers[0].labels, vec![Label::new("env", "test")]);
        assert_eq!(servers[1].state, ServerState::Stopped);
        assert!(servers[1].tags.is_empty());
        assert!(servers[1].labels.is_empty());
    }

    const SERVER_DETAILS: &str = r#"{
        "server": {
            "boot_order": "disk",
            "core_number": "2",
            "firewall": "on",
            "host": 7653311107,
            "hostname": "server1.example.com",
            "ip_addresses": {
                "ip_address": [
                    {"access": "private", "address": "10.0.0.00", "family": "IPv4"},
                    {"access": "public", "address": "0.0.0.0", "family": "IPv4", "part_of_plan": "yes"}
                ]
            },
            "license": 0,
            "memory_amount": "2048",
            "metadata": "yes",
            "networking": {
                "interfaces": {
                    "interface": [
                        {"index": 1, "ip_addresses": {"ip_address": [{"address": "94.237.0.207", "family": "IPv4", "floating": "no"}]}, "mac": "de:ff:ff:ff:66:89", "network": "037fcf2a-6745-45dd-867e-f9479ea8c044", "type": "public", "bootable": "no", "source_ip_filtering": "yes"}
                    ]
                }
            },
            "nic_model": "virtio",
            "plan": "2xCPU-4GB",
            "progress": "0",
            "remote_access_enabled": "yes",
            "remote_access_host": "fi-hel1.vnc.upcloud.com",
            "remote_access_password": "aabbccdd",
            "remote_access_port": "3000",
            "remote_access_type": "vnc",
            "simple_backup": "0100,dailies",
            "state": "started",
            "storage_devices": {
                "storage_device": [
                    {
                        "address": "virtio:0",
                        "part_of_plan": "yes",
                        "storage": "012580a1-32a1-466e-a323-689ca16f2d43",
                        "storage_size": 20,
                        "storage_title": "Storage for server1.example.com",
                        "type": "disk",
                        "boot_disk": "0",
                        "storage_tier": "maxiops",
                        "storage_encrypted": "no"
                    }
                ]
            },
            "tags": {"tag": ["DEV", "Ubuntu"]},
            "timezone": "UTC",
            "title": "server1.example.com",
            "uuid": "0077fa3d-32db-4b09-9f5f-30d9e9afb565",
            "video_model": "cirrus",
            "zone": "fi-hel1"
        }
    }"#;

    #[test]
    fn test_decode_server_details() {
        let details: ServerDetails = decode_one(SERVER_DETAILS.as_bytes()).unwrap();
        assert_eq!(details.server.uuid, "0077fa3d-32db-4b09-9f5f-30d9e9afb565");
        assert_eq!(details.server.core_number, 2);
        assert_eq!(details.host, 7653311107);
        assert_eq!(details.metadata, Boolean::True);
        assert_eq!(details.remote_access_port, 3000);
        assert_eq!(details.ip_addresses.len(), 2);
        assert_eq!(details.ip_addresses[1].part_of_plan, Boolean::True);
        assert_eq!(
            details.networking.interfaces[0].interface_type,
            NetworkType::Public
        );
        let disk = details.storage_device("virtio:0").unwrap();
        assert_eq!(disk.size, 20);
        assert_eq!(disk.tier, "maxiops");
        assert_eq!(disk.encrypted, Boolean::False);
    }

    #[test]
    fn test_server_details_round_trip() {
        let details: ServerDetails = decode_one(SERVER_DETAILS.as_bytes()).unwrap();
        let encoded = serde_json::to_vec(&serde_json::json!({ "server": details })).unwrap();
        let again: ServerDetails = decode_one(&encoded).unwrap();
        assert_eq!(again, details);
    }

    #[test]
    fn test_decode_server_configurations() {
        let body = br#"{"server_sizes":{"server_size":[{"core_number":"1","memory_amount":"1024"},{"core_number":"2","memory_amount":"2048"}]}}"#;
        let sizes: Vec<ServerConfiguration> = decode_list(body).unwrap();
        assert_eq!(sizes[1].core_number, 2);
        assert_eq!(sizes[1].memory_amount, 2048);
    }
}
