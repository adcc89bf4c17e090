// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server group types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::common::Label;
use super::envelope::{Envelope, EnvelopeList, seq};

/// Placement policy of a server group
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AntiAffinityPolicy {
    /// Place members on separate hosts, failing creation when impossible
    Strict,
    /// Best effort
    Yes,
    #[default]
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AntiAffinityStatus {
    Met,
    Unmet,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroupMemberStatus {
    #[serde(rename = "uuid")]
    pub server_uuid: String,
    pub status: AntiAffinityStatus,
}

/// Group of servers with a shared placement policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroup {
    #[serde(default, rename = "anti_affinity")]
    pub anti_affinity_policy: AntiAffinityPolicy,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anti_affinity_status: Vec<ServerGroupMemberStatus>,
    #[serde(default, with = "seq::labels")]
    pub labels: Vec<Label>,
    /// UUIDs of member servers
    #[serde(default, rename = "servers", with = "seq::servers")]
    pub members: Vec<String>,
    pub title: String,
    pub uuid: String,
}

impl Envelope for ServerGroup {
    const KEY: &'static str = "server_group";
}

impl EnvelopeList for ServerGroup {
    const LIST_KEY: &'static str = "server_groups";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::decode_list;

    #[test]
    fn test_decode_server_groups() {
        let body = br#"{
            "server_groups": {
                "server_group": [
                    {
                        "anti_affinity": "strict",
                        "anti_affinity_status": [
                            {"uuid": "00b5bd4b-be0d-4f37-a5c4-c3b5a4bd10e3", "status": "met"},
                            {"uuid": "0003a0b4-20ba-4e86-8b0f-47e15ef1b6e7", "status": "unmet"}
                        ],
                        "labels": {"label": [{"key": "managedBy", "value": "upcloud-go-sdk-unit-test"}]},
                        "servers": {"server": ["00b5bd4b-be0d-4f37-a5c4-c3b5a4bd10e3", "0003a0b4-20ba-4e86-8b0f-47e15ef1b6e7"]},
                        "title": "test-title",
                        "uuid": "0b1b0fd1-d4e2-4c2e-a9ca-10c6b39ba5e7"
                    }
                ]
            }
        }"#;
        let groups: Vec<ServerGroup> = decode_list(body).unwrap();
        let group = &groups[0];
        assert_eq!(group.anti_affinity_policy, AntiAffinityPolicy::Strict);
        assert_eq!(group.members.len(), 2);
        assert_eq!(group.anti_affinity_status[1].status, AntiAffinityStatus::Unmet);
        assert_eq!(group.labels.len(), 1);
    }
}
