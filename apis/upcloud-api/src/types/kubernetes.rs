// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed Kubernetes types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::common::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KubernetesClusterState {
    Pending,
    Running,
    Terminating,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KubernetesNodeGroupState {
    Pending,
    Running,
    ScalingUp,
    ScalingDown,
    Terminating,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KubernetesClusterTaintEffect {
    NoExecute,
    NoSchedule,
    PreferNoSchedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesTaint {
    pub effect: KubernetesClusterTaintEffect,
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesKubeletArg {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesStorageCustomPlan {
    pub cores: u32,
    pub memory: u32,
    pub storage_size: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_tier: String,
}

/// Worker node of a node group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesNode {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesNodeGroup {
    pub name: String,
    pub count: u32,
    pub plan: String,
    pub state: KubernetesNodeGroupState,
    #[serde(default)]
    pub anti_affinity: bool,
    #[serde(default)]
    pub kubelet_args: Vec<KubernetesKubeletArg>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub ssh_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage: String,
    #[serde(default)]
    pub taints: Vec<KubernetesTaint>,
    #[serde(default)]
    pub utility_network_access: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_plan: Option<KubernetesStorageCustomPlan>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_encryption: String,
}

/// Node group with its nodes, as returned by the node group details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesNodeGroupDetails {
    #[serde(flatten)]
    pub node_group: KubernetesNodeGroup,
    #[serde(default)]
    pub nodes: Vec<KubernetesNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesCluster {
    pub uuid: String,
    pub name: String,
    pub zone: String,
    pub network: String,
    #[serde(default)]
    pub network_cidr: String,
    pub state: KubernetesClusterState,
    #[serde(default)]
    pub control_plane_ip_filter: Vec<String>,
    #[serde(default)]
    pub node_groups: Vec<KubernetesNodeGroup>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub private_node_groups: bool,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_encryption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesVersion {
    pub id: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesPlan {
    pub name: String,
    #[serde(default)]
    pub server_number: u32,
    #[serde(default)]
    pub max_nodes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesKubeconfig {
    pub kubeconfig: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_cluster() {
        let cluster: KubernetesCluster = serde_json::from_value(json!({
            "control_plane_ip_filter": ["0.0.0.0/0"],
            "name": "test-name",
            "network": "03a98be3-7daa-443f-bb25-4bc6854b396c",
            "network_cidr": "172.16.1.0/24",
            "node_groups": [{
                "count": 4,
                "labels": [{"key": "managedBy", "value": "upcloud-go-sdk-unit-test"}],
                "name": "upcloud-go-sdk-unit-test",
                "plan": "2xCPU-4GB",
                "state": "scaling-up",
                "taints": [{"effect": "NoExecute", "key": "key1", "value": "value1"}],
                "kubelet_args": [{"key": "somekubeletkey", "value": "somekubeletvalue"}],
                "anti_affinity": true,
                "utility_network_access": true
            }],
            "state": "running",
            "uuid": "0ddab8f4-97c0-4222-91ba-85a4fff7499b",
            "zone": "de-fra1",
            "plan": "development",
            "private_node_groups": false,
            "version": "1.26"
        }))
        .unwrap();
        assert_eq!(cluster.state, KubernetesClusterState::Running);
        let group = &cluster.node_groups[0];
        assert_eq!(group.state, KubernetesNodeGroupState::ScalingUp);
        assert_eq!(group.taints[0].effect, KubernetesClusterTaintEffect::NoExecute);
        assert!(group.anti_affinity);
    }

    #[test]
    fn test_decode_node_group_details() {
        let details: KubernetesNodeGroupDetails = serde_json::from_value(json!({
            "count": 1,
            "name": "default",
            "plan": "2xCPU-4GB",
            "state": "running",
            "nodes": [{"uuid": "00c1a5a5-7b58-4bd5-9a25-4ef6e76b2ac6", "name": "default-x8dxm", "state": "running"}]
        }))
        .unwrap();
        assert_eq!(details.node_group.count, 1);
        assert_eq!(details.nodes[0].name, "default-x8dxm");
    }
}
