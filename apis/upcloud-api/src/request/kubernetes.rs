// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed Kubernetes requests

use std::time::Duration;

use http::Method;
use serde::Serialize;

use super::filter::{Filter, filter_params, with_query};
use super::{Request, json};
use crate::types::{
    KubernetesKubeletArg, KubernetesStorageCustomPlan, KubernetesTaint, Label, Nullable,
};

const BASE: &str = "/kubernetes";

fn cluster(uuid: &str) -> String {
    format!("{BASE}/{uuid}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KubernetesNodeGroupSpec {
    pub name: String,
    pub count: u32,
    pub plan: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub anti_affinity: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kubelet_args: Vec<KubernetesKubeletArg>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
    /// Template storage UUID for the nodes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub taints: Vec<KubernetesTaint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utility_network_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_plan: Option<KubernetesStorageCustomPlan>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage_encryption: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetKubernetesClustersRequest {
    pub filters: Vec<Filter>,
}

impl Request for GetKubernetesClustersRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query(BASE, filter_params(&self.filters))
    }
}

#[derive(Debug, Clone)]
pub struct GetKubernetesClusterRequest {
    pub uuid: String,
}

impl Request for GetKubernetesClusterRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        cluster(&self.uuid)
    }
}

/// Create a cluster in an existing private network
///
/// `control_plane_ip_filter` is always sent; an empty list blocks all
/// access to the control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateKubernetesClusterRequest {
    pub name: String,
    pub network: String,
    pub network_cidr: String,
    pub zone: String,
    pub control_plane_ip_filter: Vec<String>,
    pub node_groups: Vec<KubernetesNodeGroupSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub private_node_groups: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage_encryption: String,
}

impl Request for CreateKubernetesClusterRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        BASE.to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyKubernetesClusterRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub labels: Nullable<Vec<Label>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub control_plane_ip_filter: Nullable<Vec<String>>,
}

impl Request for ModifyKubernetesClusterRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        cluster(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteKubernetesClusterRequest {
    pub uuid: String,
}

impl Request for DeleteKubernetesClusterRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        cluster(&self.uuid)
    }
}

/// Fetch an admin kubeconfig, valid for `ttl` when given
#[derive(Debug, Clone)]
pub struct GetKubernetesKubeconfigRequest {
    pub uuid: String,
    pub ttl: Option<Duration>,
}

impl Request for GetKubernetesKubeconfigRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        let params = self
            .ttl
            .map(|ttl| vec![("ttl".to_string(), ttl.as_secs().to_string())])
            .unwrap_or_default();
        with_query(format!("{}/kubeconfig", cluster(&self.uuid)), params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetKubernetesVersionsRequest;

impl Request for GetKubernetesVersionsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/versions")
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetKubernetesPlansRequest;

impl Request for GetKubernetesPlansRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/plans")
    }
}

// Node groups

#[derive(Debug, Clone)]
pub struct GetKubernetesNodeGroupsRequest {
    pub cluster_uuid: String,
}

impl Request for GetKubernetesNodeGroupsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/node-groups", cluster(&self.cluster_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetKubernetesNodeGroupRequest {
    pub cluster_uuid: String,
    pub name: String,
}

impl Request for GetKubernetesNodeGroupRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/node-groups/{}", cluster(&self.cluster_uuid), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateKubernetesNodeGroupRequest {
    pub cluster_uuid: String,
    pub node_group: KubernetesNodeGroupSpec,
}

impl Request for CreateKubernetesNodeGroupRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/node-groups", cluster(&self.cluster_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.node_group)
    }
}

/// Scale a node group
#[derive(Debug, Clone, Serialize)]
pub struct ModifyKubernetesNodeGroupRequest {
    #[serde(skip)]
    pub cluster_uuid: String,
    #[serde(skip)]
    pub name: String,
    pub count: u32,
}

impl Request for ModifyKubernetesNodeGroupRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/node-groups/{}", cluster(&self.cluster_uuid), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteKubernetesNodeGroupRequest {
    pub cluster_uuid: String,
    pub name: String,
}

impl Request for DeleteKubernetesNodeGroupRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/node-groups/{}", cluster(&self.cluster_uuid), self.name)
    }
}

/// Remove one node; the group shrinks by one
#[derive(Debug, Clone)]
pub struct DeleteKubernetesNodeGroupNodeRequest {
    pub cluster_uuid: String,
    pub node_group_name: String,
    pub node_name: String,
}

impl Request for DeleteKubernetesNodeGroupNodeRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!(
            "{}/node-groups/{}/{}",
            cluster(&self.cluster_uuid),
            self.node_group_name,
            self.node_name
        )
    }
}
