// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed Kubernetes operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    CreateKubernetesClusterRequest, CreateKubernetesNodeGroupRequest,
    DeleteKubernetesClusterRequest, DeleteKubernetesNodeGroupNodeRequest,
    DeleteKubernetesNodeGroupRequest, GetKubernetesClusterRequest, GetKubernetesClustersRequest,
    GetKubernetesKubeconfigRequest, GetKubernetesNodeGroupRequest, GetKubernetesNodeGroupsRequest,
    GetKubernetesPlansRequest, GetKubernetesVersionsRequest, ModifyKubernetesClusterRequest,
    ModifyKubernetesNodeGroupRequest,
};
use upcloud_api::types::{
    KubernetesCluster, KubernetesClusterState, KubernetesKubeconfig, KubernetesNodeGroup,
    KubernetesNodeGroupDetails, KubernetesNodeGroupState, KubernetesPlan, KubernetesVersion,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Clusters
    // ========================================================================

    pub async fn get_kubernetes_clusters(
        &self,
        r: &GetKubernetesClustersRequest,
    ) -> Result<Vec<KubernetesCluster>> {
        self.json(r).await
    }

    pub async fn get_kubernetes_cluster(
        &self,
        r: &GetKubernetesClusterRequest,
    ) -> Result<KubernetesCluster> {
        self.json(r).await
    }

    pub async fn create_kubernetes_cluster(
        &self,
        r: &CreateKubernetesClusterRequest,
    ) -> Result<KubernetesCluster> {
        self.json(r).await
    }

    pub async fn modify_kubernetes_cluster(
        &self,
        r: &ModifyKubernetesClusterRequest,
    ) -> Result<KubernetesCluster> {
        self.json(r).await
    }

    pub async fn delete_kubernetes_cluster(
        &self,
        r: &DeleteKubernetesClusterRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    /// Admin kubeconfig, optionally limited by a TTL
    pub async fn get_kubernetes_kubeconfig(
        &self,
        r: &GetKubernetesKubeconfigRequest,
    ) -> Result<KubernetesKubeconfig> {
        self.json(r).await
    }

    pub async fn get_kubernetes_versions(&self) -> Result<Vec<KubernetesVersion>> {
        self.json(&GetKubernetesVersionsRequest).await
    }

    pub async fn get_kubernetes_plans(&self) -> Result<Vec<KubernetesPlan>> {
        self.json(&GetKubernetesPlansRequest).await
    }

    /// Wait for a cluster to reach `desired`; `failed` ends the wait early
    pub async fn wait_for_kubernetes_cluster_state(
        &self,
        uuid: &str,
        desired: KubernetesClusterState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<KubernetesCluster> {
        let request = GetKubernetesClusterRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "kubernetes cluster",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_kubernetes_cluster(&request),
            |cluster| cluster.state,
        )
        .await
    }

    // ========================================================================
    // Node groups
    // ========================================================================

    pub async fn get_kubernetes_node_groups(
        &self,
        r: &GetKubernetesNodeGroupsRequest,
    ) -> Result<Vec<KubernetesNodeGroup>> {
        self.json(r).await
    }

    pub async fn get_kubernetes_node_group(
        &self,
        r: &GetKubernetesNodeGroupRequest,
    ) -> Result<KubernetesNodeGroupDetails> {
        self.json(r).await
    }

    pub async fn create_kubernetes_node_group(
        &self,
        r: &CreateKubernetesNodeGroupRequest,
    ) -> Result<KubernetesNodeGroup> {
        self.json(r).await
    }

    /// Only the node count can change after creation
    pub async fn modify_kubernetes_node_group(
        &self,
        r: &ModifyKubernetesNodeGroupRequest,
    ) -> Result<KubernetesNodeGroup> {
        self.json(r).await
    }

    pub async fn delete_kubernetes_node_group(
        &self,
        r: &DeleteKubernetesNodeGroupRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    /// Remove one node; the group replaces it unless its count is lowered first
    pub async fn delete_kubernetes_node_group_node(
        &self,
        r: &DeleteKubernetesNodeGroupNodeRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    /// Wait for a node group to reach `desired`; `failed` ends the wait early
    ///
    /// Node groups are addressed by cluster and name, so the id carried in
    /// a [`WaitError`](crate::WaitError) is `cluster/name`.
    pub async fn wait_for_kubernetes_node_group_state(
        &self,
        cluster_uuid: &str,
        name: &str,
        desired: KubernetesNodeGroupState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<KubernetesNodeGroupDetails> {
        let request = GetKubernetesNodeGroupRequest {
            cluster_uuid: cluster_uuid.to_string(),
            name: name.to_string(),
        };
        let id = format!("{cluster_uuid}/{name}");
        self.wait_for(
            Target {
                resource: "kubernetes node group",
                id: &id,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_kubernetes_node_group(&request),
            |details| details.node_group.state,
        )
        .await
    }
}
