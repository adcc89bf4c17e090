// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed object storage requests

use http::Method;
use serde::Serialize;

use super::filter::{Page, QueryFilter, with_query};
use super::{Request, json};
use crate::types::{
    Label, ManagedObjectStorageConfiguredStatus, ManagedObjectStorageCustomDomain,
    ManagedObjectStorageNetwork, ManagedObjectStorageUserAccessKeyStatus,
};

const BASE: &str = "/object-storage-2";

fn service(uuid: &str) -> String {
    format!("{BASE}/{uuid}")
}

fn paged(path: String, page: Option<Page>) -> String {
    with_query(path, page.map(|p| p.query_params()).unwrap_or_default())
}

#[derive(Debug, Clone, Default)]
pub struct GetManagedObjectStorageRegionsRequest {
    pub page: Option<Page>,
}

impl Request for GetManagedObjectStorageRegionsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        paged(format!("{BASE}/regions"), self.page)
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageRegionRequest {
    pub name: String,
}

impl Request for GetManagedObjectStorageRegionRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/regions/{}", self.name)
    }
}

// Services

#[derive(Debug, Clone, Default)]
pub struct GetManagedObjectStoragesRequest {
    pub page: Option<Page>,
}

impl Request for GetManagedObjectStoragesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        paged(BASE.to_string(), self.page)
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageRequest {
    pub uuid: String,
}

impl Request for GetManagedObjectStorageRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateManagedObjectStorageRequest {
    pub name: String,
    pub region: String,
    pub configured_status: ManagedObjectStorageConfiguredStatus,
    pub networks: Vec<ManagedObjectStorageNetwork>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Request for CreateManagedObjectStorageRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        BASE.to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

/// Replace the service definition; omitted networks and labels are removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceManagedObjectStorageRequest {
    #[serde(skip)]
    pub uuid: String,
    pub name: String,
    pub configured_status: ManagedObjectStorageConfiguredStatus,
    pub networks: Vec<ManagedObjectStorageNetwork>,
    pub labels: Vec<Label>,
}

impl Request for ReplaceManagedObjectStorageRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyManagedObjectStorageRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_status: Option<ManagedObjectStorageConfiguredStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<ManagedObjectStorageNetwork>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
}

impl Request for ModifyManagedObjectStorageRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedObjectStorageRequest {
    pub uuid: String,
}

impl Request for DeleteManagedObjectStorageRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageBucketMetricsRequest {
    pub service_uuid: String,
}

impl Request for GetManagedObjectStorageBucketMetricsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/metrics/buckets", service(&self.service_uuid))
    }
}

// Networks

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageNetworksRequest {
    pub service_uuid: String,
}

impl Request for GetManagedObjectStorageNetworksRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/networks", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageNetworkRequest {
    pub service_uuid: String,
    pub network_name: String,
}

impl Request for GetManagedObjectStorageNetworkRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!(
            "{}/networks/{}",
            service(&self.service_uuid),
            self.network_name
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateManagedObjectStorageNetworkRequest {
    pub service_uuid: String,
    pub network: ManagedObjectStorageNetwork,
}

impl Request for CreateManagedObjectStorageNetworkRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/networks", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.network)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedObjectStorageNetworkRequest {
    pub service_uuid: String,
    pub network_name: String,
}

impl Request for DeleteManagedObjectStorageNetworkRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!(
            "{}/networks/{}",
            service(&self.service_uuid),
            self.network_name
        )
    }
}

// Users and access keys

fn user(service_uuid: &str, username: &str) -> String {
    format!("{}/users/{username}", service(service_uuid))
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageUsersRequest {
    pub service_uuid: String,
}

impl Request for GetManagedObjectStorageUsersRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/users", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageUserRequest {
    pub service_uuid: String,
    pub username: String,
}

impl Request for GetManagedObjectStorageUserRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        user(&self.service_uuid, &self.username)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateManagedObjectStorageUserRequest {
    #[serde(skip)]
    pub service_uuid: String,
    pub username: String,
}

impl Request for CreateManagedObjectStorageUserRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/users", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedObjectStorageUserRequest {
    pub service_uuid: String,
    pub username: String,
}

impl Request for DeleteManagedObjectStorageUserRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        user(&self.service_uuid, &self.username)
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageUserAccessKeysRequest {
    pub service_uuid: String,
    pub username: String,
}

impl Request for GetManagedObjectStorageUserAccessKeysRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/access-keys", user(&self.service_uuid, &self.username))
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageUserAccessKeyRequest {
    pub service_uuid: String,
    pub username: String,
    pub access_key_id: String,
}

impl Request for GetManagedObjectStorageUserAccessKeyRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!(
            "{}/access-keys/{}",
            user(&self.service_uuid, &self.username),
            self.access_key_id
        )
    }
}

/// Issue a new access key; the secret is only returned in this response
#[derive(Debug, Clone)]
pub struct CreateManagedObjectStorageUserAccessKeyRequest {
    pub service_uuid: String,
    pub username: String,
}

impl Request for CreateManagedObjectStorageUserAccessKeyRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/access-keys", user(&self.service_uuid, &self.username))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModifyManagedObjectStorageUserAccessKeyRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub username: String,
    #[serde(skip)]
    pub access_key_id: String,
    pub status: ManagedObjectStorageUserAccessKeyStatus,
}

impl Request for ModifyManagedObjectStorageUserAccessKeyRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!(
            "{}/access-keys/{}",
            user(&self.service_uuid, &self.username),
            self.access_key_id
        )
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedObjectStorageUserAccessKeyRequest {
    pub service_uuid: String,
    pub username: String,
    pub access_key_id: String,
}

impl Request for DeleteManagedObjectStorageUserAccessKeyRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!(
            "{}/access-keys/{}",
            user(&self.service_uuid, &self.username),
            self.access_key_id
        )
    }
}

// Policies

#[derive(Debug, Clone)]
pub struct GetManagedObjectStoragePoliciesRequest {
    pub service_uuid: String,
}

impl Request for GetManagedObjectStoragePoliciesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/policies", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStoragePolicyRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for GetManagedObjectStoragePolicyRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/policies/{}", service(&self.service_uuid), self.name)
    }
}

/// Create an IAM policy; `document` is the URL-encoded policy JSON
#[derive(Debug, Clone, Serialize)]
pub struct CreateManagedObjectStoragePolicyRequest {
    #[serde(skip)]
    pub service_uuid: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub document: String,
}

impl Request for CreateManagedObjectStoragePolicyRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/policies", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedObjectStoragePolicyRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteManagedObjectStoragePolicyRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/policies/{}", service(&self.service_uuid), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageUserPoliciesRequest {
    pub service_uuid: String,
    pub username: String,
}

impl Request for GetManagedObjectStorageUserPoliciesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/policies", user(&self.service_uuid, &self.username))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttachManagedObjectStorageUserPolicyRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub username: String,
    pub name: String,
}

impl Request for AttachManagedObjectStorageUserPolicyRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/policies", user(&self.service_uuid, &self.username))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DetachManagedObjectStorageUserPolicyRequest {
    pub service_uuid: String,
    pub username: String,
    pub name: String,
}

impl Request for DetachManagedObjectStorageUserPolicyRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!(
            "{}/policies/{}",
            user(&self.service_uuid, &self.username),
            self.name
        )
    }
}

// Custom domains

#[derive(Debug, Clone)]
pub struct GetManagedObjectStorageCustomDomainsRequest {
    pub service_uuid: String,
}

impl Request for GetManagedObjectStorageCustomDomainsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/custom-domains", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct CreateManagedObjectStorageCustomDomainRequest {
    pub service_uuid: String,
    pub domain: ManagedObjectStorageCustomDomain,
}

impl Request for CreateManagedObjectStorageCustomDomainRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/custom-domains", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.domain)
    }
}

#[derive(Debug, Clone)]
pub struct ModifyManagedObjectStorageCustomDomainRequest {
    pub service_uuid: String,
    /// Current domain name
    pub domain_name: String,
    pub domain: ManagedObjectStorageCustomDomain,
}

impl Request for ModifyManagedObjectStorageCustomDomainRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!(
            "{}/custom-domains/{}",
            service(&self.service_uuid),
            self.domain_name
        )
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.domain)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteManagedObjectStorageCustomDomainRequest {
    pub service_uuid: String,
    pub domain_name: String,
}

impl Request for DeleteManagedObjectStorageCustomDomainRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!(
            "{}/custom-domains/{}",
            service(&self.service_uuid),
            self.domain_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConfiguredStatus;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn body<R: Request>(r: &R) -> Value {
        serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_create_service() {
        let r = CreateManagedObjectStorageRequest {
            name: "example".to_string(),
            region: "europe-1".to_string(),
            configured_status: ConfiguredStatus::Started,
            networks: vec![ManagedObjectStorageNetwork {
                name: "public".to_string(),
                network_type: "public".to_string(),
                family: "IPv4".to_string(),
                uuid: String::new(),
                zone: String::new(),
            }],
            labels: vec![Label::new("managed-by", "team-one")],
        };
        assert_eq!(r.relative_url(), "/object-storage-2");
        assert_eq!(
            body(&r),
            json!({
                "name": "example",
                "region": "europe-1",
                "configured_status": "started",
                "networks": [{"name": "public", "type": "public", "family": "IPv4"}],
                "labels": [{"key": "managed-by", "value": "team-one"}]
            })
        );
    }

    #[test]
    fn test_user_policy_attachment() {
        let attach = AttachManagedObjectStorageUserPolicyRequest {
            service_uuid: "s".to_string(),
            username: "alice".to_string(),
            name: "ECSS3FullAccess".to_string(),
        };
        assert_eq!(AttachManagedObjectStorageUserPolicyRequest::METHOD, Method::POST);
        assert_eq!(attach.relative_url(), "/object-storage-2/s/users/alice/policies");
        assert_eq!(body(&attach), json!({"name": "ECSS3FullAccess"}));

        let detach = DetachManagedObjectStorageUserPolicyRequest {
            service_uuid: "s".to_string(),
            username: "alice".to_string(),
            name: "ECSS3FullAccess".to_string(),
        };
        assert_eq!(
            detach.relative_url(),
            "/object-storage-2/s/users/alice/policies/ECSS3FullAccess"
        );
    }

    #[test]
    fn test_access_key_status() {
        let r = ModifyManagedObjectStorageUserAccessKeyRequest {
            service_uuid: "s".to_string(),
            username: "alice".to_string(),
            access_key_id: "AKIA1".to_string(),
            status: ManagedObjectStorageUserAccessKeyStatus::Inactive,
        };
        assert_eq!(
            r.relative_url(),
            "/object-storage-2/s/users/alice/access-keys/AKIA1"
        );
        assert_eq!(body(&r), json!({"status": "Inactive"}));
        assert!(
            CreateManagedObjectStorageUserAccessKeyRequest {
                service_uuid: "s".to_string(),
                username: "alice".to_string(),
            }
            .body()
            .unwrap()
            .is_none()
        );
    }

    #[test]
    fn test_region_paging() {
        assert_eq!(
            GetManagedObjectStorageRegionsRequest {
                page: Some(Page::new(10, 2)),
            }
            .relative_url(),
            "/object-storage-2/regions?limit=10&offset=10"
        );
    }
}
