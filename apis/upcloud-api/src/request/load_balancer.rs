// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed load balancer requests
//!
//! Sub-resources (backends, members, resolvers, frontends, rules and TLS
//! configs) are addressed by name below the service UUID. Bodies are plain
//! JSON.

use http::Method;
use serde::Serialize;

use super::filter::{Page, QueryFilter, with_query};
use super::{Request, json};
use crate::types::{
    Label, LoadBalancerAction, LoadBalancerBackendMemberType, LoadBalancerBackendProperties,
    LoadBalancerCertificateBundleType, LoadBalancerConfiguredStatus,
    LoadBalancerFrontendNetwork, LoadBalancerFrontendProperties, LoadBalancerMatcher,
    LoadBalancerMatchingCondition, LoadBalancerMode, LoadBalancerNetworkType,
};

const BASE: &str = "/load-balancer";

fn service(uuid: &str) -> String {
    format!("{BASE}/{uuid}")
}

fn paged(path: String, page: Option<Page>) -> String {
    with_query(path, page.map(|p| p.query_params()).unwrap_or_default())
}

// Request bodies

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerNetworkSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: LoadBalancerNetworkType,
    /// `IPv4`
    pub family: String,
    /// Private network UUID, empty for public networks
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerTlsConfigSpec {
    pub name: String,
    pub certificate_bundle_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBalancerFrontendRuleSpec {
    pub name: String,
    pub priority: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_condition: Option<LoadBalancerMatchingCondition>,
    pub matchers: Vec<LoadBalancerMatcher>,
    pub actions: Vec<LoadBalancerAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBalancerFrontendSpec {
    pub name: String,
    pub mode: LoadBalancerMode,
    pub port: u16,
    pub default_backend: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<LoadBalancerFrontendRuleSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tls_configs: Vec<LoadBalancerTlsConfigSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<LoadBalancerFrontendProperties>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<LoadBalancerFrontendNetwork>,
}

/// Backend member; `enabled` is always sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerBackendMemberSpec {
    pub name: String,
    pub weight: u32,
    pub max_sessions: u32,
    #[serde(rename = "type")]
    pub member_type: LoadBalancerBackendMemberType,
    /// Address of a static member
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerBackendSpec {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resolver: String,
    pub members: Vec<LoadBalancerBackendMemberSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<LoadBalancerBackendProperties>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tls_configs: Vec<LoadBalancerTlsConfigSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerResolverSpec {
    pub name: String,
    pub nameservers: Vec<String>,
    pub retries: u32,
    pub timeout: u32,
    pub timeout_retry: u32,
    pub cache_valid: u32,
    pub cache_invalid: u32,
}

// Service

#[derive(Debug, Clone, Default)]
pub struct GetLoadBalancersRequest {
    pub page: Option<Page>,
}

impl Request for GetLoadBalancersRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        paged(BASE.to_string(), self.page)
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerRequest {
    pub uuid: String,
}

impl Request for GetLoadBalancerRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

/// Full load balancer definition, used by create and replace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBalancerSpec {
    pub name: String,
    pub plan: String,
    pub zone: String,
    pub configured_status: LoadBalancerConfiguredStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<LoadBalancerNetworkSpec>,
    pub frontends: Vec<LoadBalancerFrontendSpec>,
    pub backends: Vec<LoadBalancerBackendSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resolvers: Vec<LoadBalancerResolverSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub maintenance_dow: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub maintenance_time: String,
}

#[derive(Debug, Clone)]
pub struct CreateLoadBalancerRequest {
    pub load_balancer: LoadBalancerSpec,
}

impl Request for CreateLoadBalancerRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        BASE.to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.load_balancer)
    }
}

#[derive(Debug, Clone)]
pub struct ReplaceLoadBalancerRequest {
    pub uuid: String,
    pub load_balancer: LoadBalancerSpec,
}

impl Request for ReplaceLoadBalancerRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.load_balancer)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyLoadBalancerRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_status: Option<LoadBalancerConfiguredStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_dow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_time: Option<String>,
}

impl Request for ModifyLoadBalancerRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerRequest {
    pub uuid: String,
}

impl Request for DeleteLoadBalancerRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        service(&self.uuid)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetLoadBalancerPlansRequest {
    pub page: Option<Page>,
}

impl Request for GetLoadBalancerPlansRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        paged(format!("{BASE}/plans"), self.page)
    }
}

/// Rename a load balancer network
#[derive(Debug, Clone, Serialize)]
pub struct ModifyLoadBalancerNetworkRequest {
    #[serde(skip)]
    pub service_uuid: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name")]
    pub new_name: String,
}

impl Request for ModifyLoadBalancerNetworkRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/networks/{}", service(&self.service_uuid), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetLoadBalancerDnsChallengeDomainRequest;

impl Request for GetLoadBalancerDnsChallengeDomainRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/dns-challenge-domain")
    }
}

// Backends

#[derive(Debug, Clone)]
pub struct GetLoadBalancerBackendsRequest {
    pub service_uuid: String,
}

impl Request for GetLoadBalancerBackendsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/backends", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerBackendRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for GetLoadBalancerBackendRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/backends/{}", service(&self.service_uuid), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLoadBalancerBackendRequest {
    pub service_uuid: String,
    pub backend: LoadBalancerBackendSpec,
}

impl Request for CreateLoadBalancerBackendRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/backends", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.backend)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyLoadBalancerBackendRequest {
    #[serde(skip)]
    pub service_uuid: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<LoadBalancerBackendProperties>,
}

impl Request for ModifyLoadBalancerBackendRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/backends/{}", service(&self.service_uuid), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerBackendRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteLoadBalancerBackendRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/backends/{}", service(&self.service_uuid), self.name)
    }
}

// Backend members

fn members(service_uuid: &str, backend_name: &str) -> String {
    format!("{}/backends/{backend_name}/members", service(service_uuid))
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerBackendMembersRequest {
    pub service_uuid: String,
    pub backend_name: String,
}

impl Request for GetLoadBalancerBackendMembersRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        members(&self.service_uuid, &self.backend_name)
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerBackendMemberRequest {
    pub service_uuid: String,
    pub backend_name: String,
    pub name: String,
}

impl Request for GetLoadBalancerBackendMemberRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/{}", members(&self.service_uuid, &self.backend_name), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLoadBalancerBackendMemberRequest {
    pub service_uuid: String,
    pub backend_name: String,
    pub member: LoadBalancerBackendMemberSpec,
}

impl Request for CreateLoadBalancerBackendMemberRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        members(&self.service_uuid, &self.backend_name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.member)
    }
}

/// Patch a backend member; unset fields are left unchanged, `enabled`
/// is sent whenever it is set, including `false`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyLoadBalancerBackendMemberRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub backend_name: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sessions: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub member_type: Option<LoadBalancerBackendMemberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
}

impl Request for ModifyLoadBalancerBackendMemberRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/{}", members(&self.service_uuid, &self.backend_name), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerBackendMemberRequest {
    pub service_uuid: String,
    pub backend_name: String,
    pub name: String,
}

impl Request for DeleteLoadBalancerBackendMemberRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/{}", members(&self.service_uuid, &self.backend_name), self.name)
    }
}

// Resolvers

#[derive(Debug, Clone)]
pub struct GetLoadBalancerResolversRequest {
    pub service_uuid: String,
}

impl Request for GetLoadBalancerResolversRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/resolvers", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerResolverRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for GetLoadBalancerResolverRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/resolvers/{}", service(&self.service_uuid), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLoadBalancerResolverRequest {
    pub service_uuid: String,
    pub resolver: LoadBalancerResolverSpec,
}

impl Request for CreateLoadBalancerResolverRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/resolvers", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.resolver)
    }
}

#[derive(Debug, Clone)]
pub struct ModifyLoadBalancerResolverRequest {
    pub service_uuid: String,
    /// Current name
    pub name: String,
    pub resolver: LoadBalancerResolverSpec,
}

impl Request for ModifyLoadBalancerResolverRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/resolvers/{}", service(&self.service_uuid), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.resolver)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerResolverRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteLoadBalancerResolverRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/resolvers/{}", service(&self.service_uuid), self.name)
    }
}

// Frontends

#[derive(Debug, Clone)]
pub struct GetLoadBalancerFrontendsRequest {
    pub service_uuid: String,
}

impl Request for GetLoadBalancerFrontendsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/frontends", service(&self.service_uuid))
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerFrontendRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for GetLoadBalancerFrontendRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/frontends/{}", service(&self.service_uuid), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLoadBalancerFrontendRequest {
    pub service_uuid: String,
    pub frontend: LoadBalancerFrontendSpec,
}

impl Request for CreateLoadBalancerFrontendRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{}/frontends", service(&self.service_uuid))
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.frontend)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyLoadBalancerFrontendRequest {
    #[serde(skip)]
    pub service_uuid: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<LoadBalancerMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<LoadBalancerFrontendProperties>,
}

impl Request for ModifyLoadBalancerFrontendRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/frontends/{}", service(&self.service_uuid), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerFrontendRequest {
    pub service_uuid: String,
    pub name: String,
}

impl Request for DeleteLoadBalancerFrontendRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/frontends/{}", service(&self.service_uuid), self.name)
    }
}

// Frontend rules

fn rules(service_uuid: &str, frontend_name: &str) -> String {
    format!("{}/frontends/{frontend_name}/rules", service(service_uuid))
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerFrontendRulesRequest {
    pub service_uuid: String,
    pub frontend_name: String,
}

impl Request for GetLoadBalancerFrontendRulesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        rules(&self.service_uuid, &self.frontend_name)
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerFrontendRuleRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    pub name: String,
}

impl Request for GetLoadBalancerFrontendRuleRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/{}", rules(&self.service_uuid, &self.frontend_name), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLoadBalancerFrontendRuleRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    pub rule: LoadBalancerFrontendRuleSpec,
}

impl Request for CreateLoadBalancerFrontendRuleRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        rules(&self.service_uuid, &self.frontend_name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.rule)
    }
}

/// Replace a rule with its matchers and actions
#[derive(Debug, Clone)]
pub struct ReplaceLoadBalancerFrontendRuleRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    /// Current name
    pub name: String,
    pub rule: LoadBalancerFrontendRuleSpec,
}

impl Request for ReplaceLoadBalancerFrontendRuleRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("{}/{}", rules(&self.service_uuid, &self.frontend_name), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.rule)
    }
}

/// Rename or reprioritize a rule
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyLoadBalancerFrontendRuleRequest {
    #[serde(skip)]
    pub service_uuid: String,
    #[serde(skip)]
    pub frontend_name: String,
    /// Current name
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_condition: Option<LoadBalancerMatchingCondition>,
}

impl Request for ModifyLoadBalancerFrontendRuleRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/{}", rules(&self.service_uuid, &self.frontend_name), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerFrontendRuleRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    pub name: String,
}

impl Request for DeleteLoadBalancerFrontendRuleRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/{}", rules(&self.service_uuid, &self.frontend_name), self.name)
    }
}

// Frontend TLS configs

fn tls_configs(service_uuid: &str, frontend_name: &str) -> String {
    format!("{}/frontends/{frontend_name}/tls-configs", service(service_uuid))
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerFrontendTlsConfigsRequest {
    pub service_uuid: String,
    pub frontend_name: String,
}

impl Request for GetLoadBalancerFrontendTlsConfigsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        tls_configs(&self.service_uuid, &self.frontend_name)
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerFrontendTlsConfigRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    pub name: String,
}

impl Request for GetLoadBalancerFrontendTlsConfigRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{}/{}", tls_configs(&self.service_uuid, &self.frontend_name), self.name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLoadBalancerFrontendTlsConfigRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    pub config: LoadBalancerTlsConfigSpec,
}

impl Request for CreateLoadBalancerFrontendTlsConfigRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        tls_configs(&self.service_uuid, &self.frontend_name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.config)
    }
}

#[derive(Debug, Clone)]
pub struct ModifyLoadBalancerFrontendTlsConfigRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    /// Current name
    pub name: String,
    pub config: LoadBalancerTlsConfigSpec,
}

impl Request for ModifyLoadBalancerFrontendTlsConfigRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{}/{}", tls_configs(&self.service_uuid, &self.frontend_name), self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(&self.config)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerFrontendTlsConfigRequest {
    pub service_uuid: String,
    pub frontend_name: String,
    pub name: String,
}

impl Request for DeleteLoadBalancerFrontendTlsConfigRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{}/{}", tls_configs(&self.service_uuid, &self.frontend_name), self.name)
    }
}

// Certificate bundles

#[derive(Debug, Clone, Default)]
pub struct GetLoadBalancerCertificateBundlesRequest {
    pub page: Option<Page>,
}

impl Request for GetLoadBalancerCertificateBundlesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        paged(format!("{BASE}/certificate-bundles"), self.page)
    }
}

#[derive(Debug, Clone)]
pub struct GetLoadBalancerCertificateBundleRequest {
    pub uuid: String,
}

impl Request for GetLoadBalancerCertificateBundleRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("{BASE}/certificate-bundles/{}", self.uuid)
    }
}

/// Create a certificate bundle
///
/// `manual` bundles carry `certificate`, `intermediates` and
/// `private_key` (base64 PEM); `dynamic` bundles carry `hostnames` and
/// `key_type`; `authority` bundles carry only `certificate`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLoadBalancerCertificateBundleRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub bundle_type: LoadBalancerCertificateBundleType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub certificate: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub intermediates: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub private_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hostnames: Vec<String>,
}

impl Request for CreateLoadBalancerCertificateBundleRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("{BASE}/certificate-bundles")
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyLoadBalancerCertificateBundleRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostnames: Option<Vec<String>>,
}

impl Request for ModifyLoadBalancerCertificateBundleRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("{BASE}/certificate-bundles/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteLoadBalancerCertificateBundleRequest {
    pub uuid: String,
}

impl Request for DeleteLoadBalancerCertificateBundleRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("{BASE}/certificate-bundles/{}", self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfiguredStatus, StringMatcherMethod};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn body<R: Request>(r: &R) -> Value {
        serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            GetLoadBalancersRequest {
                page: Some(Page::DEFAULT)
            }
            .relative_url(),
            "/load-balancer?limit=100&offset=0"
        );
        assert_eq!(
            GetLoadBalancerBackendMemberRequest {
                service_uuid: "s".to_string(),
                backend_name: "be".to_string(),
                name: "m1".to_string(),
            }
            .relative_url(),
            "/load-balancer/s/backends/be/members/m1"
        );
        assert_eq!(
            DeleteLoadBalancerFrontendTlsConfigRequest {
                service_uuid: "s".to_string(),
                frontend_name: "fe".to_string(),
                name: "tls".to_string(),
            }
            .relative_url(),
            "/load-balancer/s/frontends/fe/tls-configs/tls"
        );
        assert_eq!(
            GetLoadBalancerDnsChallengeDomainRequest.relative_url(),
            "/load-balancer/dns-challenge-domain"
        );
    }

    #[test]
    fn test_modify_member_sends_enabled_false() {
        let r = ModifyLoadBalancerBackendMemberRequest {
            service_uuid: "s".to_string(),
            backend_name: "be".to_string(),
            name: "m1".to_string(),
            new_name: Some("m2".to_string()),
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(r.relative_url(), "/load-balancer/s/backends/be/members/m1");
        assert_eq!(body(&r), json!({"name": "m2", "enabled": false}));
    }

    #[test]
    fn test_create_rule_body() {
        let r = CreateLoadBalancerFrontendRuleRequest {
            service_uuid: "s".to_string(),
            frontend_name: "fe".to_string(),
            rule: LoadBalancerFrontendRuleSpec {
                name: "api".to_string(),
                priority: 10,
                matching_condition: Some(LoadBalancerMatchingCondition::And),
                matchers: vec![LoadBalancerMatcher::path(StringMatcherMethod::Starts, "/api")],
                actions: vec![LoadBalancerAction::use_backend("api-be")],
            },
        };
        assert_eq!(r.relative_url(), "/load-balancer/s/frontends/fe/rules");
        assert_eq!(
            body(&r),
            json!({
                "name": "api",
                "priority": 10,
                "matching_condition": "and",
                "matchers": [{"type": "path", "match_path": {"method": "starts", "value": "/api"}}],
                "actions": [{"type": "use_backend", "action_use_backend": {"backend": "api-be"}}]
            })
        );
    }

    #[test]
    fn test_create_load_balancer_body() {
        let r = CreateLoadBalancerRequest {
            load_balancer: LoadBalancerSpec {
                name: "lb".to_string(),
                plan: "development".to_string(),
                zone: "fi-hel1".to_string(),
                configured_status: ConfiguredStatus::Started,
                networks: vec![LoadBalancerNetworkSpec {
                    name: "public".to_string(),
                    network_type: LoadBalancerNetworkType::Public,
                    family: "IPv4".to_string(),
                    uuid: String::new(),
                }],
                frontends: Vec::new(),
                backends: vec![LoadBalancerBackendSpec {
                    name: "be".to_string(),
                    resolver: String::new(),
                    members: vec![LoadBalancerBackendMemberSpec {
                        name: "m1".to_string(),
                        weight: 100,
                        max_sessions: 1000,
                        member_type: LoadBalancerBackendMemberType::Static,
                        ip: "10.0.0.10".to_string(),
                        port: Some(80),
                        enabled: true,
                        backup: None,
                    }],
                    properties: None,
                    tls_configs: Vec::new(),
                }],
                resolvers: Vec::new(),
                labels: Vec::new(),
                maintenance_dow: String::new(),
                maintenance_time: String::new(),
            },
        };
        assert_eq!(r.relative_url(), "/load-balancer");
        assert_eq!(
            body(&r),
            json!({
                "name": "lb",
                "plan": "development",
                "zone": "fi-hel1",
                "configured_status": "started",
                "networks": [{"name": "public", "type": "public", "family": "IPv4"}],
                "frontends": [],
                "backends": [{
                    "name": "be",
                    "members": [{"name": "m1", "weight": 100, "max_sessions": 1000, "type": "static", "ip": "10.0.0.10", "port": 80, "enabled": true}]
                }]
            })
        );
    }
}
