// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed load balancer operations

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use upcloud_api::request::{
    CreateLoadBalancerBackendMemberRequest, CreateLoadBalancerBackendRequest,
    CreateLoadBalancerCertificateBundleRequest, CreateLoadBalancerFrontendRequest,
    CreateLoadBalancerFrontendRuleRequest, CreateLoadBalancerFrontendTlsConfigRequest,
    CreateLoadBalancerRequest, CreateLoadBalancerResolverRequest,
    DeleteLoadBalancerBackendMemberRequest, DeleteLoadBalancerBackendRequest,
    DeleteLoadBalancerCertificateBundleRequest, DeleteLoadBalancerFrontendRequest,
    DeleteLoadBalancerFrontendRuleRequest, DeleteLoadBalancerFrontendTlsConfigRequest,
    DeleteLoadBalancerRequest, DeleteLoadBalancerResolverRequest,
    GetLoadBalancerBackendMemberRequest, GetLoadBalancerBackendMembersRequest,
    GetLoadBalancerBackendRequest, GetLoadBalancerBackendsRequest,
    GetLoadBalancerCertificateBundleRequest, GetLoadBalancerCertificateBundlesRequest,
    GetLoadBalancerDnsChallengeDomainRequest, GetLoadBalancerFrontendRequest,
    GetLoadBalancerFrontendRuleRequest, GetLoadBalancerFrontendRulesRequest,
    GetLoadBalancerFrontendTlsConfigRequest, GetLoadBalancerFrontendTlsConfigsRequest,
    GetLoadBalancerFrontendsRequest, GetLoadBalancerPlansRequest, GetLoadBalancerRequest,
    GetLoadBalancerResolverRequest, GetLoadBalancerResolversRequest, GetLoadBalancersRequest,
    ModifyLoadBalancerBackendMemberRequest, ModifyLoadBalancerBackendRequest,
    ModifyLoadBalancerCertificateBundleRequest, ModifyLoadBalancerFrontendRequest,
    ModifyLoadBalancerFrontendRuleRequest, ModifyLoadBalancerFrontendTlsConfigRequest,
    ModifyLoadBalancerNetworkRequest, ModifyLoadBalancerRequest, ModifyLoadBalancerResolverRequest,
    ReplaceLoadBalancerFrontendRuleRequest, ReplaceLoadBalancerRequest,
};
use upcloud_api::types::{
    LoadBalancer, LoadBalancerBackend, LoadBalancerBackendMember, LoadBalancerCertificateBundle,
    LoadBalancerDnsChallengeDomain, LoadBalancerFrontend, LoadBalancerFrontendRule,
    LoadBalancerFrontendTlsConfig, LoadBalancerNetwork, LoadBalancerOperationalState,
    LoadBalancerPlan, LoadBalancerResolver,
};

use crate::Client;
use crate::error::Result;
use crate::wait::Target;

impl Client {
    // ========================================================================
    // Load balancers
    // ========================================================================

    pub async fn get_load_balancers(
        &self,
        r: &GetLoadBalancersRequest,
    ) -> Result<Vec<LoadBalancer>> {
        self.json(r).await
    }

    pub async fn get_load_balancer(&self, r: &GetLoadBalancerRequest) -> Result<LoadBalancer> {
        self.json(r).await
    }

    pub async fn create_load_balancer(
        &self,
        r: &CreateLoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        self.json(r).await
    }

    /// Replace the whole definition, including frontends and backends
    pub async fn replace_load_balancer(
        &self,
        r: &ReplaceLoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        self.json(r).await
    }

    pub async fn modify_load_balancer(
        &self,
        r: &ModifyLoadBalancerRequest,
    ) -> Result<LoadBalancer> {
        self.json(r).await
    }

    pub async fn delete_load_balancer(&self, r: &DeleteLoadBalancerRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_load_balancer_plans(
        &self,
        r: &GetLoadBalancerPlansRequest,
    ) -> Result<Vec<LoadBalancerPlan>> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_network(
        &self,
        r: &ModifyLoadBalancerNetworkRequest,
    ) -> Result<LoadBalancerNetwork> {
        self.json(r).await
    }

    /// Wait for a load balancer to reach `desired`
    pub async fn wait_for_load_balancer_operational_state(
        &self,
        uuid: &str,
        desired: LoadBalancerOperationalState,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<LoadBalancer> {
        let request = GetLoadBalancerRequest {
            uuid: uuid.to_string(),
        };
        self.wait_for(
            Target {
                resource: "load balancer",
                id: uuid,
                state: desired,
                timeout,
            },
            cancel,
            || self.get_load_balancer(&request),
            |lb| lb.operational_state,
        )
        .await
    }

    // ========================================================================
    // Backends
    // ========================================================================

    pub async fn get_load_balancer_backends(
        &self,
        r: &GetLoadBalancerBackendsRequest,
    ) -> Result<Vec<LoadBalancerBackend>> {
        self.json(r).await
    }

    pub async fn get_load_balancer_backend(
        &self,
        r: &GetLoadBalancerBackendRequest,
    ) -> Result<LoadBalancerBackend> {
        self.json(r).await
    }

    pub async fn create_load_balancer_backend(
        &self,
        r: &CreateLoadBalancerBackendRequest,
    ) -> Result<LoadBalancerBackend> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_backend(
        &self,
        r: &ModifyLoadBalancerBackendRequest,
    ) -> Result<LoadBalancerBackend> {
        self.json(r).await
    }

    pub async fn delete_load_balancer_backend(
        &self,
        r: &DeleteLoadBalancerBackendRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_load_balancer_backend_members(
        &self,
        r: &GetLoadBalancerBackendMembersRequest,
    ) -> Result<Vec<LoadBalancerBackendMember>> {
        self.json(r).await
    }

    pub async fn get_load_balancer_backend_member(
        &self,
        r: &GetLoadBalancerBackendMemberRequest,
    ) -> Result<LoadBalancerBackendMember> {
        self.json(r).await
    }

    pub async fn create_load_balancer_backend_member(
        &self,
        r: &CreateLoadBalancerBackendMemberRequest,
    ) -> Result<LoadBalancerBackendMember> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_backend_member(
        &self,
        r: &ModifyLoadBalancerBackendMemberRequest,
    ) -> Result<LoadBalancerBackendMember> {
        self.json(r).await
    }

    pub async fn delete_load_balancer_backend_member(
        &self,
        r: &DeleteLoadBalancerBackendMemberRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Resolvers
    // ========================================================================

    pub async fn get_load_balancer_resolvers(
        &self,
        r: &GetLoadBalancerResolversRequest,
    ) -> Result<Vec<LoadBalancerResolver>> {
        self.json(r).await
    }

    pub async fn get_load_balancer_resolver(
        &self,
        r: &GetLoadBalancerResolverRequest,
    ) -> Result<LoadBalancerResolver> {
        self.json(r).await
    }

    pub async fn create_load_balancer_resolver(
        &self,
        r: &CreateLoadBalancerResolverRequest,
    ) -> Result<LoadBalancerResolver> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_resolver(
        &self,
        r: &ModifyLoadBalancerResolverRequest,
    ) -> Result<LoadBalancerResolver> {
        self.json(r).await
    }

    pub async fn delete_load_balancer_resolver(
        &self,
        r: &DeleteLoadBalancerResolverRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Frontends
    // ========================================================================

    pub async fn get_load_balancer_frontends(
        &self,
        r: &GetLoadBalancerFrontendsRequest,
    ) -> Result<Vec<LoadBalancerFrontend>> {
        self.json(r).await
    }

    pub async fn get_load_balancer_frontend(
        &self,
        r: &GetLoadBalancerFrontendRequest,
    ) -> Result<LoadBalancerFrontend> {
        self.json(r).await
    }

    pub async fn create_load_balancer_frontend(
        &self,
        r: &CreateLoadBalancerFrontendRequest,
    ) -> Result<LoadBalancerFrontend> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_frontend(
        &self,
        r: &ModifyLoadBalancerFrontendRequest,
    ) -> Result<LoadBalancerFrontend> {
        self.json(r).await
    }

    pub async fn delete_load_balancer_frontend(
        &self,
        r: &DeleteLoadBalancerFrontendRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_load_balancer_frontend_rules(
        &self,
        r: &GetLoadBalancerFrontendRulesRequest,
    ) -> Result<Vec<LoadBalancerFrontendRule>> {
        self.json(r).await
    }

    pub async fn get_load_balancer_frontend_rule(
        &self,
        r: &GetLoadBalancerFrontendRuleRequest,
    ) -> Result<LoadBalancerFrontendRule> {
        self.json(r).await
    }

    pub async fn create_load_balancer_frontend_rule(
        &self,
        r: &CreateLoadBalancerFrontendRuleRequest,
    ) -> Result<LoadBalancerFrontendRule> {
        self.json(r).await
    }

    pub async fn replace_load_balancer_frontend_rule(
        &self,
        r: &ReplaceLoadBalancerFrontendRuleRequest,
    ) -> Result<LoadBalancerFrontendRule> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_frontend_rule(
        &self,
        r: &ModifyLoadBalancerFrontendRuleRequest,
    ) -> Result<LoadBalancerFrontendRule> {
        self.json(r).await
    }

    pub async fn delete_load_balancer_frontend_rule(
        &self,
        r: &DeleteLoadBalancerFrontendRuleRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    pub async fn get_load_balancer_frontend_tls_configs(
        &self,
        r: &GetLoadBalancerFrontendTlsConfigsRequest,
    ) -> Result<Vec<LoadBalancerFrontendTlsConfig>> {
        self.json(r).await
    }

    pub async fn get_load_balancer_frontend_tls_config(
        &self,
        r: &GetLoadBalancerFrontendTlsConfigRequest,
    ) -> Result<LoadBalancerFrontendTlsConfig> {
        self.json(r).await
    }

    pub async fn create_load_balancer_frontend_tls_config(
        &self,
        r: &CreateLoadBalancerFrontendTlsConfigRequest,
    ) -> Result<LoadBalancerFrontendTlsConfig> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_frontend_tls_config(
        &self,
        r: &ModifyLoadBalancerFrontendTlsConfigRequest,
    ) -> Result<LoadBalancerFrontendTlsConfig> {
        self.json(r).await
    }

    pub async fn delete_load_balancer_frontend_tls_config(
        &self,
        r: &DeleteLoadBalancerFrontendTlsConfigRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Certificate bundles
    // ========================================================================

    pub async fn get_load_balancer_certificate_bundles(
        &self,
        r: &GetLoadBalancerCertificateBundlesRequest,
    ) -> Result<Vec<LoadBalancerCertificateBundle>> {
        self.json(r).await
    }

    pub async fn get_load_balancer_certificate_bundle(
        &self,
        r: &GetLoadBalancerCertificateBundleRequest,
    ) -> Result<LoadBalancerCertificateBundle> {
        self.json(r).await
    }

    pub async fn create_load_balancer_certificate_bundle(
        &self,
        r: &CreateLoadBalancerCertificateBundleRequest,
    ) -> Result<LoadBalancerCertificateBundle> {
        self.json(r).await
    }

    pub async fn modify_load_balancer_certificate_bundle(
        &self,
        r: &ModifyLoadBalancerCertificateBundleRequest,
    ) -> Result<LoadBalancerCertificateBundle> {
        self.json(r).await
    }

    pub async fn delete_load_balancer_certificate_bundle(
        &self,
        r: &DeleteLoadBalancerCertificateBundleRequest,
    ) -> Result<()> {
        self.send(r).await
    }

    /// Domain to point `_acme-challenge` CNAME records at for dynamic certificates
    pub async fn get_load_balancer_dns_challenge_domain(
        &self,
    ) -> Result<LoadBalancerDnsChallengeDomain> {
        self.json(&GetLoadBalancerDnsChallengeDomainRequest).await
    }
}
