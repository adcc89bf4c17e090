// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use upcloud_api::request::{
    CreateFirewallRuleRequest, CreateFirewallRulesRequest, DeleteFirewallRuleRequest,
    GetFirewallRuleDetailsRequest, GetFirewallRulesRequest,
};
use upcloud_api::types::FirewallRule;

use crate::Client;
use crate::error::Result;

impl Client {
    /// Rules of a server's firewall, in evaluation order
    pub async fn get_firewall_rules(
        &self,
        r: &GetFirewallRulesRequest,
    ) -> Result<Vec<FirewallRule>> {
        self.list(r).await
    }

    pub async fn get_firewall_rule_details(
        &self,
        r: &GetFirewallRuleDetailsRequest,
    ) -> Result<FirewallRule> {
        self.one(r).await
    }

    pub async fn create_firewall_rule(
        &self,
        r: &CreateFirewallRuleRequest,
    ) -> Result<FirewallRule> {
        self.one(r).await
    }

    /// Create several rules in one request
    pub async fn create_firewall_rules(&self, r: &CreateFirewallRulesRequest) -> Result<()> {
        self.send(r).await
    }

    pub async fn delete_firewall_rule(&self, r: &DeleteFirewallRuleRequest) -> Result<()> {
        self.send(r).await
    }
}
