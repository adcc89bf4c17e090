// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server firewall requests

use http::Method;

use super::{Request, enveloped};
use crate::types::FirewallRule;
use crate::types::envelope::Wrapped;

#[derive(Debug, Clone)]
pub struct GetFirewallRulesRequest {
    pub server_uuid: String,
}

impl Request for GetFirewallRulesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/server/{}/firewall_rule", self.server_uuid)
    }
}

#[derive(Debug, Clone)]
pub struct GetFirewallRuleDetailsRequest {
    pub server_uuid: String,
    pub position: u32,
}

impl Request for GetFirewallRuleDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/server/{}/firewall_rule/{}", self.server_uuid, self.position)
    }
}

#[derive(Debug, Clone)]
pub struct CreateFirewallRuleRequest {
    pub server_uuid: String,
    pub rule: FirewallRule,
}

impl Request for CreateFirewallRuleRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/firewall_rule", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("firewall_rule", &self.rule)
    }
}

/// Create several rules at once, body
/// `{"firewall_rules":{"firewall_rule":[...]}}`
///
/// Rules with a zero position are placed in list order.
#[derive(Debug, Clone)]
pub struct CreateFirewallRulesRequest {
    pub server_uuid: String,
    pub rules: Vec<FirewallRule>,
}

impl Request for CreateFirewallRulesRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        format!("/server/{}/firewall_rule", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("firewall_rules", &Wrapped::new("firewall_rule", &self.rules))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteFirewallRuleRequest {
    pub server_uuid: String,
    pub position: u32,
}

impl Request for DeleteFirewallRuleRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/server/{}/firewall_rule/{}", self.server_uuid, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FirewallRuleAction, FirewallRuleDirection, FirewallRuleProtocol};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_create_rules_body() {
        let mut ssh = FirewallRule::new(FirewallRuleDirection::In, FirewallRuleAction::Accept);
        ssh.protocol = Some(FirewallRuleProtocol::Tcp);
        ssh.destination_port_start = "22".to_string();
        ssh.destination_port_end = "22".to_string();
        let drop = FirewallRule::new(FirewallRuleDirection::In, FirewallRuleAction::Drop);
        let r = CreateFirewallRulesRequest {
            server_uuid: "u".to_string(),
            rules: vec![ssh, drop],
        };
        assert_eq!(r.relative_url(), "/server/u/firewall_rule");
        let body: Value = serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"firewall_rules": {"firewall_rule": [
                {"action": "accept", "direction": "in", "protocol": "tcp", "destination_port_start": "22", "destination_port_end": "22"},
                {"action": "drop", "direction": "in"}
            ]}})
        );
    }

    #[test]
    fn test_rule_position_urls() {
        let r = DeleteFirewallRuleRequest {
            server_uuid: "u".to_string(),
            position: 3,
        };
        assert_eq!(r.relative_url(), "/server/u/firewall_rule/3");
    }
}
