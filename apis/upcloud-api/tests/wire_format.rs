// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end wire format checks across the model and request layers

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use upcloud_api::request::{
    CreateFirewallRulesRequest, CreateServerInterface, CreateServerNetworking,
    CreateServerRequest, CreateServerStorageDevice, TagServerRequest, render,
    storage_device_action,
};
use upcloud_api::{
    FirewallRule, FirewallRuleDirection, IpAddressFamily, LoadBalancerAction, NetworkType, Page,
    Request, decode_list,
};

const FIREWALL_RULES: &str = r#"{
  "firewall_rules": {
    "firewall_rule": [
      {
        "action": "accept",
        "comment": "Allow HTTP from anywhere",
        "destination_address_end": "",
        "destination_address_start": "",
        "destination_port_end": "80",
        "destination_port_start": "80",
        "direction": "in",
        "family": "IPv4",
        "icmp_type": "",
        "position": "1",
        "protocol": "tcp",
        "source_address_end": "",
        "source_address_start": "",
        "source_port_end": "",
        "source_port_start": ""
      },
      {
        "action": "accept",
        "comment": "Allow SSH from a specific network only",
        "destination_address_end": "",
        "destination_address_start": "",
        "destination_port_end": "22",
        "destination_port_start": "22",
        "direction": "in",
        "family": "IPv4",
        "icmp_type": "",
        "position": "2",
        "protocol": "tcp",
        "source_address_end": "192.168.1.255",
        "source_address_start": "192.168.1.1",
        "source_port_end": "",
        "source_port_start": ""
      },
      {
        "action": "accept",
        "comment": "Allow SSH over IPv6 from this range",
        "destination_address_end": "",
        "destination_address_start": "",
        "destination_port_end": "22",
        "destination_port_start": "22",
        "direction": "in",
        "family": "IPv6",
        "icmp_type": "",
        "position": "3",
        "protocol": "tcp",
        "source_address_end": "2a04:3540:1000:aaaa:bbbb:cccc:d001",
        "source_address_start": "2a04:3540:1000:aaaa:bbbb:cccc:d001",
        "source_port_end": "",
        "source_port_start": ""
      },
      {
        "action": "accept",
        "comment": "Allow ICMP echo request (ping)",
        "destination_address_end": "",
        "destination_address_start": "",
        "destination_port_end": "",
        "destination_port_start": "",
        "direction": "in",
        "family": "IPv4",
        "icmp_type": "8",
        "position": "4",
        "protocol": "icmp",
        "source_address_end": "",
        "source_address_start": "",
        "source_port_end": "",
        "source_port_start": ""
      },
      {
        "action": "drop",
        "comment": "",
        "destination_address_end": "",
        "destination_address_start": "",
        "destination_port_end": "",
        "destination_port_start": "",
        "direction": "in",
        "family": "",
        "icmp_type": "",
        "position": "5",
        "protocol": "",
        "source_address_end": "",
        "source_address_start": "",
        "source_port_end": "",
        "source_port_start": ""
      }
    ]
  }
}"#;

#[test]
fn firewall_rules_survive_a_round_trip() {
    let first: Vec<FirewallRule> = decode_list(FIREWALL_RULES.as_bytes()).unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(
        first.iter().map(|r| r.position).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert!(first.iter().all(|r| r.direction == FirewallRuleDirection::In));
    assert_eq!(first[4].family, None);

    // Re-encode through the bulk create body, which uses the same envelope
    let request = CreateFirewallRulesRequest {
        server_uuid: "00798b85-efdc-41ca-8021-f6ef457b8531".to_string(),
        rules: first.clone(),
    };
    let body = request.body().unwrap().unwrap();
    let second: Vec<FirewallRule> = decode_list(&body).unwrap();
    assert_eq!(second, first);
}

#[test]
fn create_server_renders_nested_envelopes() {
    let request = CreateServerRequest {
        hostname: "debian.example.com".to_string(),
        title: "Debian".to_string(),
        zone: "fi-hel2".to_string(),
        plan: "1xCPU-2GB".to_string(),
        storage_devices: vec![CreateServerStorageDevice {
            action: storage_device_action::CLONE.to_string(),
            storage: "01000000-0000-4000-8000-000020060100".to_string(),
            title: "Debian from a template".to_string(),
            size: Some(50),
            tier: "maxiops".to_string(),
            ..Default::default()
        }],
        networking: CreateServerNetworking {
            interfaces: vec![
                CreateServerInterface::new(NetworkType::Public, IpAddressFamily::IPv4),
                CreateServerInterface::new(NetworkType::Utility, IpAddressFamily::IPv4),
                CreateServerInterface::new(NetworkType::Public, IpAddressFamily::IPv6),
            ],
        },
        ..Default::default()
    };
    assert_eq!(request.relative_url(), "/server");

    let body: Value = serde_json::from_slice(&request.body().unwrap().unwrap()).unwrap();
    let server = &body["server"];
    assert_eq!(server["hostname"], "debian.example.com");
    assert_eq!(server["zone"], "fi-hel2");

    let devices = server["storage_devices"]["storage_device"].as_array().unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["action"], "clone");
    assert_eq!(devices[0]["size"], 50);

    let interfaces = server["networking"]["interfaces"]["interface"]
        .as_array()
        .unwrap();
    assert_eq!(interfaces.len(), 3);
    assert_eq!(
        interfaces[2],
        json!({
            "ip_addresses": {"ip_address": [{"family": "IPv6"}]},
            "type": "public"
        })
    );
}

#[test]
fn paging_walks_forward_and_back() {
    let first = Page::new(100, 1);
    assert_eq!(render(&[first]), "limit=100&offset=0");
    assert_eq!(render(&[first.next()]), "limit=100&offset=100");
    assert_eq!(render(&[first.next().next()]), "limit=100&offset=200");
    assert_eq!(
        render(&[first.next().next().previous()]),
        "limit=100&offset=100"
    );
    assert_eq!(render(&[first.previous()]), "limit=100&offset=0");
}

#[test]
fn load_balancer_actions_use_type_keyed_payloads() {
    let http_return = LoadBalancerAction::http_return(200, "text/html", "X");
    assert_eq!(
        serde_json::to_value(&http_return).unwrap(),
        json!({
            "type": "http_return",
            "action_http_return": {"status": 200, "content_type": "text/html", "payload": "X"}
        })
    );
    assert_eq!(
        serde_json::to_value(LoadBalancerAction::TcpReject).unwrap(),
        json!({"type": "tcp_reject", "action_tcp_reject": {}})
    );
}

#[test]
fn tag_names_are_joined_raw_into_the_path() {
    let request = TagServerRequest {
        uuid: "0077fa3d-32db-4b09-9f5f-30d9e9afb565".to_string(),
        tags: vec!["web server".to_string(), "prod".to_string()],
    };
    assert_eq!(
        request.relative_url(),
        "/server/0077fa3d-32db-4b09-9f5f-30d9e9afb565/tag/web server,prod"
    );
}
