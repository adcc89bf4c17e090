// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account, sub-account, permission, API token and partner types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::codec;
use super::common::Boolean;
use super::envelope::{Envelope, EnvelopeList, seq};

/// Resource quota of an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    #[serde(default)]
    pub cores: u32,
    #[serde(default)]
    pub detached_floating_ips: u32,
    #[serde(default)]
    pub gpus: u32,
    #[serde(default)]
    pub load_balancers: u32,
    #[serde(default)]
    pub managed_object_storages: u32,
    #[serde(default)]
    pub memory: u32,
    #[serde(default)]
    pub network_peerings: u32,
    #[serde(default)]
    pub networks: u32,
    #[serde(default)]
    pub ntp_excess_gib: u32,
    #[serde(default)]
    pub public_ipv4: u32,
    #[serde(default)]
    pub public_ipv6: u32,
    #[serde(default)]
    pub storage_hdd: u32,
    #[serde(default)]
    pub storage_maxiops: u32,
    #[serde(default)]
    pub storage_ssd: u32,
}

/// Authenticated account summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub credits: f64,
    pub username: String,
    #[serde(default)]
    pub resource_limits: ResourceLimits,
}

impl Envelope for Account {
    const KEY: &'static str = "account";
}

/// Account role
pub mod role {
    pub const BILLING: &str = "billing";
    pub const TECHNICAL: &str = "technical";
}

/// Entry of the account list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountListItem {
    #[serde(default, with = "seq::roles")]
    pub roles: Vec<String>,
    /// `main` or `sub`
    #[serde(rename = "type")]
    pub account_type: String,
    pub username: String,
}

impl Envelope for AccountListItem {
    const KEY: &'static str = "account";
}

impl EnvelopeList for AccountListItem {
    const LIST_KEY: &'static str = "accounts";
}

pub type AccountList = Vec<AccountListItem>;

/// Server a sub-account may access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerAccess {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub storage: Boolean,
}

/// Tag whose servers a sub-account may access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagAccess {
    pub name: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub storage: Boolean,
}

/// Full account description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    #[serde(default)]
    pub main_account: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub vat_number: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub allow_api: Boolean,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub allow_gui: Boolean,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub enable_3rd_party_services: Boolean,
    #[serde(default, with = "seq::ip_filters")]
    pub ip_filters: Vec<String>,
    #[serde(default, with = "seq::roles")]
    pub roles: Vec<String>,
    #[serde(default, with = "seq::servers")]
    pub server_access: Vec<ServerAccess>,
    #[serde(default, with = "seq::storages")]
    pub storage_access: Vec<String>,
    #[serde(default, with = "seq::tag_access")]
    pub tag_access: Vec<TagAccess>,
    #[serde(default, with = "seq::zones")]
    pub zone_access: Vec<String>,
    #[serde(default, with = "seq::networks")]
    pub network_access: Vec<String>,
}

impl Envelope for AccountDetails {
    const KEY: &'static str = "account";
}

impl AccountDetails {
    pub fn is_main_account(&self) -> bool {
        self.account_type == "main"
    }
}

/// Writable sub-account fields
///
/// Shared by create and modify; unset strings and [`Boolean::Unset`]
/// fields are omitted from the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountFields {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vat_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub allow_api: Boolean,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub allow_gui: Boolean,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "seq::ip_filters::option")]
    pub ip_filters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "seq::roles::option")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "seq::servers::option")]
    pub server_access: Option<Vec<ServerAccess>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "seq::storages::option")]
    pub storage_access: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "seq::tag_access::option")]
    pub tag_access: Option<Vec<TagAccess>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "seq::zones::option")]
    pub zone_access: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "seq::networks::option")]
    pub network_access: Option<Vec<String>>,
}

/// Target kind of a permission
pub mod permission_target {
    pub const MANAGED_DATABASE: &str = "managed_database";
    pub const MANAGED_LOADBALANCER: &str = "managed_loadbalancer";
    pub const MANAGED_OBJECT_STORAGE: &str = "managed_object_storage";
    pub const NETWORK: &str = "network";
    pub const SERVER: &str = "server";
    pub const STORAGE: &str = "storage";
    pub const TAG_ACCESS: &str = "tag_access";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionOptions {
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub storage: Boolean,
}

/// Access granted to a sub-account on one resource, or on all of a kind
/// when `target_identifier` is `*`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PermissionOptions>,
    pub target_identifier: String,
    pub target_type: String,
    pub user: String,
}

impl Envelope for Permission {
    const KEY: &'static str = "permission";
}

impl EnvelopeList for Permission {
    const LIST_KEY: &'static str = "permissions";
}

/// API token
///
/// The secret `token` is only populated in the create response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, rename = "type")]
    pub token_type: String,
    #[serde(with = "codec::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(with = "codec::timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, with = "codec::timestamp")]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub can_create_tokens: bool,
    #[serde(default)]
    pub allowed_ip_ranges: Vec<String>,
    #[serde(default)]
    pub gui: bool,
}

/// Partner-managed account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerAccount {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Contact details of a new partner account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerAccountContactDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vat_number: String,
}
