// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed load balancer types
//!
//! Frontend rules carry matchers and actions whose wire form names the
//! variant twice: `{"type":"http_return","action_http_return":{...}}`.
//! [`LoadBalancerAction`] and [`LoadBalancerMatcher`] model these as sum
//! types and own that encoding.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use super::common::{ConfiguredStatus, Label};

pub type LoadBalancerConfiguredStatus = ConfiguredStatus;

/// Provisioning state of a load balancer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LoadBalancerOperationalState {
    Pending,
    SetupAgent,
    SetupServer,
    SetupNetwork,
    SetupLb,
    SetupDns,
    Checkup,
    Running,
    DeleteDns,
    DeleteNetwork,
    DeleteServer,
    DeleteService,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerMode {
    Http,
    Tcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerNetworkType {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerMatchingCondition {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerIpAddress {
    pub address: String,
    #[serde(default)]
    pub listen: bool,
}

/// Network a load balancer is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerNetwork {
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: LoadBalancerNetworkType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub family: String,
    /// UUID of a private network; empty for public networks
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dns_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<LoadBalancerIpAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerFrontendProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_client: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_proxy_protocol: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http2_enabled: Option<bool>,
}

/// Network a frontend listens on, by load balancer network name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerFrontendNetwork {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerFrontendTlsConfig {
    pub name: String,
    pub certificate_bundle_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

pub type LoadBalancerBackendTlsConfig = LoadBalancerFrontendTlsConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerFrontend {
    pub name: String,
    pub mode: LoadBalancerMode,
    pub port: u16,
    pub default_backend: String,
    #[serde(default)]
    pub rules: Vec<LoadBalancerFrontendRule>,
    #[serde(default)]
    pub tls_configs: Vec<LoadBalancerFrontendTlsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<LoadBalancerFrontendProperties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<LoadBalancerFrontendNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerFrontendRule {
    pub name: String,
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_condition: Option<LoadBalancerMatchingCondition>,
    #[serde(default)]
    pub matchers: Vec<LoadBalancerMatcher>,
    #[serde(default)]
    pub actions: Vec<LoadBalancerAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// Actions

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionUseBackend {
    pub backend: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionHttpReturn {
    pub status: u16,
    pub content_type: String,
    pub payload: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectScheme {
    Http,
    Https,
}

/// Redirect to a fixed location or to the same URL under another scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionHttpRedirect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<RedirectScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSetHeader {
    pub header: String,
    #[serde(default)]
    pub value: String,
}

/// Action taken when a frontend rule matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadBalancerAction {
    UseBackend(ActionUseBackend),
    TcpReject,
    HttpReturn(ActionHttpReturn),
    HttpRedirect(ActionHttpRedirect),
    SetForwardedHeaders,
    SetRequestHeader(ActionSetHeader),
    SetResponseHeader(ActionSetHeader),
}

impl LoadBalancerAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UseBackend(_) => "use_backend",
            Self::TcpReject => "tcp_reject",
            Self::HttpReturn(_) => "http_return",
            Self::HttpRedirect(_) => "http_redirect",
            Self::SetForwardedHeaders => "set_forwarded_headers",
            Self::SetRequestHeader(_) => "set_request_header",
            Self::SetResponseHeader(_) => "set_response_header",
        }
    }

    pub fn use_backend(backend: impl Into<String>) -> Self {
        Self::UseBackend(ActionUseBackend {
            backend: backend.into(),
        })
    }

    pub fn http_return(
        status: u16,
        content_type: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::HttpReturn(ActionHttpReturn {
            status,
            content_type: content_type.into(),
            payload: payload.into(),
        })
    }

    pub fn http_redirect_location(location: impl Into<String>) -> Self {
        Self::HttpRedirect(ActionHttpRedirect {
            location: Some(location.into()),
            scheme: None,
            status: None,
        })
    }

    pub fn http_redirect_scheme(scheme: RedirectScheme) -> Self {
        Self::HttpRedirect(ActionHttpRedirect {
            location: None,
            scheme: Some(scheme),
            status: None,
        })
    }
}

impl Serialize for LoadBalancerAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.type_name();
        let key = format!("action_{kind}");
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", kind)?;
        match self {
            Self::UseBackend(v) => map.serialize_entry(&key, v)?,
            Self::HttpReturn(v) => map.serialize_entry(&key, v)?,
            Self::HttpRedirect(v) => map.serialize_entry(&key, v)?,
            Self::SetRequestHeader(v) | Self::SetResponseHeader(v) => {
                map.serialize_entry(&key, v)?
            }
            Self::TcpReject | Self::SetForwardedHeaders => {
                map.serialize_entry(&key, &Map::new())?
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LoadBalancerAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        decode_action(object).map_err(D::Error::custom)
    }
}

fn decode_action(object: Map<String, Value>) -> Result<LoadBalancerAction, serde_json::Error> {
    use serde_json::from_value;

    let (kind, payload) = split_tagged(object, "action")?;
    Ok(match kind.as_str() {
        "use_backend" => LoadBalancerAction::UseBackend(from_value(payload)?),
        "tcp_reject" => LoadBalancerAction::TcpReject,
        "http_return" => LoadBalancerAction::HttpReturn(from_value(payload)?),
        "http_redirect" => LoadBalancerAction::HttpRedirect(from_value(payload)?),
        "set_forwarded_headers" => LoadBalancerAction::SetForwardedHeaders,
        "set_request_header" => LoadBalancerAction::SetRequestHeader(from_value(payload)?),
        "set_response_header" => LoadBalancerAction::SetResponseHeader(from_value(payload)?),
        other => {
            return Err(serde_json::Error::custom(format!(
                "unknown load balancer action type {other:?}"
            )));
        }
    })
}

// Matchers

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringMatcherMethod {
    Exact,
    Substring,
    Regexp,
    Starts,
    Ends,
    Domain,
    Ip,
    Exists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerMatcherMethod {
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Connect,
    Options,
    Trace,
}

/// String comparison such as a path or URL match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchString {
    pub method: StringMatcherMethod,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

/// String comparison against a named cookie, header or URL parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStringWithArgument {
    pub method: StringMatcherMethod,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInteger {
    pub method: IntegerMatcherMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_end: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchValue {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHttpMethod {
    pub value: HttpMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchNumMembersUp {
    pub method: IntegerMatcherMethod,
    pub value: i64,
    pub backend: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHttpStatusRange {
    pub range_start: u16,
    pub range_end: u16,
}

/// Condition a request must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherCondition {
    SrcIp(MatchValue),
    SrcPort(MatchInteger),
    BodySize(MatchInteger),
    Path(MatchString),
    Url(MatchString),
    UrlQuery(MatchString),
    Host(MatchValue),
    HttpMethod(MatchHttpMethod),
    Cookie(MatchStringWithArgument),
    Header(MatchStringWithArgument),
    UrlParam(MatchStringWithArgument),
    RequestHeader(MatchStringWithArgument),
    ResponseHeader(MatchStringWithArgument),
    NumMembersUp(MatchNumMembersUp),
    HttpStatus(MatchInteger),
    HttpStatusRange(MatchHttpStatusRange),
}

impl MatcherCondition {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SrcIp(_) => "src_ip",
            Self::SrcPort(_) => "src_port",
            Self::BodySize(_) => "body_size",
            Self::Path(_) => "path",
            Self::Url(_) => "url",
            Self::UrlQuery(_) => "url_query",
            Self::Host(_) => "host",
            Self::HttpMethod(_) => "http_method",
            Self::Cookie(_) => "cookie",
            Self::Header(_) => "header",
            Self::UrlParam(_) => "url_param",
            Self::RequestHeader(_) => "request_header",
            Self::ResponseHeader(_) => "response_header",
            Self::NumMembersUp(_) => "num_members_up",
            Self::HttpStatus(_) => "http_status",
            Self::HttpStatusRange(_) => "http_status_range",
        }
    }
}

/// Frontend rule matcher, optionally inverted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerMatcher {
    pub condition: MatcherCondition,
    pub inverse: Option<bool>,
}

impl LoadBalancerMatcher {
    pub fn new(condition: MatcherCondition) -> Self {
        Self {
            condition,
            inverse: None,
        }
    }

    pub fn inverted(mut self) -> Self {
        self.inverse = Some(true);
        self
    }

    pub fn src_ip(value: impl Into<String>) -> Self {
        Self::new(MatcherCondition::SrcIp(MatchValue {
            value: value.into(),
        }))
    }

    pub fn host(value: impl Into<String>) -> Self {
        Self::new(MatcherCondition::Host(MatchValue {
            value: value.into(),
        }))
    }

    pub fn path(method: StringMatcherMethod, value: impl Into<String>) -> Self {
        Self::new(MatcherCondition::Path(MatchString {
            method,
            value: value.into(),
            ignore_case: None,
        }))
    }

    pub fn http_method(value: HttpMethod) -> Self {
        Self::new(MatcherCondition::HttpMethod(MatchHttpMethod { value }))
    }

    pub fn header(
        method: StringMatcherMethod,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(MatcherCondition::Header(MatchStringWithArgument {
            method,
            name: name.into(),
            value: value.into(),
            ignore_case: None,
        }))
    }
}

impl Serialize for LoadBalancerMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.condition.type_name();
        let key = format!("match_{kind}");
        let len = if self.inverse.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", kind)?;
        match &self.condition {
            MatcherCondition::SrcIp(v) | MatcherCondition::Host(v) => {
                map.serialize_entry(&key, v)?
            }
            MatcherCondition::SrcPort(v)
            | MatcherCondition::BodySize(v)
            | MatcherCondition::HttpStatus(v) => map.serialize_entry(&key, v)?,
            MatcherCondition::Path(v) | MatcherCondition::Url(v) | MatcherCondition::UrlQuery(v) => {
                map.serialize_entry(&key, v)?
            }
            MatcherCondition::HttpMethod(v) => map.serialize_entry(&key, v)?,
            MatcherCondition::Cookie(v)
            | MatcherCondition::Header(v)
            | MatcherCondition::UrlParam(v)
            | MatcherCondition::RequestHeader(v)
            | MatcherCondition::ResponseHeader(v) => map.serialize_entry(&key, v)?,
            MatcherCondition::NumMembersUp(v) => map.serialize_entry(&key, v)?,
            MatcherCondition::HttpStatusRange(v) => map.serialize_entry(&key, v)?,
        }
        if let Some(inverse) = self.inverse {
            map.serialize_entry("inverse", &inverse)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LoadBalancerMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        decode_matcher(object).map_err(D::Error::custom)
    }
}

fn decode_matcher(mut object: Map<String, Value>) -> Result<LoadBalancerMatcher, serde_json::Error> {
    use serde_json::from_value;

    let inverse = match object.remove("inverse") {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    };
    let (kind, payload) = split_tagged(object, "match")?;
    let condition = match kind.as_str() {
        "src_ip" => MatcherCondition::SrcIp(from_value(payload)?),
        "src_port" => MatcherCondition::SrcPort(from_value(payload)?),
        "body_size" => MatcherCondition::BodySize(from_value(payload)?),
        "path" => MatcherCondition::Path(from_value(payload)?),
        "url" => MatcherCondition::Url(from_value(payload)?),
        "url_query" => MatcherCondition::UrlQuery(from_value(payload)?),
        "host" => MatcherCondition::Host(from_value(payload)?),
        "http_method" => MatcherCondition::HttpMethod(from_value(payload)?),
        "cookie" => MatcherCondition::Cookie(from_value(payload)?),
        "header" => MatcherCondition::Header(from_value(payload)?),
        "url_param" => MatcherCondition::UrlParam(from_value(payload)?),
        "request_header" => MatcherCondition::RequestHeader(from_value(payload)?),
        "response_header" => MatcherCondition::ResponseHeader(from_value(payload)?),
        "num_members_up" => MatcherCondition::NumMembersUp(from_value(payload)?),
        "http_status" => MatcherCondition::HttpStatus(from_value(payload)?),
        "http_status_range" => MatcherCondition::HttpStatusRange(from_value(payload)?),
        other => {
            return Err(serde_json::Error::custom(format!(
                "unknown load balancer matcher type {other:?}"
            )));
        }
    };
    Ok(LoadBalancerMatcher { condition, inverse })
}

/// Split `{"type":t,"<prefix>_<t>":{..}}` into `t` and the payload
fn split_tagged(
    mut object: Map<String, Value>,
    prefix: &str,
) -> Result<(String, Value), serde_json::Error> {
    let kind = match object.remove("type") {
        Some(Value::String(kind)) => kind,
        _ => return Err(serde_json::Error::custom(format!("{prefix} without a type"))),
    };
    let payload = object
        .remove(&format!("{prefix}_{kind}"))
        .unwrap_or_else(|| Value::Object(Map::new()));
    Ok((kind, payload))
}

// Backends

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerHealthCheckType {
    Tcp,
    Http,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerBackendProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_server: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_tunnel: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<LoadBalancerHealthCheckType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_fall: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_rise: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_expected_status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_tls_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky_session_cookie_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_proxy_protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_use_system_ca: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http2_enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerBackendMemberType {
    #[default]
    Static,
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerBackendMember {
    pub name: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub port: u16,
    pub weight: u32,
    pub max_sessions: u32,
    #[serde(rename = "type")]
    pub member_type: LoadBalancerBackendMemberType,
    pub enabled: bool,
    #[serde(default)]
    pub backup: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerBackend {
    pub name: String,
    #[serde(default)]
    pub members: Vec<LoadBalancerBackendMember>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resolver: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<LoadBalancerBackendProperties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tls_configs: Vec<LoadBalancerBackendTlsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// DNS resolver used by dynamic backend members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerResolver {
    pub name: String,
    pub nameservers: Vec<String>,
    pub retries: u32,
    pub timeout: u32,
    pub timeout_retry: u32,
    pub cache_valid: u32,
    pub cache_invalid: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerNode {
    #[serde(default)]
    pub operational_state: String,
    #[serde(default)]
    pub networks: Vec<LoadBalancerNodeNetwork>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerNodeNetwork {
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: LoadBalancerNetworkType,
    #[serde(default)]
    pub ip_addresses: Vec<LoadBalancerIpAddress>,
}

/// Managed load balancer service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub uuid: String,
    pub name: String,
    pub zone: String,
    pub plan: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_uuid: String,
    #[serde(default)]
    pub networks: Vec<LoadBalancerNetwork>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dns_name: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub configured_status: LoadBalancerConfiguredStatus,
    pub operational_state: LoadBalancerOperationalState,
    #[serde(default)]
    pub frontends: Vec<LoadBalancerFrontend>,
    #[serde(default)]
    pub backends: Vec<LoadBalancerBackend>,
    #[serde(default)]
    pub resolvers: Vec<LoadBalancerResolver>,
    #[serde(default)]
    pub nodes: Vec<LoadBalancerNode>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maintenance_dow: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maintenance_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerPlan {
    pub name: String,
    pub per_server_max_sessions: u32,
    pub server_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerCertificateBundleType {
    Authority,
    Manual,
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerCertificateBundle {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub bundle_type: LoadBalancerCertificateBundleType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certificate: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intermediates: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hostnames: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operational_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_after: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Domain to use in `_acme-challenge` CNAME records for dynamic certificates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerDnsChallengeDomain {
    pub domain: String,
}
