// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account, permission, token, partner and audit log requests

use chrono::{DateTime, Utc};
use http::Method;
use serde::Serialize;
use strum::{Display, EnumString};

use super::filter::{Page, QueryFilter, with_query};
use super::{Request, enveloped, json};
use crate::types::{Permission, SubaccountFields};

#[derive(Debug, Clone, Default)]
pub struct GetAccountRequest;

impl Request for GetAccountRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/account".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetAccountListRequest;

impl Request for GetAccountListRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/account/list".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GetAccountDetailsRequest {
    pub username: String,
}

impl Request for GetAccountDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/account/details/{}", self.username)
    }
}

/// Create a sub-account, body `{"sub_account":{...}}`
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubaccountRequest {
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub fields: SubaccountFields,
}

impl Request for CreateSubaccountRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/account/sub".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("sub_account", self)
    }
}

#[derive(Debug, Clone)]
pub struct ModifySubaccountRequest {
    pub username: String,
    pub fields: SubaccountFields,
}

impl Request for ModifySubaccountRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/account/details/{}", self.username)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("account", &self.fields)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSubaccountRequest {
    pub username: String,
}

impl Request for DeleteSubaccountRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/account/{}", self.username)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetPermissionsRequest;

impl Request for GetPermissionsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/permission".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GrantPermissionRequest {
    pub permission: Permission,
}

impl Request for GrantPermissionRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/permission/grant".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("permission", &self.permission)
    }
}

#[derive(Debug, Clone)]
pub struct RevokePermissionRequest {
    pub permission: Permission,
}

impl Request for RevokePermissionRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/permission/revoke".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("permission", &self.permission)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetTokensRequest {
    pub page: Option<Page>,
}

impl Request for GetTokensRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        let params = self.page.map(|p| p.query_params()).unwrap_or_default();
        with_query("/account/tokens", params)
    }
}

#[derive(Debug, Clone)]
pub struct GetTokenDetailsRequest {
    pub id: String,
}

impl Request for GetTokenDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/account/tokens/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTokenRequest {
    pub name: String,
    pub expires_at: DateTime<Utc>,
    pub can_create_sub_tokens: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_ip_ranges: Vec<String>,
}

impl Request for CreateTokenRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/account/tokens".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteTokenRequest {
    pub id: String,
}

impl Request for DeleteTokenRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/account/tokens/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePartnerAccountRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<crate::types::PartnerAccountContactDetails>,
}

impl Request for CreatePartnerAccountRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/partner/accounts".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetPartnerAccountsRequest;

impl Request for GetPartnerAccountsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/partner/accounts".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AuditLogFormat {
    Csv,
    Json,
}

/// Export the audit log; the response body is returned as is
#[derive(Debug, Clone, Default)]
pub struct ExportAuditLogRequest {
    pub format: Option<AuditLogFormat>,
}

impl Request for ExportAuditLogRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        let params = self
            .format
            .map(|f| vec![("format".to_string(), f.to_string())])
            .unwrap_or_default();
        with_query("/audit-logs/export", params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Boolean, permission_target};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn body<R: Request>(r: &R) -> Value {
        serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_create_subaccount() {
        let r = CreateSubaccountRequest {
            username: "sub".to_string(),
            password: "secret".to_string(),
            fields: SubaccountFields {
                email: "sub@example.com".to_string(),
                allow_api: Boolean::True,
                ip_filters: Some(vec!["10.0.0.0/8".to_string()]),
                ..Default::default()
            },
        };
        assert_eq!(r.relative_url(), "/account/sub");
        assert_eq!(
            body(&r),
            json!({"sub_account": {
                "username": "sub",
                "password": "secret",
                "email": "sub@example.com",
                "allow_api": "yes",
                "ip_filters": {"ip_filter": ["10.0.0.0/8"]}
            }})
        );
    }

    #[test]
    fn test_modify_subaccount() {
        let r = ModifySubaccountRequest {
            username: "sub".to_string(),
            fields: SubaccountFields {
                allow_gui: Boolean::False,
                ..Default::default()
            },
        };
        assert_eq!(r.relative_url(), "/account/details/sub");
        assert_eq!(body(&r), json!({"account": {"allow_gui": "no"}}));
        assert_eq!(ModifySubaccountRequest::METHOD, Method::PUT);
    }

    #[test]
    fn test_grant_permission() {
        let r = GrantPermissionRequest {
            permission: Permission {
                options: None,
                target_identifier: "*".to_string(),
                target_type: permission_target::SERVER.to_string(),
                user: "sub".to_string(),
            },
        };
        assert_eq!(
            body(&r),
            json!({"permission": {"target_identifier": "*", "target_type": "server", "user": "sub"}})
        );
    }

    #[test]
    fn test_token_urls() {
        assert_eq!(GetTokensRequest::default().relative_url(), "/account/tokens");
        assert_eq!(
            GetTokensRequest {
                page: Some(Page::new(10, 2))
            }
            .relative_url(),
            "/account/tokens?limit=10&offset=10"
        );
        assert_eq!(
            DeleteTokenRequest {
                id: "0c1eadbe-0000-0000-0000-000000000000".to_string()
            }
            .relative_url(),
            "/account/tokens/0c1eadbe-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_audit_log_format() {
        assert_eq!(
            ExportAuditLogRequest::default().relative_url(),
            "/audit-logs/export"
        );
        assert_eq!(
            ExportAuditLogRequest {
                format: Some(AuditLogFormat::Csv)
            }
            .relative_url(),
            "/audit-logs/export?format=csv"
        );
    }
}
