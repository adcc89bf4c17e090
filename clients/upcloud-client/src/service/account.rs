// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account, permission, token, partner and audit log operations

use upcloud_api::request::{
    CreatePartnerAccountRequest, CreateSubaccountRequest, CreateTokenRequest,
    DeleteSubaccountRequest, DeleteTokenRequest, ExportAuditLogRequest, GetAccountDetailsRequest,
    GetAccountListRequest, GetAccountRequest, GetPartnerAccountsRequest, GetPermissionsRequest,
    GetTokenDetailsRequest, GetTokensRequest, GrantPermissionRequest, ModifySubaccountRequest,
    RevokePermissionRequest,
};
use upcloud_api::types::{
    Account, AccountDetails, AccountList, AccountListItem, PartnerAccount, Permission, Token,
};

use crate::Client;
use crate::error::Result;

impl Client {
    // ========================================================================
    // Account
    // ========================================================================

    /// Account of the authenticated user, including its credits and limits
    pub async fn get_account(&self) -> Result<Account> {
        self.one(&GetAccountRequest).await
    }

    /// Main account and all sub-accounts
    pub async fn get_account_list(&self) -> Result<AccountList> {
        self.list::<_, AccountListItem>(&GetAccountListRequest).await
    }

    pub async fn get_account_details(
        &self,
        r: &GetAccountDetailsRequest,
    ) -> Result<AccountDetails> {
        self.one(r).await
    }

    pub async fn create_subaccount(&self, r: &CreateSubaccountRequest) -> Result<AccountDetails> {
        self.one(r).await
    }

    pub async fn modify_subaccount(&self, r: &ModifySubaccountRequest) -> Result<AccountDetails> {
        self.one(r).await
    }

    pub async fn delete_subaccount(&self, r: &DeleteSubaccountRequest) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Permissions
    // ========================================================================

    pub async fn get_permissions(&self) -> Result<Vec<Permission>> {
        self.list(&GetPermissionsRequest).await
    }

    pub async fn grant_permission(&self, r: &GrantPermissionRequest) -> Result<Permission> {
        self.one(r).await
    }

    pub async fn revoke_permission(&self, r: &RevokePermissionRequest) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // API tokens
    // ========================================================================

    pub async fn get_tokens(&self, r: &GetTokensRequest) -> Result<Vec<Token>> {
        self.json(r).await
    }

    pub async fn get_token_details(&self, r: &GetTokenDetailsRequest) -> Result<Token> {
        self.json(r).await
    }

    /// Create a token; its secret value is only present in this response
    pub async fn create_token(&self, r: &CreateTokenRequest) -> Result<Token> {
        self.json(r).await
    }

    pub async fn delete_token(&self, r: &DeleteTokenRequest) -> Result<()> {
        self.send(r).await
    }

    // ========================================================================
    // Partner accounts
    // ========================================================================

    pub async fn create_partner_account(
        &self,
        r: &CreatePartnerAccountRequest,
    ) -> Result<PartnerAccount> {
        self.json(r).await
    }

    pub async fn get_partner_accounts(&self) -> Result<Vec<PartnerAccount>> {
        self.json(&GetPartnerAccountsRequest).await
    }

    // ========================================================================
    // Audit log
    // ========================================================================

    /// Audit log export, in the requested format, as returned by the API
    pub async fn export_audit_log(&self, r: &ExportAuditLogRequest) -> Result<Vec<u8>> {
        self.execute(r).await
    }
}
