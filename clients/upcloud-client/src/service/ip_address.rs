// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use upcloud_api::request::{
    AssignIpAddressRequest, GetIpAddressDetailsRequest, GetIpAddressesRequest,
    ModifyIpAddressRequest, ReleaseIpAddressRequest,
};
use upcloud_api::types::IpAddress;

use crate::Client;
use crate::error::Result;

impl Client {
    pub async fn get_ip_addresses(&self) -> Result<Vec<IpAddress>> {
        self.list(&GetIpAddressesRequest).await
    }

    pub async fn get_ip_address_details(
        &self,
        r: &GetIpAddressDetailsRequest,
    ) -> Result<IpAddress> {
        self.one(r).await
    }

    pub async fn assign_ip_address(&self, r: &AssignIpAddressRequest) -> Result<IpAddress> {
        self.one(r).await
    }

    pub async fn modify_ip_address(&self, r: &ModifyIpAddressRequest) -> Result<IpAddress> {
        self.one(r).await
    }

    pub async fn release_ip_address(&self, r: &ReleaseIpAddressRequest) -> Result<()> {
        self.send(r).await
    }
}
