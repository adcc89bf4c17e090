// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use upcloud_api::request::{
    GetHostDetailsRequest, GetHostsRequest, GetPlansRequest, GetPricesRequest,
    GetTimeZonesRequest, GetZonesRequest, ModifyHostRequest,
};
use upcloud_api::types::{Host, Plan, PricingByZone, TimeZones, Zone};

use crate::Client;
use crate::client::decode;
use crate::error::Result;

impl Client {
    pub async fn get_zones(&self) -> Result<Vec<Zone>> {
        self.list(&GetZonesRequest).await
    }

    pub async fn get_plans(&self) -> Result<Vec<Plan>> {
        self.list(&GetPlansRequest).await
    }

    /// Prices of every billable item, by zone
    pub async fn get_prices(&self) -> Result<PricingByZone> {
        let body = self.execute(&GetPricesRequest).await?;
        decode(body, PricingByZone::decode)
    }

    pub async fn get_time_zones(&self) -> Result<TimeZones> {
        self.one(&GetTimeZonesRequest).await
    }

    pub async fn get_hosts(&self) -> Result<Vec<Host>> {
        self.list(&GetHostsRequest).await
    }

    pub async fn get_host_details(&self, r: &GetHostDetailsRequest) -> Result<Host> {
        self.one(r).await
    }

    pub async fn modify_host(&self, r: &ModifyHostRequest) -> Result<Host> {
        self.one(r).await
    }
}
