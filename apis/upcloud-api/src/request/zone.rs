// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zone, plan, price, time zone and host requests

use http::Method;
use serde::Serialize;

use super::{Request, enveloped};

#[derive(Debug, Clone, Default)]
pub struct GetZonesRequest;

impl Request for GetZonesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/zone".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetPlansRequest;

impl Request for GetPlansRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/plan".to_string()
    }
}

/// Price list, decoded with [`crate::types::PricingByZone::decode`]
#[derive(Debug, Clone, Default)]
pub struct GetPricesRequest;

impl Request for GetPricesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/price".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetTimeZonesRequest;

impl Request for GetTimeZonesRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/timezone".to_string()
    }
}

/// Private cloud hosts
#[derive(Debug, Clone, Default)]
pub struct GetHostsRequest;

impl Request for GetHostsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/host".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GetHostDetailsRequest {
    pub id: u64,
}

impl Request for GetHostDetailsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/host/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModifyHostRequest {
    #[serde(skip)]
    pub id: u64,
    pub description: String,
}

impl Request for ModifyHostRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("/host/{}", self.id)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("host", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_host() {
        let r = ModifyHostRequest {
            id: 7653311107,
            description: "My New Host".to_string(),
        };
        assert_eq!(r.relative_url(), "/host/7653311107");
        let body = String::from_utf8(r.body().unwrap().unwrap()).unwrap();
        assert_eq!(body, r#"{"host":{"description":"My New Host"}}"#);
    }

    #[test]
    fn test_bodyless() {
        assert!(GetZonesRequest.body().unwrap().is_none());
        assert_eq!(GetPricesRequest.relative_url(), "/price");
        assert_eq!(GetHostDetailsRequest { id: 1 }.relative_url(), "/host/1");
    }
}
