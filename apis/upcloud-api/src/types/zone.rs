// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zones, plans, prices, time zones and private hosts

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codec;
use super::common::Boolean;
use super::envelope::{self, Envelope, EnvelopeList, seq};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub public: Boolean,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_zone: String,
}

impl Envelope for Zone {
    const KEY: &'static str = "zone";
}

impl EnvelopeList for Zone {
    const LIST_KEY: &'static str = "zones";
}

/// Preconfigured server plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(with = "codec::lenient")]
    pub core_number: u32,
    #[serde(with = "codec::lenient")]
    pub memory_amount: u32,
    pub name: String,
    #[serde(default, with = "codec::lenient")]
    pub public_traffic_out: u64,
    #[serde(default, with = "codec::lenient")]
    pub storage_size: u32,
    #[serde(default)]
    pub storage_tier: String,
    #[serde(default, with = "codec::lenient", skip_serializing_if = "is_zero")]
    pub gpu_amount: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gpu_model: String,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl Envelope for Plan {
    const KEY: &'static str = "plan";
}

impl EnvelopeList for Plan {
    const LIST_KEY: &'static str = "plans";
}

/// Price of one billable item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(default, with = "codec::lenient")]
    pub amount: u64,
    #[serde(default)]
    pub price: f64,
}

/// Item prices keyed by zone name, then by item name (`firewall`,
/// `server_plan_1xCPU-1GB`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PricingByZone(pub BTreeMap<String, BTreeMap<String, Price>>);

impl PricingByZone {
    pub fn zone(&self, name: &str) -> Option<&BTreeMap<String, Price>> {
        self.0.get(name)
    }

    pub fn price(&self, zone: &str, item: &str) -> Option<&Price> {
        self.0.get(zone).and_then(|items| items.get(item))
    }

    /// Decode either the `{"prices":{"zone":[{"name":..}]}}` form or a
    /// plain `{"<zone>":{"<item>":{..}}}` map
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(mut map) = value else {
            return Err(serde_json::Error::custom("expected prices object"));
        };
        let Some(prices) = map.remove("prices") else {
            return serde_json::from_value(Value::Object(map)).map(PricingByZone);
        };

        let mut out = BTreeMap::new();
        for zone in envelope::items::<Value>(prices, "zone")? {
            let Value::Object(mut fields) = zone else {
                return Err(serde_json::Error::custom("expected zone price object"));
            };
            let name = match fields.remove("name") {
                Some(Value::String(name)) => name,
                _ => return Err(serde_json::Error::custom("zone price without a name")),
            };
            let mut items = BTreeMap::new();
            for (item, price) in fields {
                if price.is_object() {
                    items.insert(item, serde_json::from_value(price)?);
                }
            }
            out.insert(name, items);
        }
        Ok(PricingByZone(out))
    }
}

impl<'de> Deserialize<'de> for PricingByZone {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

/// Time zone names accepted by server create/modify
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZones {
    #[serde(default, rename = "timezone")]
    pub time_zones: Vec<String>,
}

impl Envelope for TimeZones {
    const KEY: &'static str = "timezones";
}

/// Resource usage sample of a private host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    #[serde(
        default,
        with = "codec::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub value: f64,
}

/// Private cloud host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default, skip_serializing_if = "Boolean::is_unset")]
    pub windows_enabled: Boolean,
    #[serde(default, with = "seq::stats")]
    pub stats: Vec<Stat>,
}

impl Envelope for Host {
    const KEY: &'static str = "host";
}

impl EnvelopeList for Host {
    const LIST_KEY: &'static str = "hosts";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::{decode_list, decode_one};

    #[test]
    fn test_decode_zones() {
        let body = br#"{"zones":{"zone":[{"description":"Helsinki #1","id":"fi-hel1","public":"yes"},{"description":"Private","id":"fi-hel1-p1","public":"no","parent_zone":"fi-hel1"}]}}"#;
        let zones: Vec<Zone> = decode_list(body).unwrap();
        assert_eq!(zones[0].public, Boolean::True);
        assert_eq!(zones[1].parent_zone, "fi-hel1");
    }

    #[test]
    fn test_decode_plans() {
        let body = br#"{"plans":{"plan":[{"core_number":1,"memory_amount":1024,"name":"1xCPU-1GB","public_traffic_out":1024,"storage_size":25,"storage_tier":"maxiops"}]}}"#;
        let plans: Vec<Plan> = decode_list(body).unwrap();
        assert_eq!(plans[0].name, "1xCPU-1GB");
        assert_eq!(plans[0].storage_size, 25);
    }

    #[test]
    fn test_decode_prices_zone_list() {
        let body = br#"{
            "prices": {
                "zone": [
                    {"name": "de-fra1", "firewall": {"amount": 1, "price": 0.56}, "server_plan_1xCPU-1GB": {"amount": 1, "price": 0.744}},
                    {"name": "fi-hel1", "firewall": {"amount": 1, "price": 0.56}}
                ]
            }
        }"#;
        let pricing = PricingByZone::decode(body).unwrap();
        assert_eq!(pricing.0.len(), 2);
        let plan = pricing.price("de-fra1", "server_plan_1xCPU-1GB").unwrap();
        assert_eq!(plan.amount, 1);
        assert!((plan.price - 0.744).abs() < f64::EPSILON);
        assert!(pricing.zone("fi-hel1").is_some());
    }

    #[test]
    fn test_decode_prices_map() {
        let body = br#"{"de-fra1":{"firewall":{"amount":1,"price":0.56}}}"#;
        let pricing = PricingByZone::decode(body).unwrap();
        assert!(pricing.price("de-fra1", "firewall").is_some());
    }

    #[test]
    fn test_decode_timezones() {
        let body = br#"{"timezones":{"timezone":["Africa/Abidjan","Europe/Helsinki","UTC"]}}"#;
        let tz: TimeZones = decode_one(body).unwrap();
        assert_eq!(tz.time_zones.len(), 3);
    }

    #[test]
    fn test_decode_hosts() {
        let body = br#"{"hosts":{"host":[{"id":7653311107,"description":"My host #1","zone":"private-zone-id","windows_enabled":"no","stats":{"stat":[{"name":"cpu_idle","timestamp":"2019-08-09T12:46:57Z","value":95.2}]}}]}}"#;
        let hosts: Vec<Host> = decode_list(body).unwrap();
        assert_eq!(hosts[0].id, 7653311107);
        assert_eq!(hosts[0].stats[0].name, "cpu_idle");
    }
}
