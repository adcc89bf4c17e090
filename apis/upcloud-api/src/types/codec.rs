// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Serde adaptors for the wire quirks of the legacy API
//!
//! Numeric fields such as `core_number` or `position` travel as strings on
//! some endpoints and as numbers on others. Decoding always accepts both;
//! [`quoted`] encodes as a string and [`lenient`] encodes as a number.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

fn parse_number<T, E>(raw: NumberOrString) -> Result<Option<T>, E>
where
    T: FromStr,
    T::Err: Display,
    E: de::Error,
{
    let text = match raw {
        NumberOrString::Signed(n) => n.to_string(),
        NumberOrString::Unsigned(n) => n.to_string(),
        NumberOrString::Float(n) if n.fract() == 0.0 => format!("{}", n as i64),
        NumberOrString::Float(n) => n.to_string(),
        NumberOrString::Text(s) => s.trim().to_string(),
    };
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<T>()
        .map(Some)
        .map_err(|e| E::custom(format!("invalid number {text:?}: {e}")))
}

fn deserialize_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    match raw {
        Some(raw) => Ok(parse_number(raw)?.unwrap_or_default()),
        None => Ok(T::default()),
    }
}

fn deserialize_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(raw) => parse_number(raw),
        None => Ok(None),
    }
}

/// Number encoded as a JSON string (`"2"`), decoded from either form
pub mod quoted {
    use super::*;
    use serde::Serializer;

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Default,
        T::Err: Display,
    {
        deserialize_number(deserializer)
    }

    /// `Option` variant; pair with `skip_serializing_if = "Option::is_none"`
    pub mod option {
        use super::*;

        pub fn serialize<T: Display, S: Serializer>(
            value: &Option<T>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: FromStr,
            T::Err: Display,
        {
            deserialize_optional_number(deserializer)
        }
    }
}

/// Number encoded as a JSON number, decoded from either form
pub mod lenient {
    use super::*;
    use serde::{Serialize, Serializer};

    pub fn serialize<T: Serialize, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Default,
        T::Err: Display,
    {
        deserialize_number(deserializer)
    }
}

/// Optional RFC 3339 timestamp; the legacy API sends `""` for "never"
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.trim().is_empty() => DateTime::parse_from_rfc3339(s.trim())
                .map(|t| Some(t.with_timezone(&Utc)))
                .map_err(|e| de::Error::custom(format!("invalid timestamp {s:?}: {e}"))),
            _ => Ok(None),
        }
    }
}

/// Optional value that the legacy API sends as `""` when unset
pub mod empty_as_none {
    use serde::de::{DeserializeOwned, Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            other => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
        }
    }
}

/// String list that the legacy API sometimes sends as `""` when empty
pub mod string_list {
    use serde::de::Deserializer;
    use serde::Deserialize;
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect(),
            Value::String(s) if s.is_empty() => Vec::new(),
            Value::String(s) => s.split(',').map(|p| p.trim().to_string()).collect(),
            _ => Vec::new(),
        })
    }
}
