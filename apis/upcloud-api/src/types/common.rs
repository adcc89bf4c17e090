// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Primitive types shared by every resource

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Tri-state boolean
///
/// The legacy API encodes yes/no flags in several ways (`true`, `"yes"`,
/// `1`, `"1"`, ...) and modify requests need to tell "not sent" apart from
/// "sent as no". Decoding accepts every documented form; encoding always
/// produces `"yes"` or `"no"`. Struct fields holding a `Boolean` are
/// skipped on the wire while [`Boolean::Unset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Boolean {
    #[default]
    Unset,
    True,
    False,
}

impl Boolean {
    pub fn is_unset(&self) -> bool {
        matches!(self, Boolean::Unset)
    }

    pub fn is_true(self) -> bool {
        matches!(self, Boolean::True)
    }

    /// `None` while unset
    pub fn as_option(self) -> Option<bool> {
        match self {
            Boolean::Unset => None,
            Boolean::True => Some(true),
            Boolean::False => Some(false),
        }
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        if value { Boolean::True } else { Boolean::False }
    }
}

impl From<Option<bool>> for Boolean {
    fn from(value: Option<bool>) -> Self {
        value.map(Boolean::from).unwrap_or_default()
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boolean::Unset => f.write_str(""),
            Boolean::True => f.write_str("yes"),
            Boolean::False => f.write_str("no"),
        }
    }
}

impl Serialize for Boolean {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if self.is_true() { "yes" } else { "no" })
    }
}

struct BooleanVisitor;

impl<'de> Visitor<'de> for BooleanVisitor {
    type Value = Boolean;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a yes/no, true/false or 0/1 flag")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Boolean, E> {
        Ok(v.into())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Boolean, E> {
        Ok((v == 1).into())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Boolean, E> {
        Ok((v == 1).into())
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Boolean, E> {
        Ok(Boolean::False)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Boolean, E> {
        Ok(matches!(v, "true" | "yes" | "1").into())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Boolean, E> {
        Ok(Boolean::Unset)
    }

    fn visit_none<E: de::Error>(self) -> Result<Boolean, E> {
        Ok(Boolean::Unset)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Boolean, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Boolean, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Boolean::False)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Boolean, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Boolean::False)
    }
}

impl<'de> Deserialize<'de> for Boolean {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BooleanVisitor)
    }
}

/// Optional value for modify requests that can also be cleared
///
/// `Absent` leaves the remote value untouched (the field is skipped),
/// `Null` sends an explicit `null` and `Value` sends the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            Nullable::Absent | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        })
    }
}

/// Resource label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Configured status shared by the newer managed resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfiguredStatus {
    Started,
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Flags {
        #[serde(default, skip_serializing_if = "Boolean::is_unset")]
        flag: Boolean,
    }

    #[test_case(json!(true), Boolean::True; "json true")]
    #[test_case(json!("true"), Boolean::True; "string true")]
    #[test_case(json!("yes"), Boolean::True; "yes")]
    #[test_case(json!(1), Boolean::True; "one")]
    #[test_case(json!("1"), Boolean::True; "string one")]
    #[test_case(json!(false), Boolean::False; "json false")]
    #[test_case(json!("false"), Boolean::False; "string false")]
    #[test_case(json!("no"), Boolean::False; "no")]
    #[test_case(json!(0), Boolean::False; "zero")]
    #[test_case(json!("0"), Boolean::False; "string zero")]
    #[test_case(json!("maybe"), Boolean::False; "unrecognized string")]
    #[test_case(json!(7), Boolean::False; "unrecognized number")]
    #[test_case(json!({"a": 1}), Boolean::False; "object")]
    #[test_case(json!(null), Boolean::Unset; "null")]
    fn test_boolean_decode(input: serde_json::Value, expected: Boolean) {
        let flags: Flags = serde_json::from_value(json!({ "flag": input })).unwrap();
        assert_eq!(flags.flag, expected);
    }

    #[test]
    fn test_boolean_encode() {
        assert_eq!(serde_json::to_string(&Boolean::True).unwrap(), r#""yes""#);
        assert_eq!(serde_json::to_string(&Boolean::False).unwrap(), r#""no""#);
        let unset = Flags {
            flag: Boolean::Unset,
        };
        assert_eq!(serde_json::to_string(&unset).unwrap(), "{}");
        let missing: Flags = serde_json::from_str("{}").unwrap();
        assert_eq!(missing, unset);
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        labels: Nullable<Vec<Label>>,
    }

    #[test]
    fn test_nullable_three_states() {
        let absent = Patch {
            labels: Nullable::Absent,
        };
        let null = Patch {
            labels: Nullable::Null,
        };
        let empty = Patch {
            labels: Nullable::Value(vec![]),
        };
        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"labels":null}"#);
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"labels":[]}"#);

        for patch in [absent, null, empty] {
            let encoded = serde_json::to_string(&patch).unwrap();
            assert_eq!(serde_json::from_str::<Patch>(&encoded).unwrap(), patch);
        }
    }
}
