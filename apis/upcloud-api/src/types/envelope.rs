// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Envelope handling
//!
//! The legacy API wraps every entity in a single-key object
//! (`{"server":{...}}`) and every collection in two of them
//! (`{"servers":{"server":[...]}}`). Entity types declare their keys by
//! implementing [`Envelope`] / [`EnvelopeList`]; nested collections inside
//! an entity use the serde adaptors in [`seq`].

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Entity returned inside `{"<KEY>":{...}}`
pub trait Envelope: DeserializeOwned {
    const KEY: &'static str;
}

/// Entity whose collections are returned inside `{"<LIST_KEY>":{"<KEY>":[...]}}`
pub trait EnvelopeList: Envelope {
    const LIST_KEY: &'static str;
}

/// Decode a single enveloped entity
pub fn decode_one<T: Envelope>(body: &[u8]) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    unwrap_one(value)
}

/// Decode an already parsed single enveloped entity
pub fn unwrap_one<T: Envelope>(value: Value) -> Result<T, serde_json::Error> {
    match value {
        Value::Object(mut map) => match map.remove(T::KEY) {
            Some(inner) => serde_json::from_value(inner),
            None => Err(serde_json::Error::custom(format!(
                "missing `{}` envelope, found keys [{}]",
                T::KEY,
                keys(&map)
            ))),
        },
        other => Err(serde_json::Error::custom(format!(
            "expected `{}` envelope object, found {}",
            T::KEY,
            kind(&other)
        ))),
    }
}

/// Decode an enveloped collection, preserving wire order
pub fn decode_list<T: EnvelopeList>(body: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    match value {
        Value::Object(mut map) => match map.remove(T::LIST_KEY) {
            Some(inner) => items(inner, T::KEY),
            None => Err(serde_json::Error::custom(format!(
                "missing `{}` envelope, found keys [{}]",
                T::LIST_KEY,
                keys(&map)
            ))),
        },
        other => Err(serde_json::Error::custom(format!(
            "expected `{}` envelope object, found {}",
            T::LIST_KEY,
            kind(&other)
        ))),
    }
}

/// Unwrap the inner `{"<key>":[...]}` level of a collection
///
/// Accepts the wrapper, a bare array, a single object under the key, and
/// `""`/`null` for an empty collection. Every element may additionally be
/// wrapped in its own `{"<key>":{...}}`.
pub fn items<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, serde_json::Error> {
    let list = match value {
        Value::Null => return Ok(Vec::new()),
        Value::String(s) if s.is_empty() => return Ok(Vec::new()),
        Value::Array(list) => list,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(list)) => list,
            Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::String(s)) if s.is_empty() => return Ok(Vec::new()),
            Some(single) => vec![single],
            None if map.is_empty() => return Ok(Vec::new()),
            None => {
                return Err(serde_json::Error::custom(format!(
                    "missing `{key}` collection, found keys [{}]",
                    keys(&map)
                )));
            }
        },
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected `{key}` collection, found {}",
                kind(&other)
            )));
        }
    };

    list.into_iter()
        .map(|item| serde_json::from_value(peel(item, key)))
        .collect()
}

fn peel(item: Value, key: &str) -> Value {
    match item {
        Value::Object(mut map) if map.len() == 1 && map.get(key).is_some_and(Value::is_object) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn keys(map: &Map<String, Value>) -> String {
    map.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serializes `value` as `{"<key>": value}`
pub struct Wrapped<'a, T: ?Sized> {
    key: &'static str,
    value: &'a T,
}

impl<'a, T: ?Sized> Wrapped<'a, T> {
    pub fn new(key: &'static str, value: &'a T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize + ?Sized> Serialize for Wrapped<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

#[doc(hidden)]
pub fn serialize_wrapped<T, S>(items: &[T], key: &'static str, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    Wrapped::new(key, items).serialize(serializer)
}

#[doc(hidden)]
pub fn deserialize_wrapped<'de, T, D>(deserializer: D, key: &str) -> Result<Vec<T>, D::Error>
where
    T: DeserializeOwned,
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let value = Value::deserialize(deserializer)?;
    items(value, key).map_err(D::Error::custom)
}

macro_rules! wrapped_seq {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(
            #[doc = concat!("Collection wrapped as `{\"", $key, "\":[...]}`")]
            pub mod $name {
                use serde::de::DeserializeOwned;
                use serde::{Deserializer, Serialize, Serializer};

                #[allow(clippy::ptr_arg)]
                pub fn serialize<T: Serialize, S: Serializer>(
                    items: &Vec<T>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    super::super::serialize_wrapped(items, $key, serializer)
                }

                pub fn deserialize<'de, T: DeserializeOwned, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Vec<T>, D::Error> {
                    super::super::deserialize_wrapped(deserializer, $key)
                }

                /// `Option` variant for modify requests
                pub mod option {
                    use serde::de::DeserializeOwned;
                    use serde::{Deserializer, Serialize, Serializer};

                    pub fn serialize<T: Serialize, S: Serializer>(
                        items: &Option<Vec<T>>,
                        serializer: S,
                    ) -> Result<S::Ok, S::Error> {
                        match items {
                            Some(items) => {
                                super::super::super::serialize_wrapped(items, $key, serializer)
                            }
                            None => serializer.serialize_none(),
                        }
                    }

                    pub fn deserialize<'de, T: DeserializeOwned, D: Deserializer<'de>>(
                        deserializer: D,
                    ) -> Result<Option<Vec<T>>, D::Error> {
                        super::super::super::deserialize_wrapped(deserializer, $key).map(Some)
                    }
                }
            }
        )*
    };
}

/// Serde adaptors for nested `{"<item>":[...]}` collections
pub mod seq {
    wrapped_seq! {
        labels => "label",
        tags => "tag",
        ip_addresses => "ip_address",
        storage_devices => "storage_device",
        interfaces => "interface",
        servers => "server",
        storages => "storage",
        networks => "network",
        backups => "backup",
        ssh_keys => "ssh_key",
        ip_networks => "ip_network",
        roles => "role",
        zones => "zone",
        ip_filters => "ip_filter",
        tag_access => "tag",
        permissions => "permission",
        routers => "router",
        static_routes => "static_route",
        stats => "stat",
        server_sizes => "server_size",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        name: String,
    }

    impl Envelope for Thing {
        const KEY: &'static str = "thing";
    }

    impl EnvelopeList for Thing {
        const LIST_KEY: &'static str = "things";
    }

    fn thing(name: &str) -> Thing {
        Thing {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_decode_one() {
        let t: Thing = decode_one(br#"{"thing":{"name":"a"}}"#).unwrap();
        assert_eq!(t, thing("a"));
    }

    #[test]
    fn test_decode_one_rejects_wrong_envelope() {
        let err = decode_one::<Thing>(br#"{"other":{"name":"a"}}"#).unwrap_err();
        assert!(err.to_string().contains("missing `thing` envelope"));
        assert!(decode_one::<Thing>(br#"[1]"#).is_err());
    }

    #[test]
    fn test_decode_list_forms() {
        let expected = vec![thing("a"), thing("b")];
        let plain: Vec<Thing> =
            decode_list(br#"{"things":{"thing":[{"name":"a"},{"name":"b"}]}}"#).unwrap();
        assert_eq!(plain, expected);

        let double: Vec<Thing> = decode_list(
            br#"{"things":{"thing":[{"thing":{"name":"a"}},{"thing":{"name":"b"}}]}}"#,
        )
        .unwrap();
        assert_eq!(double, expected);

        let single: Vec<Thing> = decode_list(br#"{"things":{"thing":{"name":"a"}}}"#).unwrap();
        assert_eq!(single, vec![thing("a")]);

        let empty: Vec<Thing> = decode_list(br#"{"things":""}"#).unwrap();
        assert!(empty.is_empty());
        let empty: Vec<Thing> = decode_list(br#"{"things":{"thing":[]}}"#).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_decode_list_surfaces_item_errors() {
        let err = decode_list::<Thing>(br#"{"things":{"thing":[{"nope":1}]}}"#).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_wrapped() {
        let body = serde_json::to_string(&Wrapped::new("x", &vec![1, 2])).unwrap();
        assert_eq!(body, r#"{"x":[1,2]}"#);
    }
}
