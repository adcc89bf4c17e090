// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server tag types

use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, EnvelopeList, seq};

/// Account-wide tag and the servers carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// UUIDs of tagged servers
    #[serde(default, with = "seq::servers")]
    pub servers: Vec<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            servers: Vec::new(),
        }
    }
}

impl Envelope for Tag {
    const KEY: &'static str = "tag";
}

impl EnvelopeList for Tag {
    const LIST_KEY: &'static str = "tags";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::envelope::decode_list;

    #[test]
    fn test_decode_tags() {
        let body = br#"{
            "tags": {
                "tag": [
                    {"description": "Development servers", "name": "DEV", "servers": {"server": ["0077fa3d-32db-4b09-9f5f-30d9e9afb565"]}},
                    {"description": "Production servers", "name": "PROD", "servers": {"server": []}}
                ]
            }
        }"#;
        let tags: Vec<Tag> = decode_list(body).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].servers, vec!["0077fa3d-32db-4b09-9f5f-30d9e9afb565"]);
        assert!(tags[1].servers.is_empty());
    }

    #[test]
    fn test_encode_tag() {
        let tag = Tag::new("DEV");
        assert_eq!(
            serde_json::to_string(&tag).unwrap(),
            r#"{"name":"DEV","servers":{"server":[]}}"#
        );
    }
}
