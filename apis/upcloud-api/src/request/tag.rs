// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tag requests

use http::Method;

use super::{Request, enveloped};
use crate::types::Tag;

#[derive(Debug, Clone, Default)]
pub struct GetTagsRequest;

impl Request for GetTagsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        "/tag".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagRequest {
    pub tag: Tag,
}

impl Request for CreateTagRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/tag".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("tag", &self.tag)
    }
}

/// Rename or redescribe a tag, or replace its server list
#[derive(Debug, Clone)]
pub struct ModifyTagRequest {
    /// Current name
    pub name: String,
    pub tag: Tag,
}

impl Request for ModifyTagRequest {
    const METHOD: Method = Method::PUT;

    fn relative_url(&self) -> String {
        format!("/tag/{}", self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("tag", &self.tag)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteTagRequest {
    pub name: String,
}

impl Request for DeleteTagRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/tag/{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_create_tag() {
        let mut tag = Tag::new("DEV");
        tag.description = "Development servers".to_string();
        tag.servers = vec!["0077fa3d-32db-4b09-9f5f-30d9e9afb565".to_string()];
        let r = CreateTagRequest { tag };
        let body: Value = serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"tag": {
                "name": "DEV",
                "description": "Development servers",
                "servers": {"server": ["0077fa3d-32db-4b09-9f5f-30d9e9afb565"]}
            }})
        );
    }

    #[test]
    fn test_modify_tag_url() {
        let r = ModifyTagRequest {
            name: "DEV".to_string(),
            tag: Tag::new("PROD"),
        };
        assert_eq!(r.relative_url(), "/tag/DEV");
    }
}
