// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server group requests

use http::Method;
use serde::Serialize;

use super::filter::{Filter, filter_params, with_query};
use super::{Request, enveloped};
use crate::types::envelope::seq;
use crate::types::{AntiAffinityPolicy, Label};

#[derive(Debug, Clone, Default)]
pub struct GetServerGroupsRequest {
    pub filters: Vec<Filter>,
}

impl Request for GetServerGroupsRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        with_query("/server-group", filter_params(&self.filters))
    }
}

#[derive(Debug, Clone)]
pub struct GetServerGroupRequest {
    pub uuid: String,
}

impl Request for GetServerGroupRequest {
    const METHOD: Method = Method::GET;

    fn relative_url(&self) -> String {
        format!("/server-group/{}", self.uuid)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateServerGroupRequest {
    #[serde(rename = "anti_affinity", skip_serializing_if = "Option::is_none")]
    pub anti_affinity_policy: Option<AntiAffinityPolicy>,
    #[serde(with = "seq::labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(rename = "servers", with = "seq::servers", skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    pub title: String,
}

impl Request for CreateServerGroupRequest {
    const METHOD: Method = Method::POST;

    fn relative_url(&self) -> String {
        "/server-group".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("server_group", self)
    }
}

/// Patch a server group; `members` replaces the whole member list
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyServerGroupRequest {
    #[serde(skip)]
    pub uuid: String,
    #[serde(rename = "anti_affinity", skip_serializing_if = "Option::is_none")]
    pub anti_affinity_policy: Option<AntiAffinityPolicy>,
    #[serde(with = "seq::labels::option", skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
    #[serde(
        rename = "servers",
        with = "seq::servers::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub members: Option<Vec<String>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl Request for ModifyServerGroupRequest {
    const METHOD: Method = Method::PATCH;

    fn relative_url(&self) -> String {
        format!("/server-group/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        enveloped("server_group", self)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteServerGroupRequest {
    pub uuid: String,
}

impl Request for DeleteServerGroupRequest {
    const METHOD: Method = Method::DELETE;

    fn relative_url(&self) -> String {
        format!("/server-group/{}", self.uuid)
    }
}

/// Add a member to a server group
///
/// There is no dedicated endpoint: the group is read and patched with the
/// extended member list.
#[derive(Debug, Clone)]
pub struct AddServerToServerGroupRequest {
    pub server_uuid: String,
    pub server_group_uuid: String,
}

impl AddServerToServerGroupRequest {
    /// Patch adding the server to `members`, `None` when already a member
    pub fn modify(&self, members: &[String]) -> Option<ModifyServerGroupRequest> {
        if members.contains(&self.server_uuid) {
            return None;
        }
        let mut members = members.to_vec();
        members.push(self.server_uuid.clone());
        Some(ModifyServerGroupRequest {
            uuid: self.server_group_uuid.clone(),
            members: Some(members),
            ..Default::default()
        })
    }
}

/// Remove a member from a server group, by read and patch like
/// [`AddServerToServerGroupRequest`]
#[derive(Debug, Clone)]
pub struct RemoveServerFromServerGroupRequest {
    pub server_uuid: String,
    pub server_group_uuid: String,
}

impl RemoveServerFromServerGroupRequest {
    /// Patch dropping the server from `members`, `None` when not a member
    pub fn modify(&self, members: &[String]) -> Option<ModifyServerGroupRequest> {
        if !members.contains(&self.server_uuid) {
            return None;
        }
        let members = members
            .iter()
            .filter(|m| **m != self.server_uuid)
            .cloned()
            .collect();
        Some(ModifyServerGroupRequest {
            uuid: self.server_group_uuid.clone(),
            members: Some(members),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::filter::FilterLabel;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn body<R: Request>(r: &R) -> Value {
        serde_json::from_slice(&r.body().unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_get_server_groups_filters() {
        let r = GetServerGroupsRequest {
            filters: vec![FilterLabel::new("color", "green").into()],
        };
        assert_eq!(r.relative_url(), "/server-group?label=color%3Dgreen");
    }

    #[test]
    fn test_create_server_group() {
        let r = CreateServerGroupRequest {
            anti_affinity_policy: Some(AntiAffinityPolicy::Yes),
            labels: vec![Label::new("managedBy", "upcloud-rust-api")],
            members: vec!["00798b85-efdc-41ca-8021-f6ef457b8531".to_string()],
            title: "test".to_string(),
        };
        assert_eq!(
            body(&r),
            json!({"server_group": {
                "anti_affinity": "yes",
                "labels": {"label": [{"key": "managedBy", "value": "upcloud-rust-api"}]},
                "servers": {"server": ["00798b85-efdc-41ca-8021-f6ef457b8531"]},
                "title": "test"
            }})
        );
    }

    #[test]
    fn test_membership_patches() {
        let members = vec!["a".to_string(), "b".to_string()];
        let add = AddServerToServerGroupRequest {
            server_uuid: "c".to_string(),
            server_group_uuid: "g".to_string(),
        };
        let patch = add.modify(&members).unwrap();
        assert_eq!(patch.relative_url(), "/server-group/g");
        assert_eq!(
            body(&patch),
            json!({"server_group": {"servers": {"server": ["a", "b", "c"]}}})
        );

        let remove = RemoveServerFromServerGroupRequest {
            server_uuid: "a".to_string(),
            server_group_uuid: "g".to_string(),
        };
        let patch = remove.modify(&members).unwrap();
        assert_eq!(
            body(&patch),
            json!({"server_group": {"servers": {"server": ["b"]}}})
        );
        assert!(remove.modify(&["b".to_string()]).is_none());
    }
}
