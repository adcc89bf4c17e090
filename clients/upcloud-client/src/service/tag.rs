// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use upcloud_api::request::{CreateTagRequest, DeleteTagRequest, GetTagsRequest, ModifyTagRequest};
use upcloud_api::types::Tag;

use crate::Client;
use crate::error::Result;

impl Client {
    pub async fn get_tags(&self) -> Result<Vec<Tag>> {
        self.list(&GetTagsRequest).await
    }

    pub async fn create_tag(&self, r: &CreateTagRequest) -> Result<Tag> {
        self.one(r).await
    }

    pub async fn modify_tag(&self, r: &ModifyTagRequest) -> Result<Tag> {
        self.one(r).await
    }

    pub async fn delete_tag(&self, r: &DeleteTagRequest) -> Result<()> {
        self.send(r).await
    }
}
