// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Deserialize;

/// Group profile as returned by `GET /groups/{id}`
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub mail: Option<String>,
    pub mail_enabled: Option<bool>,
    pub mail_nickname: Option<String>,
    pub security_enabled: Option<bool>,
    pub visibility: Option<String>,
    pub group_types: Vec<String>,
}

impl GroupProfile {
    /// Display name, empty when unknown
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }
}

/// A single entry of a group's membership
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    pub id: String,
    pub display_name: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub job_title: Option<String>,
    pub mail: Option<String>,
    pub user_principal_name: Option<String>,
}

impl Member {
    /// Contact address, empty for members without a mailbox
    pub fn mail(&self) -> &str {
        self.mail.as_deref().unwrap_or_default()
    }
}

/// Response body of `GET /groups/{id}/members`
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MemberList {
    #[serde(rename = "@odata.context")]
    pub odata_context: Option<String>,
    pub value: Vec<Member>,
}
