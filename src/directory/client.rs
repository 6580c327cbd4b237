// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Group profile and membership lookups against the Graph-style directory API

use crate::constants::directory::{API_VERSION, REQUEST_TIMEOUT_SECS};
use crate::directory::token::AccessToken;
use crate::error::{ContactsError, Result};
use crate::types::{GroupProfile, Member, MemberList};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Lookups the report pipeline needs from the directory service.
///
/// Transport failures and non-2xx responses are errors. A 2xx body that does
/// not have the expected shape degrades to an empty value with a warning.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Profile of a group, including its display name
    async fn fetch_group(&self, group_id: &str) -> Result<GroupProfile>;

    /// Members of a group in the order the directory returns them
    async fn fetch_members(&self, group_id: &str) -> Result<Vec<Member>>;

    /// Mail address of every member, one entry per member
    async fn fetch_member_mails(&self, group_id: &str) -> Result<Vec<String>> {
        Ok(self
            .fetch_members(group_id)
            .await?
            .iter()
            .map(|m| m.mail().to_string())
            .collect())
    }
}

pub struct GraphClient {
    http: reqwest::Client,
    endpoint: String,
    authorization: SecretString,
}

impl GraphClient {
    pub fn new(endpoint: &str, token: &AccessToken) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self::with_client(http, endpoint, token))
    }

    pub fn with_client(http: reqwest::Client, endpoint: &str, token: &AccessToken) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            authorization: token.authorization(),
        }
    }

    fn group_url(&self, group_id: &str) -> String {
        format!("{}/{}/groups/{}", self.endpoint, API_VERSION, group_id)
    }

    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.authorization.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactsError::DirectoryStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl DirectoryApi for GraphClient {
    #[instrument(skip(self))]
    async fn fetch_group(&self, group_id: &str) -> Result<GroupProfile> {
        let body = self.get(&self.group_url(group_id)).await?;
        Ok(decode_or_default(&body, "group", group_id))
    }

    #[instrument(skip(self))]
    async fn fetch_members(&self, group_id: &str) -> Result<Vec<Member>> {
        let url = format!("{}/members", self.group_url(group_id));
        let body = self.get(&url).await?;
        Ok(decode_or_default::<MemberList>(&body, "members", group_id).value)
    }
}

/// Decode a successful response body, falling back to the empty value
fn decode_or_default<T: DeserializeOwned + Default>(body: &str, what: &str, group_id: &str) -> T {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Unexpected {} response for group {}, treating as empty: {}",
                what, group_id, e
            );
            T::default()
        }
    }
}
