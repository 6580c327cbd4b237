// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! OAuth2 client-credentials token acquisition for the directory API

use crate::config::{Config, Credentials};
use crate::constants::directory::REQUEST_TIMEOUT_SECS;
use crate::error::{ContactsError, Result};
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument};
use url::form_urlencoded::Serializer;

const GRANT_TYPE: &str = "client_credentials";
const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// A bearer token for the directory API
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub token_type: String,
    pub access_token: SecretString,
    pub expires_in: Option<u64>,
}

impl AccessToken {
    /// Value of the `Authorization` header
    pub fn authorization(&self) -> SecretString {
        format!("{} {}", self.token_type, self.access_token.expose_secret()).into()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<u64>,
}

impl TokenResponse {
    fn into_token(self) -> Result<AccessToken> {
        let access_token = self
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ContactsError::TokenError("response has no access_token".into()))?;

        Ok(AccessToken {
            token_type: self
                .token_type
                .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string()),
            access_token: access_token.into(),
            expires_in: self.expires_in,
        })
    }
}

/// Exchanges service principal credentials for directory tokens
pub struct TokenProvider {
    http: reqwest::Client,
    token_url: String,
    scope: String,
    credentials: Credentials,
}

impl TokenProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self::with_client(
            http,
            &config.authority,
            &config.graph_endpoint,
            config.credentials.clone(),
        ))
    }

    pub fn with_client(
        http: reqwest::Client,
        authority: &str,
        graph_endpoint: &str,
        credentials: Credentials,
    ) -> Self {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            authority.trim_end_matches('/'),
            credentials.tenant_id
        );
        let scope = format!("{}/.default", graph_endpoint.trim_end_matches('/'));

        Self {
            http,
            token_url,
            scope,
            credentials,
        }
    }

    /// Request a fresh token with the client-credentials grant
    #[instrument(skip(self), fields(client_id = %self.credentials.client_id))]
    pub async fn fetch_token(&self) -> Result<AccessToken> {
        let body = Serializer::new(String::new())
            .append_pair("grant_type", GRANT_TYPE)
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("client_secret", self.credentials.client_secret.expose_secret())
            .append_pair("scope", &self.scope)
            .finish();

        let response = self
            .http
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| ContactsError::TokenError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ContactsError::TokenError(format!(
                "{} returned {}: {}",
                self.token_url, status, text
            )));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ContactsError::TokenError(format!("Failed to parse token: {}", e)))?
            .into_token()?;

        info!("Acquired directory token");
        Ok(token)
    }
}
