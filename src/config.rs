// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{directory, env as vars};
use anyhow::{bail, Result};
use secrecy::SecretString;
use std::env;
use std::path::PathBuf;

/// Which namespace a contact row reports for its group binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactNamespace {
    /// The namespace recorded on the role binding subject (may be empty)
    #[default]
    Subject,
    /// The namespace the role binding itself lives in
    Binding,
}

/// Namespace label keys used to enrich hostname rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelKeys {
    pub department: Option<String>,
    pub application: Option<String>,
    pub ops_team: Option<String>,
}

impl LabelKeys {
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.application.is_none() && self.ops_team.is_none()
    }
}

/// Service principal used to request directory tokens
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id: String,
    pub tenant_id: String,
    pub client_secret: SecretString,
}

/// Report configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub kubeconfig: PathBuf,
    /// Role bindings with this name are scanned for group subjects
    pub rolebinding: String,
    pub namespace: Option<String>,
    pub labels: LabelKeys,
    /// Only report on this directory group when set
    pub group_id: Option<String>,
    pub contact_namespace: ContactNamespace,
    pub graph_endpoint: String,
    pub authority: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &str| -> Result<String> {
            match optional(key) {
                Some(v) => Ok(v),
                None => bail!("environment variable [ {} ] is empty", key),
            }
        };

        let credentials = Credentials {
            client_id: required(vars::AZURE_CLIENT_ID)?,
            tenant_id: required(vars::AZURE_TENANT_ID)?,
            client_secret: required(vars::AZURE_CLIENT_SECRET)?.into(),
        };
        let kubeconfig = PathBuf::from(required(vars::KUBECONFIG)?);
        let rolebinding = required(vars::ROLEBINDING)?;

        let contact_namespace = match optional(vars::CONTACT_NAMESPACE).as_deref() {
            None | Some("subject") => ContactNamespace::Subject,
            Some("binding") => ContactNamespace::Binding,
            Some(other) => bail!(
                "environment variable [ {} ] must be 'subject' or 'binding', got '{}'",
                vars::CONTACT_NAMESPACE,
                other
            ),
        };

        Ok(Config {
            credentials,
            kubeconfig,
            rolebinding,
            namespace: optional(vars::NAMESPACE),
            labels: LabelKeys {
                department: optional(vars::LABEL_DEPARTMENT),
                application: optional(vars::LABEL_APPLICATION),
                ops_team: optional(vars::LABEL_OPSTEAM),
            },
            group_id: optional(vars::GROUP_ID),
            contact_namespace,
            graph_endpoint: optional(vars::GRAPH_ENDPOINT)
                .unwrap_or_else(|| directory::DEFAULT_GRAPH_ENDPOINT.to_string()),
            authority: optional(vars::AUTHORITY)
                .unwrap_or_else(|| directory::DEFAULT_AUTHORITY.to_string()),
        })
    }
}
