// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Directory request failed: {0}")]
    DirectoryTransport(#[from] reqwest::Error),

    #[error("Directory returned {status} for {url}: {body}")]
    DirectoryStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Token request failed: {0}")]
    TokenError(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
