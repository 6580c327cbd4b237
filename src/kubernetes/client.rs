// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{ContactsError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Create a Kubernetes client, preferring the mounted service account and
/// falling back to the configured kubeconfig file
#[instrument(skip(config), fields(kubeconfig = %config.kubeconfig.display()))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match KConfig::incluster() {
        Ok(c) => {
            info!("Using in-cluster service account configuration");
            return Client::try_from(c).map_err(|e| {
                ContactsError::KubeconfigError(format!("Failed to create client: {}", e))
            });
        }
        Err(e) => debug!("In-cluster configuration unavailable: {}", e),
    }

    create_client_from_kubeconfig(&config.kubeconfig).await
}

/// Create a Kubernetes client from a kubeconfig file
async fn create_client_from_kubeconfig(path: &Path) -> Result<Client> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        ContactsError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let client_config = KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| ContactsError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| ContactsError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Name of the active context in the kubeconfig, used to annotate report rows.
/// Returns an empty string when it cannot be determined.
pub fn current_context_label(path: &Path) -> String {
    match Kubeconfig::read_from(path) {
        Ok(kubeconfig) => kubeconfig.current_context.unwrap_or_else(|| {
            warn!("Kubeconfig {} has no current-context", path.display());
            String::new()
        }),
        Err(e) => {
            warn!(
                "Could not resolve current context from {}: {}",
                path.display(),
                e
            );
            String::new()
        }
    }
}
