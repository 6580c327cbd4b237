// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env {
    pub const AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";
    pub const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";
    pub const AZURE_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
    pub const KUBECONFIG: &str = "K8S_KUBECONFIG";
    pub const ROLEBINDING: &str = "K8S_ROLEBINDING";

    /// Restricts the hostname report to a single namespace
    pub const NAMESPACE: &str = "K8S_NAMESPACE";
    pub const LABEL_DEPARTMENT: &str = "K8S_LABEL_DEPARTMENT";
    pub const LABEL_APPLICATION: &str = "K8S_LABEL_APPLICATION";
    pub const LABEL_OPSTEAM: &str = "K8S_LABEL_OPSTEAM";
    /// `subject` or `binding`
    pub const CONTACT_NAMESPACE: &str = "K8S_CONTACT_NAMESPACE";
    pub const GROUP_ID: &str = "AZURE_GROUP_ID";
    pub const GRAPH_ENDPOINT: &str = "GRAPH_ENDPOINT";
    pub const AUTHORITY: &str = "AZURE_AUTHORITY";
}

/// Directory service endpoints and client settings
pub mod directory {
    pub const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.microsoft.com";
    pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";
    pub const API_VERSION: &str = "v1.0";
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Only subjects referencing this API group are treated as directory groups
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// Column widths of the printed tables
pub mod columns {
    pub const WIDE: usize = 27;
    pub const GROUP: usize = 35;
}
