// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::ContactNamespace;

/// A directory group referenced by a role binding subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBinding {
    /// Opaque directory identifier taken from the subject name
    pub group_id: String,
    /// Namespace recorded on the subject, empty when the subject has none
    pub namespace: String,
    /// Namespace of the role binding that carried the subject
    pub binding_namespace: String,
}

impl GroupBinding {
    /// Namespace to print for this binding
    pub fn namespace_for(&self, source: ContactNamespace) -> &str {
        match source {
            ContactNamespace::Subject => &self.namespace,
            ContactNamespace::Binding => &self.binding_namespace,
        }
    }
}

/// Label-derived metadata of a namespace; missing labels are empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceLabels {
    pub department: String,
    pub application: String,
    pub ops_team: String,
}

/// A hostname exposed by an ingress rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBinding {
    pub hostname: String,
    pub namespace: String,
    pub labels: NamespaceLabels,
    /// Active kubeconfig context, empty when it could not be resolved
    pub context: String,
}
