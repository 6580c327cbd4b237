// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only queries for namespaces, role bindings and ingresses

use crate::config::LabelKeys;
use crate::constants::RBAC_API_GROUP;
use crate::error::Result;
use crate::types::{GroupBinding, HostBinding, NamespaceLabels};
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::api::rbac::v1::RoleBinding;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// Enumerates cluster objects that feed the reports
pub struct ClusterReader {
    client: Client,
    context: String,
}

impl ClusterReader {
    pub fn new(client: Client, context: impl Into<String>) -> Self {
        Self {
            client,
            context: context.into(),
        }
    }

    /// Context label attached to every report row
    pub fn current_context_label(&self) -> &str {
        &self.context
    }

    /// Directory groups referenced by role bindings named `rolebinding`, in
    /// namespace order, then role binding order, then subject order
    #[instrument(skip(self))]
    pub async fn list_group_bindings(&self, rolebinding: &str) -> Result<Vec<GroupBinding>> {
        let mut groups = Vec::new();

        for namespace in self.namespaces(None).await? {
            let name = namespace.name_any();
            let role_bindings: Api<RoleBinding> = Api::namespaced(self.client.clone(), &name);
            let list = role_bindings.list(&ListParams::default()).await?;

            groups.extend(group_bindings(&list.items, rolebinding));
        }

        debug!("Found {} group bindings", groups.len());
        Ok(groups)
    }

    /// One row per ingress rule, optionally restricted to a single namespace
    #[instrument(skip(self, labels))]
    pub async fn list_host_bindings(
        &self,
        namespace: Option<&str>,
        labels: &LabelKeys,
    ) -> Result<Vec<HostBinding>> {
        let mut hosts = Vec::new();

        for ns in self.namespaces(namespace).await? {
            let name = ns.name_any();
            let ns_labels = namespace_labels(&ns, labels);
            let ingresses: Api<Ingress> = Api::namespaced(self.client.clone(), &name);
            let list = ingresses.list(&ListParams::default()).await?;

            hosts.extend(host_bindings(&list.items, &name, &ns_labels, &self.context));
        }

        debug!("Found {} host bindings", hosts.len());
        Ok(hosts)
    }

    async fn namespaces(&self, filter: Option<&str>) -> Result<Vec<Namespace>> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());

        match filter {
            Some(name) => Ok(vec![namespaces.get(name).await?]),
            None => Ok(namespaces.list(&ListParams::default()).await?.items),
        }
    }
}

/// Group subjects of the role bindings named `name`
pub fn group_bindings<'a>(
    role_bindings: &'a [RoleBinding],
    name: &'a str,
) -> impl Iterator<Item = GroupBinding> + 'a {
    role_bindings
        .iter()
        .filter(move |rb| rb.name_any() == name)
        .flat_map(|rb| {
            let binding_namespace = rb.namespace().unwrap_or_default();
            rb.subjects
                .iter()
                .flatten()
                .filter(|s| s.api_group.as_deref() == Some(RBAC_API_GROUP))
                .map(move |s| GroupBinding {
                    group_id: s.name.clone(),
                    namespace: s.namespace.clone().unwrap_or_default(),
                    binding_namespace: binding_namespace.clone(),
                })
        })
}

/// Hostnames of every ingress rule; a rule without a host yields an empty hostname
pub fn host_bindings<'a>(
    ingresses: &'a [Ingress],
    namespace: &'a str,
    labels: &'a NamespaceLabels,
    context: &'a str,
) -> impl Iterator<Item = HostBinding> + 'a {
    ingresses
        .iter()
        .filter_map(|i| i.spec.as_ref())
        .flat_map(|spec| spec.rules.iter().flatten())
        .map(move |rule| HostBinding {
            hostname: rule.host.clone().unwrap_or_default(),
            namespace: namespace.to_string(),
            labels: labels.clone(),
            context: context.to_string(),
        })
}

/// Resolve the configured label keys against a namespace's labels
pub fn namespace_labels(namespace: &Namespace, keys: &LabelKeys) -> NamespaceLabels {
    let lookup = |key: &Option<String>| {
        key.as_ref()
            .and_then(|k| namespace.labels().get(k))
            .cloned()
            .unwrap_or_default()
    };

    NamespaceLabels {
        department: lookup(&keys.department),
        application: lookup(&keys.application),
        ops_team: lookup(&keys.ops_team),
    }
}
