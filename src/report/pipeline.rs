// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Joins cluster group bindings with directory membership

use crate::config::{Config, ContactNamespace};
use crate::directory::DirectoryApi;
use crate::error::Result;
use crate::kubernetes::ClusterReader;
use crate::types::{GroupBinding, GroupProfile, HostBinding};
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

/// Members and display name resolved for one group binding
#[derive(Debug, Clone, PartialEq)]
pub struct ContactGroup {
    pub binding: GroupBinding,
    /// Empty when the group could not be resolved
    pub display_name: String,
    pub members: Vec<String>,
}

/// One printable line of the contact report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub contact: String,
    pub namespace: String,
    pub group: String,
    pub context: String,
}

impl ContactGroup {
    /// One row per member, in directory order
    pub fn rows<'a>(
        &'a self,
        source: ContactNamespace,
        context: &'a str,
    ) -> impl Iterator<Item = ContactRow> + 'a {
        self.members.iter().map(move |member| ContactRow {
            contact: member.clone(),
            namespace: self.binding.namespace_for(source).to_string(),
            group: self.display_name.clone(),
            context: context.to_string(),
        })
    }
}

/// Group profiles fetched during a single report run
struct GroupCache<'a, D: DirectoryApi> {
    directory: &'a D,
    profiles: HashMap<String, GroupProfile>,
}

impl<'a, D: DirectoryApi> GroupCache<'a, D> {
    fn new(directory: &'a D) -> Self {
        Self {
            directory,
            profiles: HashMap::new(),
        }
    }

    async fn display_name(&mut self, group_id: &str) -> String {
        if let Some(profile) = self.profiles.get(group_id) {
            return profile.display_name().to_string();
        }

        let profile = match self.directory.fetch_group(group_id).await {
            Ok(p) => p,
            Err(e) => {
                warn!("Failed to fetch group {}: {}", group_id, e);
                GroupProfile::default()
            }
        };
        let name = profile.display_name().to_string();
        self.profiles.insert(group_id.to_string(), profile);
        name
    }
}

/// Resolve every discovered group binding to its members and display name.
///
/// Only cluster failures are returned as errors. A failing directory lookup
/// leaves that binding with no members and the run continues.
#[instrument(skip_all, fields(rolebinding = %config.rolebinding))]
pub async fn build_contact_report<D: DirectoryApi>(
    reader: &ClusterReader,
    directory: &D,
    config: &Config,
) -> Result<Vec<ContactGroup>> {
    let bindings = reader.list_group_bindings(&config.rolebinding).await?;
    let mut cache = GroupCache::new(directory);
    let mut groups = Vec::with_capacity(bindings.len());

    for binding in bindings {
        if let Some(id) = &config.group_id {
            if &binding.group_id != id {
                debug!("Skipping group {}", binding.group_id);
                continue;
            }
        }

        let members = match directory.fetch_member_mails(&binding.group_id).await {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to fetch members of group {}: {}", binding.group_id, e);
                Vec::new()
            }
        };

        let display_name = if members.is_empty() {
            String::new()
        } else {
            cache.display_name(&binding.group_id).await
        };

        groups.push(ContactGroup {
            binding,
            display_name,
            members,
        });
    }

    info!("Resolved {} group bindings", groups.len());
    Ok(groups)
}

/// Hostnames exposed by ingresses, with optional namespace label metadata
#[instrument(skip_all)]
pub async fn build_hostname_report(
    reader: &ClusterReader,
    config: &Config,
) -> Result<Vec<HostBinding>> {
    let hosts = reader
        .list_host_bindings(config.namespace.as_deref(), &config.labels)
        .await?;

    info!("Found {} hostnames", hosts.len());
    Ok(hosts)
}
