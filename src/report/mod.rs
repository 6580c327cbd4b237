// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Report assembly and printing.

pub mod pipeline;
pub mod table;

pub use pipeline::{build_contact_report, build_hostname_report, ContactGroup, ContactRow};
pub use table::{write_contact_table, write_hostname_table};

use crate::config::Config;
use crate::directory::DirectoryApi;
use crate::kubernetes::ClusterReader;
use std::io::{self, Write};
use tracing::error;

/// Print the hostname table. A cluster failure is logged and yields an empty table.
pub async fn print_hostnames<W: Write>(
    reader: &ClusterReader,
    config: &Config,
    out: &mut W,
) -> io::Result<()> {
    let hosts = match build_hostname_report(reader, config).await {
        Ok(hosts) => hosts,
        Err(e) => {
            error!("Failed to build hostname report: {}", e);
            Vec::new()
        }
    };

    write_hostname_table(out, &hosts, !config.labels.is_empty())
}

/// Print the contact table. A cluster failure is logged and yields an empty table.
pub async fn print_contacts<D: DirectoryApi, W: Write>(
    reader: &ClusterReader,
    directory: &D,
    config: &Config,
    out: &mut W,
) -> io::Result<()> {
    let groups = match build_contact_report(reader, directory, config).await {
        Ok(groups) => groups,
        Err(e) => {
            error!("Failed to build contact report: {}", e);
            Vec::new()
        }
    };

    let rows: Vec<ContactRow> = groups
        .iter()
        .flat_map(|g| g.rows(config.contact_namespace, reader.current_context_label()))
        .collect();

    write_contact_table(out, &rows)
}
