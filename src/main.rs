// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_contacts::config::Config;
use kube_contacts::directory::{GraphClient, TokenProvider};
use kube_contacts::kubernetes::{create_client, current_context_label, ClusterReader};
use kube_contacts::report::{print_contacts, print_hostnames};

/// Report namespace contacts and exposed hostnames of a Kubernetes cluster
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    report: Option<Report>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    /// Hostnames exposed by ingress rules, per namespace
    Hostnames,
    /// Directory group members bound to namespaces through role bindings
    Contacts,
    /// Hostnames followed by contacts
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the tables
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let report = cli.report.unwrap_or(Report::All);

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: rolebinding={}, kubeconfig={}",
        config.rolebinding,
        config.kubeconfig.display()
    );

    let client = create_client(&config)
        .await
        .context("The kubeconfig cannot be loaded")?;
    let reader = ClusterReader::new(client, current_context_label(&config.kubeconfig));

    let mut stdout = io::stdout();

    if matches!(report, Report::Hostnames | Report::All) {
        print_hostnames(&reader, &config, &mut stdout).await?;
    }

    if matches!(report, Report::Contacts | Report::All) {
        let token = TokenProvider::new(&config)?
            .fetch_token()
            .await
            .context("Failed to acquire directory token")?;
        let directory = GraphClient::new(&config.graph_endpoint, &token)?;

        print_contacts(&reader, &directory, &config, &mut stdout).await?;
    }

    stdout.flush()?;
    Ok(())
}
