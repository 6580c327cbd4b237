// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and read-only cluster queries.

pub mod client;
pub mod reader;

pub use client::{create_client, current_context_label};
pub use reader::ClusterReader;
