// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Records derived from the cluster and the directory service.

pub mod bindings;
pub mod directory;

pub use bindings::{GroupBinding, HostBinding, NamespaceLabels};
pub use directory::{GroupProfile, Member, MemberList};
