// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Directory service access: token acquisition and group lookups.

pub mod client;
pub mod token;

pub use client::{DirectoryApi, GraphClient};
pub use token::{AccessToken, TokenProvider};
