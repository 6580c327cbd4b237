// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width text tables. Column layout is relied upon by downstream scrapers.

use crate::constants::columns::{GROUP, WIDE};
use crate::report::pipeline::ContactRow;
use crate::types::HostBinding;
use std::io::{self, Write};

/// Hostname table followed by a blank line. Label columns are included when `with_labels` is set.
pub fn write_hostname_table<W: Write>(
    out: &mut W,
    hosts: &[HostBinding],
    with_labels: bool,
) -> io::Result<()> {
    if with_labels {
        writeln!(
            out,
            "{:<w$} {:<w$} {:<w$} {:<w$} {:<w$} {}",
            "hostname",
            "namespace",
            "department",
            "application",
            "opsteam",
            "context",
            w = WIDE
        )?;
        for h in hosts {
            writeln!(
                out,
                "{:<w$} {:<w$} {:<w$} {:<w$} {:<w$} {}",
                h.hostname,
                h.namespace,
                h.labels.department,
                h.labels.application,
                h.labels.ops_team,
                h.context,
                w = WIDE
            )?;
        }
    } else {
        writeln!(out, "{:<w$} {:<w$} {}", "hostname", "namespace", "context", w = WIDE)?;
        for h in hosts {
            writeln!(
                out,
                "{:<w$} {:<w$} {}",
                h.hostname,
                h.namespace,
                h.context,
                w = WIDE
            )?;
        }
    }

    writeln!(out)
}

pub fn write_contact_table<W: Write>(out: &mut W, rows: &[ContactRow]) -> io::Result<()> {
    writeln!(
        out,
        "{:<w$} {:<w$} {:<g$} {}",
        "contact",
        "namespace",
        "group",
        "context",
        w = WIDE,
        g = GROUP
    )?;
    for r in rows {
        writeln!(
            out,
            "{:<w$} {:<w$} {:<g$} {}",
            r.contact,
            r.namespace,
            r.group,
            r.context,
            w = WIDE,
            g = GROUP
        )?;
    }

    Ok(())
}
