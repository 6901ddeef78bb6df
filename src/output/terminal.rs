//! Plain text output: one canonical CIDR per line.

use crate::models::{CompressReport, Network};
use std::io::Write;

pub fn write_networks<W: Write>(networks: &[Network], out: &mut W) -> std::io::Result<()> {
    for network in networks {
        writeln!(out, "{network}")?;
    }
    Ok(())
}

/// IPv4 networks first, then IPv6, each in ascending order.
pub fn write_text<W: Write>(report: &CompressReport, out: &mut W) -> std::io::Result<()> {
    for family in report.families() {
        write_networks(&family.networks, out)?;
    }
    out.flush()
}
